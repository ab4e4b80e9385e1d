use crate::{
    domain::validation::{MessageCatalog, ValidatedModel},
    shared::{
        error::{AppError, AppResult},
        logging::LoggingUtils,
    },
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// Validates raw input into any configuration model.
///
/// Rejections have their messages rendered with the configured catalog before they
/// leave the application layer.
pub struct ValidateModelUseCase {
    catalog: Arc<MessageCatalog>,
}

impl ValidateModelUseCase {
    pub fn new(catalog: Arc<MessageCatalog>) -> Self {
        Self { catalog }
    }

    /// Validate `raw` as an `M`
    pub fn execute<M: ValidatedModel>(&self, request_id: &str, raw: &Value) -> AppResult<M> {
        let start = Instant::now();

        match M::validate(raw) {
            Ok(model) => {
                LoggingUtils::log_success(request_id, M::MODEL_NAME, elapsed_ms(start));
                Ok(model)
            }
            Err(mut errors) => {
                self.catalog.apply(&mut errors);
                LoggingUtils::log_rejection(
                    request_id,
                    M::MODEL_NAME,
                    errors.len(),
                    elapsed_ms(start),
                );
                Err(AppError::InvalidModel {
                    model: M::MODEL_NAME,
                    errors,
                })
            }
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::network::{Bind, SharedNetwork};
    use serde_json::json;
    use std::collections::HashMap;

    fn use_case() -> ValidateModelUseCase {
        ValidateModelUseCase::new(Arc::new(MessageCatalog::new()))
    }

    #[test]
    fn test_valid_model_is_returned() {
        let bind: Bind = use_case()
            .execute(
                "req_test",
                &json!({
                    "duid": "000300011A2B3C4D5E6F7A8B",
                    "iaid": "0",
                    "ip6_address": "::1"
                }),
            )
            .unwrap();
        assert_eq!(bind.iaid().as_str(), "0");
    }

    #[test]
    fn test_rejection_carries_model_and_errors() {
        let error = use_case()
            .execute::<SharedNetwork>("req_test", &json!({"name": "x y"}))
            .unwrap_err();
        match error {
            AppError::InvalidModel { model, errors } => {
                assert_eq!(model, "SharedNetwork");
                let locs: Vec<String> = errors.iter().map(|e| e.loc().to_string()).collect();
                assert_eq!(locs, vec!["name", "option", "parameter"]);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_configured_messages_are_applied() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "preferred_lifetime__lte__valid_lifetime__greater".to_string(),
            "{preferred_lifetime} exceeds {valid_lifetime}".to_string(),
        );
        let use_case =
            ValidateModelUseCase::new(Arc::new(MessageCatalog::with_overrides(&overrides).unwrap()));

        let error = use_case
            .execute::<crate::domain::network::Parameter>(
                "req_test",
                &json!({"preferred_lifetime": 5, "valid_lifetime": 3}),
            )
            .unwrap_err();
        let payload = error.to_error_payload();
        assert_eq!(payload["errors"][0]["msg"], "5 exceeds 3");
    }
}
