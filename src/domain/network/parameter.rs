//! Address lifetime parameters

use crate::domain::validation::coercion;
use crate::domain::validation::{ErrorKind, FieldError, ValidatedModel, ValidationErrors};
use serde::Serialize;
use serde_json::{json, Value};

/// Both lifetimes must be strictly greater than this
pub const LIFETIME_GT: i64 = 0;

/// Preferred and valid lifetimes, with `preferred_lifetime <= valid_lifetime`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Parameter {
    preferred_lifetime: i64,
    valid_lifetime: i64,
}

impl Parameter {
    pub fn new(preferred_lifetime: i64, valid_lifetime: i64) -> Result<Self, ValidationErrors> {
        Self::validate(&lifetimes(preferred_lifetime, valid_lifetime))
    }

    pub fn preferred_lifetime(&self) -> i64 {
        self.preferred_lifetime
    }

    pub fn valid_lifetime(&self) -> i64 {
        self.valid_lifetime
    }

    /// Re-validate and assign; the ordering against the current valid lifetime is checked too
    pub fn set_preferred_lifetime(&mut self, raw: &Value) -> Result<(), ValidationErrors> {
        let preferred = lifetime(raw).map_err(|e| e.at("preferred_lifetime"))?;
        check_ordering(preferred, self.valid_lifetime, &lifetimes(preferred, self.valid_lifetime))?;
        self.preferred_lifetime = preferred;
        Ok(())
    }

    /// Re-validate and assign; `null` is rejected since a preferred lifetime is always set
    pub fn set_valid_lifetime(&mut self, raw: &Value) -> Result<(), ValidationErrors> {
        if raw.is_null() {
            return Err(valid_lifetime_unset(self.preferred_lifetime, &self.to_value()).into());
        }
        let valid = lifetime(raw).map_err(|e| e.at("valid_lifetime"))?;
        check_ordering(self.preferred_lifetime, valid, &lifetimes(self.preferred_lifetime, valid))?;
        self.valid_lifetime = valid;
        Ok(())
    }

    fn to_value(&self) -> Value {
        lifetimes(self.preferred_lifetime, self.valid_lifetime)
    }
}

impl ValidatedModel for Parameter {
    const MODEL_NAME: &'static str = "Parameter";

    fn validate(raw: &Value) -> Result<Self, ValidationErrors> {
        let obj = coercion::object(raw)?;
        let mut errors = ValidationErrors::new();

        let preferred = errors.collect(
            "preferred_lifetime",
            coercion::required(obj, "preferred_lifetime").and_then(lifetime),
        );

        // An unset valid lifetime is an invariant failure once the preferred one is known
        let valid = match (preferred, coercion::optional(obj, "valid_lifetime")) {
            (Some(preferred), None) => {
                errors.push(valid_lifetime_unset(preferred, raw));
                None
            }
            (None, None) => errors.collect(
                "valid_lifetime",
                coercion::required(obj, "valid_lifetime").and_then(lifetime),
            ),
            (_, Some(valid)) => errors.collect("valid_lifetime", lifetime(valid)),
        };

        if let (Some(preferred), Some(valid)) = (preferred, valid) {
            check_ordering(preferred, valid, raw)?;
        }

        let parameter = preferred.zip(valid).map(|(preferred_lifetime, valid_lifetime)| Self {
            preferred_lifetime,
            valid_lifetime,
        });
        errors.finish(parameter)
    }
}

fn lifetimes(preferred_lifetime: i64, valid_lifetime: i64) -> Value {
    json!({
        "preferred_lifetime": preferred_lifetime,
        "valid_lifetime": valid_lifetime,
    })
}

fn lifetime(raw: &Value) -> Result<i64, FieldError> {
    coercion::check_greater_than(coercion::integer(raw)?, LIFETIME_GT)
}

fn check_ordering(preferred: i64, valid: i64, input: &Value) -> Result<(), ValidationErrors> {
    if preferred > valid {
        return Err(FieldError::new(ErrorKind::PreferredExceedsValidLifetime, input.clone())
            .with_ctx("preferred_lifetime", preferred)
            .with_ctx("valid_lifetime", valid)
            .into());
    }
    Ok(())
}

fn valid_lifetime_unset(preferred: i64, input: &Value) -> FieldError {
    FieldError::new(ErrorKind::PreferredLifetimeRequiresValidLifetime, input.clone())
        .with_ctx("preferred_lifetime", preferred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_equal_lifetimes_are_valid() {
        let parameter = Parameter::validate(&json!({
            "preferred_lifetime": 1,
            "valid_lifetime": 1
        }))
        .unwrap();
        assert_eq!(parameter.preferred_lifetime(), 1);
        assert_eq!(parameter.valid_lifetime(), 1);
    }

    #[test]
    fn test_lax_integers() {
        let parameter = Parameter::validate(&json!({
            "preferred_lifetime": "3",
            "valid_lifetime": 4.0
        }))
        .unwrap();
        assert_eq!(parameter, Parameter::new(3, 4).unwrap());
    }

    #[test]
    fn test_preferred_greater_than_valid() {
        let raw = json!({"preferred_lifetime": 5, "valid_lifetime": 3});
        let errors = Parameter::validate(&raw).unwrap_err();
        assert_eq!(errors.len(), 1);

        let error = &errors.errors()[0];
        assert!(error.loc().is_root());
        assert_eq!(error.kind(), ErrorKind::PreferredExceedsValidLifetime);
        assert_eq!(error.ctx()["preferred_lifetime"], 5);
        assert_eq!(error.ctx()["valid_lifetime"], 3);
        assert_eq!(error.input(), &raw);
        assert!(error.message().contains("5 <= 3"));
    }

    #[test]
    fn test_zero_lifetime_is_rejected() {
        let errors = Parameter::validate(&json!({
            "preferred_lifetime": 0,
            "valid_lifetime": 0
        }))
        .unwrap_err();
        let kinds: Vec<(String, ErrorKind)> = errors
            .iter()
            .map(|e| (e.loc().to_string(), e.kind()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("preferred_lifetime".to_string(), ErrorKind::GreaterThan),
                ("valid_lifetime".to_string(), ErrorKind::GreaterThan),
            ]
        );
        assert_eq!(errors.errors()[0].message(), "Input should be greater than 0");
    }

    #[test]
    fn test_ordering_skipped_when_a_field_fails() {
        let errors = Parameter::validate(&json!({
            "preferred_lifetime": 5,
            "valid_lifetime": "soon"
        }))
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].loc().to_string(), "valid_lifetime");
        assert_eq!(errors.errors()[0].kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_unset_valid_lifetime() {
        for raw in [
            json!({"preferred_lifetime": 5}),
            json!({"preferred_lifetime": 5, "valid_lifetime": null}),
        ] {
            let errors = Parameter::validate(&raw).unwrap_err();
            assert_eq!(errors.len(), 1);
            let error = &errors.errors()[0];
            assert!(error.loc().is_root());
            assert_eq!(error.kind(), ErrorKind::PreferredLifetimeRequiresValidLifetime);
        }
    }

    #[test]
    fn test_both_missing() {
        let errors = Parameter::validate(&json!({})).unwrap_err();
        let locs: Vec<String> = errors.iter().map(|e| e.loc().to_string()).collect();
        assert_eq!(locs, vec!["preferred_lifetime", "valid_lifetime"]);
        assert!(errors.iter().all(|e| e.kind() == ErrorKind::Missing));
    }

    #[test]
    fn test_setters_revalidate() {
        let mut parameter = Parameter::new(2, 4).unwrap();

        let errors = parameter.set_preferred_lifetime(&json!(5)).unwrap_err();
        assert_eq!(errors.errors()[0].kind(), ErrorKind::PreferredExceedsValidLifetime);
        assert_eq!(parameter.preferred_lifetime(), 2);

        let errors = parameter.set_valid_lifetime(&json!(-1)).unwrap_err();
        assert_eq!(errors.errors()[0].loc().to_string(), "valid_lifetime");
        assert_eq!(parameter.valid_lifetime(), 4);

        let errors = parameter.set_valid_lifetime(&Value::Null).unwrap_err();
        assert_eq!(
            errors.errors()[0].kind(),
            ErrorKind::PreferredLifetimeRequiresValidLifetime
        );

        parameter.set_valid_lifetime(&json!("10")).unwrap();
        parameter.set_preferred_lifetime(&json!(10)).unwrap();
        assert_eq!(parameter, Parameter::new(10, 10).unwrap());
    }

    #[test]
    fn test_serialization() {
        let parameter = Parameter::new(1, 2).unwrap();
        assert_eq!(
            serde_json::to_value(parameter).unwrap(),
            json!({"preferred_lifetime": 1, "valid_lifetime": 2})
        );
    }
}
