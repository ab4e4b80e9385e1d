//! Shared-network configuration models
//!
//! Every model is built through `ValidatedModel::validate` from an untyped JSON mapping,
//! or through a typed constructor that enforces the same constraints. Errors from nested
//! models are reported under the field that holds them.

pub mod bind;
pub mod iana;
pub mod option;
pub mod parameter;
pub mod shared_network;
pub mod subnet6;

pub use bind::Bind;
pub use iana::Iana;
pub use option::DhcpOption;
pub use parameter::Parameter;
pub use shared_network::SharedNetwork;
pub use subnet6::Subnet6;

use crate::domain::validation::coercion;
use crate::domain::validation::{FieldError, ValidatedModel, ValidationErrors};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Word characters only; Unicode letters and digits included
pub const NAME_PATTERN: &str = r"^\w*$";
pub const NAME_MIN_LENGTH: usize = 1;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(NAME_PATTERN).expect("name pattern is valid"));

/// Non-empty word-character identifier, used for shared-network names and pool classes
pub(crate) fn identifier(raw: &Value) -> Result<String, FieldError> {
    let value = coercion::string(raw)?;
    coercion::check_min_length(value, NAME_MIN_LENGTH)?;
    coercion::check_pattern(value, &NAME_REGEX)?;
    Ok(value.to_string())
}

/// Required nested model held in `name`
pub(crate) fn nested<M: ValidatedModel>(
    obj: &Map<String, Value>,
    name: &str,
) -> Result<M, ValidationErrors> {
    M::validate(coercion::required(obj, name)?)
}

/// List of nested models; element errors carry their index
pub(crate) fn model_list<M: ValidatedModel>(raw: &Value) -> Result<Vec<M>, ValidationErrors> {
    let items = coercion::list(raw)?;
    coercion::each(items, M::validate)
}

/// Optional list of nested models held in `name`; absence and `null` both mean unset
pub(crate) fn optional_model_list<M: ValidatedModel>(
    obj: &Map<String, Value>,
    name: &str,
) -> Result<Option<Vec<M>>, ValidationErrors> {
    coercion::optional(obj, name)
        .map(model_list::<M>)
        .transpose()
}
