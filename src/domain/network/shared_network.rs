//! Shared network: the root of a DHCPv6 configuration domain

use super::{identifier, nested, optional_model_list, DhcpOption, Parameter, Subnet6};
use crate::domain::validation::coercion;
use crate::domain::validation::{FieldError, ValidatedModel, ValidationErrors};
use serde::Serialize;
use serde_json::Value;

pub const DESCRIPTION_MAX_LENGTH: usize = 79;

/// A named grouping of one option set, one parameter set and its subnets.
///
/// `description` distinguishes an empty string from an unset value and `subnets`
/// distinguishes an empty list from an unset one; both survive serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedNetwork {
    name: String,
    description: Option<String>,
    option: DhcpOption,
    parameter: Parameter,
    subnets: Option<Vec<Subnet6>>,
}

impl SharedNetwork {
    /// Build from typed parts; `name` and `description` are checked like raw input
    pub fn new(
        name: &str,
        description: Option<&str>,
        option: DhcpOption,
        parameter: Parameter,
        subnets: Option<Vec<Subnet6>>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = errors.collect("name", identifier(&Value::from(name)));
        let description = errors.collect(
            "description",
            description.map(|d| self::description(&Value::from(d))).transpose(),
        );

        let network = name.zip(description).map(|(name, description)| Self {
            name,
            description,
            option,
            parameter,
            subnets,
        });
        errors.finish(network)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn option(&self) -> &DhcpOption {
        &self.option
    }

    pub fn parameter(&self) -> &Parameter {
        &self.parameter
    }

    pub fn subnets(&self) -> Option<&[Subnet6]> {
        self.subnets.as_deref()
    }

    pub fn set_name(&mut self, raw: &Value) -> Result<(), ValidationErrors> {
        self.name = identifier(raw).map_err(|e| e.at("name"))?;
        Ok(())
    }

    /// `null` clears the description
    pub fn set_description(&mut self, raw: &Value) -> Result<(), ValidationErrors> {
        self.description = if raw.is_null() {
            None
        } else {
            Some(description(raw).map_err(|e| e.at("description"))?)
        };
        Ok(())
    }

    pub fn set_option(&mut self, raw: &Value) -> Result<(), ValidationErrors> {
        self.option = DhcpOption::validate(raw).map_err(|e| e.at("option"))?;
        Ok(())
    }

    pub fn set_parameter(&mut self, raw: &Value) -> Result<(), ValidationErrors> {
        self.parameter = Parameter::validate(raw).map_err(|e| e.at("parameter"))?;
        Ok(())
    }

    /// `null` clears the subnet list; `[]` keeps an empty one
    pub fn set_subnets(&mut self, raw: &Value) -> Result<(), ValidationErrors> {
        self.subnets = if raw.is_null() {
            None
        } else {
            Some(super::model_list(raw).map_err(|e| e.at("subnets"))?)
        };
        Ok(())
    }
}

impl ValidatedModel for SharedNetwork {
    const MODEL_NAME: &'static str = "SharedNetwork";

    fn validate(raw: &Value) -> Result<Self, ValidationErrors> {
        let obj = coercion::object(raw)?;
        let mut errors = ValidationErrors::new();

        let name = errors.collect("name", coercion::required(obj, "name").and_then(identifier));
        let description = errors.collect(
            "description",
            coercion::optional(obj, "description")
                .map(description)
                .transpose(),
        );
        let option = errors.collect_nested("option", nested::<DhcpOption>(obj, "option"));
        let parameter = errors.collect_nested("parameter", nested::<Parameter>(obj, "parameter"));
        let subnets = errors.collect_nested("subnets", optional_model_list::<Subnet6>(obj, "subnets"));

        let network = match (name, description, option, parameter, subnets) {
            (Some(name), Some(description), Some(option), Some(parameter), Some(subnets)) => {
                Some(Self {
                    name,
                    description,
                    option,
                    parameter,
                    subnets,
                })
            }
            _ => None,
        };
        errors.finish(network)
    }
}

fn description(raw: &Value) -> Result<String, FieldError> {
    let value = coercion::string(raw)?;
    coercion::check_max_length(value, DESCRIPTION_MAX_LENGTH)?;
    Ok(value.to_string())
}
