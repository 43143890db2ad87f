use serde_json::{Map, Value};

use crate::validation::domain::model::value_objects::field_error::FieldError;

#[derive(Clone, Debug, PartialEq)]
pub enum ValidationResult {
    Accepted(Map<String, Value>),
    Rejected(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, ValidationResult::Rejected(_))
    }
}
