use serde_json::{Map, Value};

use crate::validation::domain::model::{
    enums::{
        check_kind::CheckKind, expected_value_type::ExpectedValueType,
        rule_violation::RuleViolation, validation_result::ValidationResult,
    },
    value_objects::{field_check::FieldCheck, field_error::FieldError, field_rule::FieldRule},
};

lazy_static::lazy_static! {
    static ref NUMERIC_VALUE_REGEX: regex::Regex =
        regex::Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("valid regex");
}

enum CheckDisposition {
    Satisfied,
    SkipRemaining,
}

pub struct PayloadValidationEngine;

impl PayloadValidationEngine {
    pub fn validate(payload: Map<String, Value>, rules: &[FieldRule]) -> ValidationResult {
        let mut errors = Vec::new();

        for rule in rules {
            if let Some(error) = Self::first_violation(rule, &payload) {
                errors.push(error);
            }
        }

        if errors.is_empty() {
            ValidationResult::Accepted(payload)
        } else {
            ValidationResult::Rejected(errors)
        }
    }

    fn first_violation(rule: &FieldRule, payload: &Map<String, Value>) -> Option<FieldError> {
        let value = payload.get(rule.field_name());

        for check in rule.checks() {
            match Self::evaluate_check(rule.field_name(), check.kind(), value) {
                Ok(CheckDisposition::Satisfied) => continue,
                Ok(CheckDisposition::SkipRemaining) => return None,
                Err(violation) => {
                    return Some(FieldError::new(
                        rule.field_name().to_string(),
                        Self::resolve_message(check, &violation),
                    ));
                }
            }
        }

        None
    }

    fn evaluate_check(
        field_name: &str,
        kind: &CheckKind,
        value: Option<&Value>,
    ) -> Result<CheckDisposition, RuleViolation> {
        match kind {
            CheckKind::Required => {
                if Self::is_present(value) {
                    Ok(CheckDisposition::Satisfied)
                } else {
                    Err(RuleViolation::RequiredFieldMissing {
                        field: field_name.to_string(),
                    })
                }
            }
            CheckKind::Numeric => match value {
                None | Some(Value::Null) => Ok(CheckDisposition::SkipRemaining),
                Some(submitted) => {
                    if Self::is_numeric(submitted) {
                        Ok(CheckDisposition::Satisfied)
                    } else {
                        Err(RuleViolation::TypeMismatch {
                            field: field_name.to_string(),
                            expected: ExpectedValueType::Numeric,
                        })
                    }
                }
            },
            CheckKind::Text => match value {
                None | Some(Value::Null) => Ok(CheckDisposition::SkipRemaining),
                Some(Value::String(_)) => Ok(CheckDisposition::Satisfied),
                Some(_) => Err(RuleViolation::TypeMismatch {
                    field: field_name.to_string(),
                    expected: ExpectedValueType::Text,
                }),
            },
            CheckKind::MaxLength(max) => match value {
                None | Some(Value::Null) => Ok(CheckDisposition::SkipRemaining),
                Some(Value::String(text)) => {
                    if text.chars().count() > *max {
                        Err(RuleViolation::LengthExceeded {
                            field: field_name.to_string(),
                            max: *max,
                        })
                    } else {
                        Ok(CheckDisposition::Satisfied)
                    }
                }
                Some(_) => Ok(CheckDisposition::Satisfied),
            },
        }
    }

    fn resolve_message(check: &FieldCheck, violation: &RuleViolation) -> String {
        match check.custom_message() {
            Some(message) => message.to_string(),
            None => violation.to_string(),
        }
    }

    fn is_present(value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => false,
            Some(Value::String(text)) => !text.is_empty(),
            Some(_) => true,
        }
    }

    fn is_numeric(value: &Value) -> bool {
        match value {
            Value::Number(_) => true,
            Value::String(text) => NUMERIC_VALUE_REGEX.is_match(text),
            _ => false,
        }
    }
}
