pub mod check_kind;
pub mod expected_value_type;
pub mod rule_violation;
pub mod validation_result;
