pub mod field_check;
pub mod field_error;
pub mod field_rule;
