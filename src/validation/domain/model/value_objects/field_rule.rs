use crate::validation::domain::model::value_objects::field_check::FieldCheck;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldRule {
    field_name: String,
    checks: Vec<FieldCheck>,
}

impl FieldRule {
    pub fn new(field_name: String, checks: Vec<FieldCheck>) -> Self {
        Self { field_name, checks }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn checks(&self) -> &[FieldCheck] {
        &self.checks
    }
}
