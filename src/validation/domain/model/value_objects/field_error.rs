#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldError {
    field: String,
    message: String,
}

impl FieldError {
    pub fn new(field: String, message: String) -> Self {
        Self { field, message }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
