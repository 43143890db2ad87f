use crate::validation::domain::model::enums::check_kind::CheckKind;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldCheck {
    kind: CheckKind,
    custom_message: Option<String>,
}

impl FieldCheck {
    pub fn new(kind: CheckKind) -> Self {
        Self {
            kind,
            custom_message: None,
        }
    }

    pub fn with_custom_message(kind: CheckKind, message: String) -> Self {
        Self {
            kind,
            custom_message: Some(message),
        }
    }

    pub fn kind(&self) -> &CheckKind {
        &self.kind
    }

    pub fn custom_message(&self) -> Option<&str> {
        self.custom_message.as_deref()
    }
}
