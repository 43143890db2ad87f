#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CheckKind {
    Required,
    Numeric,
    Text,
    MaxLength(usize),
}

impl CheckKind {
    pub fn rule_key(&self) -> &'static str {
        match self {
            CheckKind::Required => "required",
            CheckKind::Numeric => "numeric",
            CheckKind::Text => "string",
            CheckKind::MaxLength(_) => "max",
        }
    }
}
