use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExpectedValueType {
    Numeric,
    Text,
}

impl ExpectedValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpectedValueType::Numeric => "número",
            ExpectedValueType::Text => "texto",
        }
    }
}

impl fmt::Display for ExpectedValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
