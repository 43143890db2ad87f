use thiserror::Error;

use crate::validation::domain::model::enums::expected_value_type::ExpectedValueType;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RuleViolation {
    #[error("O campo {field} é obrigatório.")]
    RequiredFieldMissing { field: String },

    #[error("O campo {field} deve ser um {expected}.")]
    TypeMismatch {
        field: String,
        expected: ExpectedValueType,
    },

    #[error("O campo {field} não pode ter mais que {max} caracteres.")]
    LengthExceeded { field: String, max: usize },
}
