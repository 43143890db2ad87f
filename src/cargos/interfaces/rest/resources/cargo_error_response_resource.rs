use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CargoErrorResponseResource {
    pub message: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldValidationErrorResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct FieldValidationErrorResource {
    pub field: String,
    pub message: String,
}
