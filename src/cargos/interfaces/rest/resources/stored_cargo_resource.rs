use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct StoredCargoResource {
    pub codigo: Value,
    pub descricao: String,
}
