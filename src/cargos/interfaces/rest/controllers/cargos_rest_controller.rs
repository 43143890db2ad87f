use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::{Map, Value};

use crate::{
    cargos::interfaces::rest::{
        form_requests::store_cargo_request::StoreCargoRequest,
        resources::{
            cargo_error_response_resource::{
                CargoErrorResponseResource, FieldValidationErrorResource,
            },
            stored_cargo_resource::StoredCargoResource,
        },
    },
    validation::{
        application::validation_engines::payload_validation_engine::PayloadValidationEngine,
        domain::{
            model::{
                enums::validation_result::ValidationResult,
                value_objects::field_error::FieldError,
            },
            services::form_request::FormRequest,
        },
    },
};

pub fn router() -> Router {
    Router::new().route("/cargos", post(store_cargo))
}

#[utoipa::path(
    post,
    path = "/cargos",
    tag = "cargos",
    request_body = Value,
    responses(
        (status = 201, description = "Cargo validado e aceito", body = StoredCargoResource),
        (status = 403, description = "Ação não autorizada", body = CargoErrorResponseResource),
        (status = 422, description = "Payload com campos inválidos", body = CargoErrorResponseResource)
    )
)]
pub async fn store_cargo(
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<StoredCargoResource>), (StatusCode, Json<CargoErrorResponseResource>)>
{
    let payload = match body {
        Value::Object(fields) => fields,
        _ => Map::new(),
    };

    let form_request = StoreCargoRequest::new();

    if !form_request.authorize(&payload) {
        return Err((
            StatusCode::FORBIDDEN,
            Json(CargoErrorResponseResource {
                message: "Esta ação não é autorizada.".to_string(),
                errors: Vec::new(),
            }),
        ));
    }

    match PayloadValidationEngine::validate(payload, &form_request.rules()) {
        ValidationResult::Accepted(validated) => Ok((
            StatusCode::CREATED,
            Json(StoredCargoResource {
                codigo: validated.get("codigo").cloned().unwrap_or(Value::Null),
                descricao: validated
                    .get("descricao")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            }),
        )),
        ValidationResult::Rejected(errors) => Err(map_validation_errors(errors)),
    }
}

fn map_validation_errors(
    errors: Vec<FieldError>,
) -> (StatusCode, Json<CargoErrorResponseResource>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(CargoErrorResponseResource {
            message: "Os dados fornecidos são inválidos.".to_string(),
            errors: errors
                .into_iter()
                .map(|error| FieldValidationErrorResource {
                    field: error.field().to_string(),
                    message: error.message().to_string(),
                })
                .collect(),
        }),
    )
}
