use axum::{Json, http::StatusCode};
use cargos_axum_api::cargos::interfaces::rest::{
    controllers::cargos_rest_controller::store_cargo,
    resources::cargo_error_response_resource::CargoErrorResponseResource,
};
use serde_json::json;

#[tokio::test]
async fn posting_a_valid_payload_returns_created_with_the_submitted_fields() {
    let result = store_cargo(Json(json!({ "codigo": 10, "descricao": "Supervisor" }))).await;

    let (status, Json(resource)) = result.expect("valid payload should be accepted");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resource.codigo, json!(10));
    assert_eq!(resource.descricao, "Supervisor");
}

#[tokio::test]
async fn numeric_string_codigo_is_echoed_without_coercion() {
    let result = store_cargo(Json(json!({ "codigo": "10", "descricao": "Supervisor" }))).await;

    let (status, Json(resource)) = result.expect("numeric string codigo should be accepted");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resource.codigo, json!("10"));
}

#[tokio::test]
async fn posting_an_empty_payload_returns_unprocessable_entity_with_ordered_errors() {
    let result = store_cargo(Json(json!({}))).await;

    let (status, Json(body)) = result.expect_err("empty payload should be rejected");
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.message, "Os dados fornecidos são inválidos.");
    assert_eq!(body.errors.len(), 2);
    assert_eq!(body.errors[0].field, "codigo");
    assert_eq!(body.errors[0].message, "Campo Código é obrigatório!");
    assert_eq!(body.errors[1].field, "descricao");
    assert_eq!(body.errors[1].message, "Campo Cargo é obrigatório!");
}

#[tokio::test]
async fn posting_a_non_object_body_is_treated_as_missing_fields() {
    let result = store_cargo(Json(json!([1, 2, 3]))).await;

    let (status, Json(body)) = result.expect_err("non-object body should be rejected");
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.errors.len(), 2);
    assert_eq!(body.errors[0].message, "Campo Código é obrigatório!");
    assert_eq!(body.errors[1].message, "Campo Cargo é obrigatório!");
}

#[tokio::test]
async fn validation_error_body_serializes_with_the_ordered_errors_array() {
    let result = store_cargo(Json(json!({ "codigo": "abc" }))).await;

    let (_, Json(body)) = result.expect_err("invalid payload should be rejected");
    let serialized = serde_json::to_value(&body).expect("error body should serialize");
    assert_eq!(
        serialized,
        json!({
            "message": "Os dados fornecidos são inválidos.",
            "errors": [
                { "field": "codigo", "message": "Campo Código deve receber um número!" },
                { "field": "descricao", "message": "Campo Cargo é obrigatório!" }
            ]
        })
    );
}

#[tokio::test]
async fn forbidden_body_serializes_without_an_errors_key() {
    let body = CargoErrorResponseResource {
        message: "Esta ação não é autorizada.".to_string(),
        errors: Vec::new(),
    };

    let serialized = serde_json::to_value(&body).expect("error body should serialize");
    assert_eq!(serialized, json!({ "message": "Esta ação não é autorizada." }));
}
