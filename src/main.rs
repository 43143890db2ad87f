use axum::Router;
use cargos_axum_api::{
    cargos::{
        build_cargos_router,
        interfaces::rest::resources::{
            cargo_error_response_resource::{
                CargoErrorResponseResource, FieldValidationErrorResource,
            },
            stored_cargo_resource::StoredCargoResource,
        },
    },
    config::app_config::AppConfig,
};
use dotenvy::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        cargos_axum_api::cargos::interfaces::rest::controllers::cargos_rest_controller::store_cargo
    ),
    components(
        schemas(
            StoredCargoResource,
            CargoErrorResponseResource,
            FieldValidationErrorResource
        )
    ),
    tags(
        (name = "cargos", description = "Cadastro de cargos do catálogo do tenant")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();

    let app = Router::new()
        .merge(build_cargos_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    println!("Servidor rodando em http://localhost:{}", config.port);
    println!(
        "Swagger UI disponível em http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
