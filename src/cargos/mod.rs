use axum::Router;

use crate::cargos::interfaces::rest::controllers::cargos_rest_controller;

pub mod interfaces;

pub fn build_cargos_router() -> Router {
    cargos_rest_controller::router()
}
