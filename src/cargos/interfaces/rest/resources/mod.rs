pub mod cargo_error_response_resource;
pub mod stored_cargo_resource;
