pub mod store_cargo_request;
