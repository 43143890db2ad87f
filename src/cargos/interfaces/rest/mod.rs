pub mod controllers;
pub mod form_requests;
pub mod resources;
