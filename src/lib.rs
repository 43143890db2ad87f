pub mod cargos;
pub mod config;
pub mod validation;
