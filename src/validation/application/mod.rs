pub mod validation_engines;
