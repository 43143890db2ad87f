pub mod payload_validation_engine;
