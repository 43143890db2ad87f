
pub use fixtures::{
    accepted_payload, catalog_item_rules, payload_from, rejected_errors, valid_catalog_item_payload,
};
