use serde_json::{Map, Value};

use crate::validation::domain::model::value_objects::field_rule::FieldRule;

pub trait FormRequest: Send + Sync {
    fn authorize(&self, payload: &Map<String, Value>) -> bool;

    fn rules(&self) -> Vec<FieldRule>;
}
