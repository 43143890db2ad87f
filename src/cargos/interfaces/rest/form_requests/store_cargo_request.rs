use serde_json::{Map, Value};

use crate::validation::domain::{
    model::{
        enums::check_kind::CheckKind,
        value_objects::{field_check::FieldCheck, field_rule::FieldRule},
    },
    services::form_request::FormRequest,
};

pub struct StoreCargoRequest;

impl StoreCargoRequest {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StoreCargoRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl FormRequest for StoreCargoRequest {
    fn authorize(&self, _payload: &Map<String, Value>) -> bool {
        true
    }

    fn rules(&self) -> Vec<FieldRule> {
        vec![
            FieldRule::new(
                "codigo".to_string(),
                vec![
                    FieldCheck::with_custom_message(
                        CheckKind::Required,
                        "Campo Código é obrigatório!".to_string(),
                    ),
                    FieldCheck::with_custom_message(
                        CheckKind::Numeric,
                        "Campo Código deve receber um número!".to_string(),
                    ),
                ],
            ),
            FieldRule::new(
                "descricao".to_string(),
                vec![
                    FieldCheck::with_custom_message(
                        CheckKind::Required,
                        "Campo Cargo é obrigatório!".to_string(),
                    ),
                    FieldCheck::new(CheckKind::Text),
                    FieldCheck::new(CheckKind::MaxLength(255)),
                ],
            ),
        ]
    }
}
