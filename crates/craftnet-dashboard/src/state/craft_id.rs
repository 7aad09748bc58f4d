use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference data: plugin categories and billing countries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CraftIdState {
    pub categories: Vec<Value>,
    pub countries: Vec<Value>,
}

impl CraftIdState {
    pub fn receive_categories(self, categories: Vec<Value>) -> Self {
        Self { categories, ..self }
    }

    pub fn receive_countries(self, countries: Vec<Value>) -> Self {
        Self { countries, ..self }
    }
}
