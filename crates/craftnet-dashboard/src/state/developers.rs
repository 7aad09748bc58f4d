use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Developer-side data: plugins published by the account and their sales.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DevelopersState {
    pub has_api_token: bool,
    pub plugins: Vec<Value>,
    pub sales: Vec<Value>,
}

impl DevelopersState {
    pub fn receive_has_api_token(self, has_api_token: bool) -> Self {
        Self { has_api_token, ..self }
    }

    pub fn receive_plugins(self, plugins: Vec<Value>) -> Self {
        Self { plugins, ..self }
    }

    pub fn receive_sales(self, sales: Vec<Value>) -> Self {
        Self { sales, ..self }
    }
}
