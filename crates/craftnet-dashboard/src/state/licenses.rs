use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicensesState {
    pub cms_licenses: Vec<Value>,
    pub plugin_licenses: Vec<Value>,
}

impl LicensesState {
    pub fn receive_cms_licenses(self, cms_licenses: Vec<Value>) -> Self {
        Self { cms_licenses, ..self }
    }

    pub fn receive_plugin_licenses(self, plugin_licenses: Vec<Value>) -> Self {
        Self { plugin_licenses, ..self }
    }
}
