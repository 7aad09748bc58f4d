//! Dashboard bundle returned by the account API (camelCase JSON).
//!
//! Records are kept as raw JSON values; the dashboard stores them verbatim.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One response carrying every dashboard slice.
///
/// Records inside each list are kept verbatim. The containers are normalized
/// at the decode boundary: a list field that is missing or `null` becomes an
/// empty list, a missing `apps` becomes `Value::Null`, and a missing object
/// field becomes `None`. The slices hold no `Option<Vec<_>>`, so "no records"
/// has a single representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardPayload {
    #[serde(deserialize_with = "null_as_empty")]
    pub categories: Vec<Value>,
    #[serde(deserialize_with = "null_as_empty")]
    pub countries: Vec<Value>,
    pub current_user: Option<CurrentUser>,
    #[serde(deserialize_with = "null_as_empty")]
    pub plugins: Vec<Value>,
    #[serde(deserialize_with = "null_as_empty")]
    pub sales: Vec<Value>,
    #[serde(deserialize_with = "null_as_empty")]
    pub cms_licenses: Vec<Value>,
    #[serde(deserialize_with = "null_as_empty")]
    pub plugin_licenses: Vec<Value>,
    pub upcoming_invoice: Option<Value>,
    pub apps: Value,
    pub billing_address: Option<Value>,
    pub card: Option<Value>,
}

/// The signed-in account. Only `hasApiToken` is read; everything else is carried through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(default)]
    pub has_api_token: bool,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}
