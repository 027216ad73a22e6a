//! Users DTOs

use serde::Deserialize;

/// Body of `GET /crm/v7/users?type=AllUsers`
///
/// User records are kept as raw JSON so the export preserves every field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<serde_json::Value>,
}
