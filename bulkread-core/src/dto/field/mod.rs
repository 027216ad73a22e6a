//! Field-settings DTOs

use serde::Deserialize;

use crate::domain::field::FieldMeta;

/// Body of `GET /crm/v7/settings/fields?module=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldsResponse {
    #[serde(default)]
    pub fields: Vec<FieldMeta>,
}
