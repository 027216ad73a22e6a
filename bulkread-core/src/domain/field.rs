//! Module field metadata

use serde::{Deserialize, Serialize};

/// Data types the bulk-read API refuses to export
pub const UNSUPPORTED_DATA_TYPES: &[&str] = &[
    "subform",
    "multiselectlookup",
    "fileupload",
    "imageupload",
    "profileimage",
    "multi_module_lookup",
];

/// A field as described by the module schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    pub api_name: String,
    #[serde(default)]
    pub data_type: String,
    #[serde(default)]
    pub field_label: Option<String>,
}

impl FieldMeta {
    /// Whether a bulk-read job may include this field
    pub fn is_bulk_readable(&self) -> bool {
        !UNSUPPORTED_DATA_TYPES.contains(&self.data_type.as_str())
    }
}

/// Outcome of checking candidate fields against a schema
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValidation {
    /// Fields to request, in input order
    pub valid: Vec<String>,
    /// Fields dropped because they are unknown or not exportable
    pub skipped: Vec<String>,
}

impl FieldValidation {
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }
}
