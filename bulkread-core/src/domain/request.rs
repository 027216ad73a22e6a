//! Bulk-read request

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Module that the vendor cannot bulk-read; it is exported directly instead
pub const USERS_MODULE: &str = "Users";

/// Field the modification-time criteria filters on
pub const LAST_MODIFIED_FIELD: &str = "Last_Modified_Time";

/// What a caller wants exported from the CRM
///
/// Built per call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkReadRequest {
    /// Module API name (e.g. "Leads", "Deals")
    pub module: String,
    /// Candidate field API names, validated before submission
    pub fields: Vec<String>,
    /// Only export records modified after this timestamp
    pub since: Option<String>,
}

impl BulkReadRequest {
    pub fn new(module: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            module: module.into(),
            fields,
            since: None,
        }
    }

    /// Restrict the export to records modified after `since`
    ///
    /// The value is passed to the vendor as-is.
    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    /// Restrict the export to records modified after `since`, rendered as
    /// ISO-8601 with an explicit offset
    pub fn modified_after(self, since: DateTime<Utc>) -> Self {
        self.with_since(since.to_rfc3339_opts(SecondsFormat::Secs, false))
    }

    /// Whether this request targets the module without bulk-read support
    pub fn is_users_module(&self) -> bool {
        self.module == USERS_MODULE
    }

    /// Vendor criteria string, present only for a non-empty `since`
    pub fn criteria(&self) -> Option<String> {
        self.since
            .as_deref()
            .filter(|since| !since.is_empty())
            .map(|since| format!("({}:after:{})", LAST_MODIFIED_FIELD, since))
    }
}
