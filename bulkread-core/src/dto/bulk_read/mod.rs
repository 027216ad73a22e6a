//! Bulk-read job DTOs

use serde::{Deserialize, Serialize};

/// Body of `POST /crm/bulk/v7/read`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkReadBody {
    pub callback: Callback,
    pub query: Query,
}

impl BulkReadBody {
    /// Build a first-page query for `module` over the given fields
    pub fn new(module: &str, fields: Vec<String>, criteria: Option<String>) -> Self {
        Self {
            callback: Callback::default(),
            query: Query {
                module: ModuleRef {
                    api_name: module.to_string(),
                },
                page: 1,
                fields,
                criteria,
            },
        }
    }
}

/// Completion callback; left blank since callers poll instead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callback {
    pub url: String,
    pub method: String,
}

impl Default for Callback {
    fn default() -> Self {
        Self {
            url: String::new(),
            method: "post".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub module: ModuleRef,
    pub page: u32,
    pub fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRef {
    pub api_name: String,
}

/// Envelope returned on job creation: `{"data": [{"details": {"id": ...}}]}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkReadResponse {
    #[serde(default)]
    pub data: Vec<BulkReadEntry>,
}

impl BulkReadResponse {
    /// Job identifier at `data[0].details.id`, if present and non-empty
    pub fn job_id(&self) -> Option<&str> {
        self.data
            .first()
            .and_then(|entry| entry.details.id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkReadEntry {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: JobDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobDetails {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}
