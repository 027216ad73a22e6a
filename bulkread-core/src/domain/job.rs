//! Bulk-read job handle types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel returned instead of a job ID when the users export ran directly
pub const USERS_FETCHED: &str = "USERS_FETCHED";

/// Opaque identifier of a bulk-read job living on the vendor side
///
/// Always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobId(String);

impl JobId {
    /// Wrap a vendor identifier, rejecting the empty string
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JobId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        JobId::new(value).ok_or_else(|| "job id cannot be empty".to_string())
    }
}

impl From<JobId> for String {
    fn from(id: JobId) -> Self {
        id.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of a bulk-read submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkReadOutcome {
    /// The vendor accepted the job; poll it with this ID
    Submitted(JobId),
    /// The module has no bulk-read support and was exported directly
    UsersFetched,
}

impl BulkReadOutcome {
    /// The vendor job ID, if a job was actually created
    pub fn job_id(&self) -> Option<&JobId> {
        match self {
            BulkReadOutcome::Submitted(id) => Some(id),
            BulkReadOutcome::UsersFetched => None,
        }
    }

    /// String handle as seen by callers: the job ID or the sentinel
    pub fn as_str(&self) -> &str {
        match self {
            BulkReadOutcome::Submitted(id) => id.as_str(),
            BulkReadOutcome::UsersFetched => USERS_FETCHED,
        }
    }
}

impl fmt::Display for BulkReadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_id_rejects_empty() {
        assert!(JobId::new("").is_none());
        assert_eq!(JobId::new(" ").map(String::from), Some(" ".to_string()));
        assert_eq!(JobId::new("554023000000568002").unwrap().as_str(), "554023000000568002");
    }

    #[test]
    fn test_job_id_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<JobId>("\"\"").is_err());
        let id: JobId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_outcome_sentinel() {
        let outcome = BulkReadOutcome::UsersFetched;
        assert_eq!(outcome.as_str(), USERS_FETCHED);
        assert!(outcome.job_id().is_none());

        let outcome = BulkReadOutcome::Submitted(JobId::new("abc").unwrap());
        assert_eq!(outcome.to_string(), "abc");
        assert_eq!(outcome.job_id().map(JobId::as_str), Some("abc"));
    }
}
