use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The persisted answer for one principal.
///
/// Keyed 1:1 by principal in the store: writing always replaces the prior
/// record in place (last-write-wins, no versioning).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionRecord {
    pub answer: String,
    pub full_name: String,
    pub timestamp: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Build a record stamped with the current time.
    pub fn now(answer: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            full_name: full_name.into(),
            timestamp: Utc::now(),
        }
    }
}
