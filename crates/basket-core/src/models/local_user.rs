use crate::{CoreError, Result as CoreErrorResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const RECORD: &str = "local user";

/// Identity registered on this device.
///
/// Stored as `{"name": "...", "createdAt": <unix millis>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalUser {
    pub name: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl LocalUser {
    /// New user created now.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_created_at(name, Utc::now())
    }

    pub fn with_created_at(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            created_at,
        }
    }

    #[track_caller]
    pub fn to_json(&self) -> CoreErrorResult<String> {
        serde_json::to_string(self).map_err(|e| CoreError::encode(RECORD, e))
    }

    #[track_caller]
    pub fn from_json(json: &str) -> CoreErrorResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::decode(RECORD, e))
    }
}
