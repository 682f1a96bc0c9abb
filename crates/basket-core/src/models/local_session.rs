use crate::{CoreError, Result as CoreErrorResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const RECORD: &str = "local session";

/// "Logged in as `name`" marker for this device.
///
/// Stored as `{"name": "...", "startedAt": <unix millis>}`. `startedAt` may be
/// absent in stored data; a bare `{"name": "..."}` is still a valid session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalSession {
    pub name: String,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub started_at: Option<DateTime<Utc>>,
}

impl LocalSession {
    /// Session starting now.
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            started_at: Some(Utc::now()),
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
