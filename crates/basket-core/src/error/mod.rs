use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to encode {record}: {source} {location}")]
    Encode {
        record: &'static str,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Failed to decode {record}: {source} {location}")]
    Decode {
        record: &'static str,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates Encode error at caller location.
    #[track_caller]
    pub fn encode(record: &'static str, source: serde_json::Error) -> Self {
        Self::Encode {
            record,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Decode error at caller location.
    #[track_caller]
    pub fn decode(record: &'static str, source: serde_json::Error) -> Self {
        Self::Decode {
            record,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
