
use crate::{KeyValueStore, Navigator, Result as StoreResult, StoreError};

use std::path::PathBuf;

/// Navigator fake that records every `replace` flag it was called with
#[derive(Debug, Default)]
pub(crate) struct RecordingNavigator {
    pub(crate) calls: Vec<bool>,
}

impl Navigator for RecordingNavigator {
    fn navigate_to_main(&mut self, replace: bool) {
        self.calls.push(replace);
    }
}

/// Store whose reads and writes always fail
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::file_read(
            PathBuf::from("/broken"),
            std::io::Error::other("disk unavailable"),
        ))
    }

    fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::file_write(
            PathBuf::from("/broken"),
            std::io::Error::other("disk unavailable"),
        ))
    }
}
