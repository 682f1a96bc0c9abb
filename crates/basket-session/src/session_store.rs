use crate::{KeyValueStore, Result as StoreResult};

use basket_core::LocalSession;
use log::{info, warn};

pub const LOCAL_SESSION_KEY: &str = "local_session";

/// The single active session on this device.
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    backend: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Starts a session for `name`, overwriting whichever session was active.
    pub fn start_local_session(&self, name: &str) -> StoreResult<LocalSession> {
        let session = LocalSession::start(name);
        let json = session.to_json()?;
        self.backend.set(LOCAL_SESSION_KEY, &json)?;

        info!("Started local session for {name}");
        Ok(session)
    }

    /// The active session, or `None` when missing, unreadable or corrupted.
    pub fn get_local_session(&self) -> Option<LocalSession> {
        let json = match self.backend.get(LOCAL_SESSION_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                warn!("Unable to read local session, treating as logged out: {e}");
                return None;
            }
        };

        match LocalSession::from_json(&json) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("Stored local session is corrupted, treating as logged out: {e}");
                None
            }
        }
    }
}
