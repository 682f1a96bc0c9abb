use crate::{KeyValueStore, Result as StoreResult};

use basket_core::LocalUser;
use log::{info, warn};

pub const LOCAL_USER_KEY: &str = "local_user";

/// The user registered on this device.
#[derive(Debug, Clone)]
pub struct IdentityStore<S> {
    backend: S,
}

impl<S: KeyValueStore> IdentityStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Replaces any previously stored user.
    pub fn set_local_user(&self, user: &LocalUser) -> StoreResult<()> {
        let json = user.to_json()?;
        self.backend.set(LOCAL_USER_KEY, &json)?;

        info!("Saved local user: {}", user.name);
        Ok(())
    }

    /// The stored user, or `None` when missing, unreadable or corrupted.
    pub fn get_local_user(&self) -> Option<LocalUser> {
        let json = match self.backend.get(LOCAL_USER_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                warn!("Unable to read local user, treating as absent: {e}");
                return None;
            }
        };

        match LocalUser::from_json(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Stored local user is corrupted, treating as absent: {e}");
                None
            }
        }
    }
}
