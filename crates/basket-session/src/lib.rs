//! Device-scoped session state for the welcome screen.
//!
//! Durable records (the registered user and the active session) live behind
//! a [`KeyValueStore`]; the once-per-tab "already entered" marker lives behind
//! a [`TabFlag`]. [`WelcomeController`] ties both to routing and to the
//! swipe-up gesture.

pub mod error;
pub mod gesture;
pub mod identity_store;
pub mod session_store;
pub mod storage;
pub mod tab_flag;
pub mod welcome;

#[cfg(test)]
mod tests;

pub use error::{Result, StoreError};
pub use gesture::{Gesture, SwipeRecognizer};
pub use identity_store::{IdentityStore, LOCAL_USER_KEY};
pub use session_store::{LOCAL_SESSION_KEY, SessionStore};
pub use storage::{
    file_store::FileStore, key_value_store::KeyValueStore, memory_store::MemoryStore,
};
pub use tab_flag::{InMemoryTabFlag, TabFlag};
pub use welcome::{
    MAIN_ROUTE, greeting::Greeting, mount::Mount, navigator::Navigator,
    welcome_action::WelcomeAction, welcome_controller::WelcomeController,
    welcome_view::WelcomeView,
};
