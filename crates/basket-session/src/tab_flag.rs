use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

/// Per-tab marker: set once the welcome screen has been shown in this tab.
///
/// Lives exactly as long as the tab. Never persisted, never shared between tabs.
pub trait TabFlag {
    fn has_opened_app_this_tab(&self) -> bool;

    /// Idempotent.
    fn mark_app_opened_this_tab(&self);
}

/// Flag owned by the process instance serving one tab.
///
/// A tab handles one UI event at a time, so the flag is not `Sync`.
#[derive(Debug, Default)]
pub struct InMemoryTabFlag {
    opened: Cell<bool>,
}

impl InMemoryTabFlag {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TabFlag for InMemoryTabFlag {
    fn has_opened_app_this_tab(&self) -> bool {
        self.opened.get()
    }

    fn mark_app_opened_this_tab(&self) {
        self.opened.set(true);
    }
}

impl<T: TabFlag + ?Sized> TabFlag for &T {
    fn has_opened_app_this_tab(&self) -> bool {
        (**self).has_opened_app_this_tab()
    }

    fn mark_app_opened_this_tab(&self) {
        (**self).mark_app_opened_this_tab()
    }
}

impl<T: TabFlag + ?Sized> TabFlag for Rc<T> {
    fn has_opened_app_this_tab(&self) -> bool {
        (**self).has_opened_app_this_tab()
    }

    fn mark_app_opened_this_tab(&self) {
        (**self).mark_app_opened_this_tab()
    }
}

impl<T: TabFlag + ?Sized> TabFlag for Arc<T> {
    fn has_opened_app_this_tab(&self) -> bool {
        (**self).has_opened_app_this_tab()
    }

    fn mark_app_opened_this_tab(&self) {
        (**self).mark_app_opened_this_tab()
    }
}
