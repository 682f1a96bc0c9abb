use basket_session::{MAIN_ROUTE, Navigator};
use log::info;

/// Records the hand-off to the main screen so the command can report it.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    replace: Option<bool>,
}

impl TerminalNavigator {
    /// `Some(replace)` once navigation happened.
    pub fn navigation(&self) -> Option<bool> {
        self.replace
    }
}

impl Navigator for TerminalNavigator {
    fn navigate_to_main(&mut self, replace: bool) {
        info!("Navigating to {MAIN_ROUTE} (replace: {replace})");
        self.replace = Some(replace);
    }
}
