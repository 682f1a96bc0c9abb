use crate::WelcomeView;

/// Outcome of mounting the welcome screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mount {
    /// Session already active and this tab already passed the welcome
    /// screen; the host was sent to the main screen with `replace = true`.
    Redirected,
    Shown(WelcomeView),
}

impl Mount {
    pub fn view(&self) -> Option<&WelcomeView> {
        match self {
            Self::Redirected => None,
            Self::Shown(view) => Some(view),
        }
    }

    pub fn is_redirected(&self) -> bool {
        matches!(self, Self::Redirected)
    }
}
