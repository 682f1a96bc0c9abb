use basket_core::{LocalSession, LocalUser};

/// Headline shown on the welcome screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Greeting {
    /// Active session: greet by session name
    Session { name: String },
    /// Registered on this device but no active session
    WelcomeBack,
    FirstTime,
}

impl Greeting {
    pub fn select(session: Option<&LocalSession>, user: Option<&LocalUser>) -> Self {
        match (session, user) {
            (Some(session), _) => Self::Session {
                name: session.name.clone(),
            },
            (None, Some(_)) => Self::WelcomeBack,
            (None, None) => Self::FirstTime,
        }
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Session { name } => write!(f, "Welcome back, {name}"),
            Self::WelcomeBack => write!(f, "Welcome back"),
            Self::FirstTime => write!(f, "Welcome"),
        }
    }
}
