/// Buttons offered on the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WelcomeAction {
    Start,
    Login,
    Register,
    /// Enter without an account
    Demo,
}

impl WelcomeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Login => "login",
            Self::Register => "register",
            Self::Demo => "demo",
        }
    }
}

impl std::fmt::Display for WelcomeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
