use crate::{Greeting, WelcomeAction};

use basket_core::{LocalSession, LocalUser};

/// What the host renders after a mount that did not redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeView {
    pub greeting: Greeting,
    pub session: Option<LocalSession>,
    pub user: Option<LocalUser>,
    pub logged_in: bool,
    /// "Swipe up to start" tip
    pub show_swipe_hint: bool,
    pub actions: Vec<WelcomeAction>,
}

impl WelcomeView {
    pub fn new(session: Option<LocalSession>, user: Option<LocalUser>) -> Self {
        let greeting = Greeting::select(session.as_ref(), user.as_ref());
        let logged_in = session.is_some();

        let actions = if logged_in {
            vec![WelcomeAction::Start]
        } else {
            vec![
                WelcomeAction::Login,
                WelcomeAction::Register,
                WelcomeAction::Demo,
            ]
        };

        Self {
            greeting,
            session,
            user,
            logged_in,
            show_swipe_hint: logged_in,
            actions,
        }
    }
}
