use crate::{
    Gesture, IdentityStore, KeyValueStore, Mount, Navigator, SessionStore, SwipeRecognizer,
    TabFlag, WelcomeView,
};

use basket_config::Config;
use basket_core::{FieldValidator, LocalSession, LocalUser, ValidationError};
use log::{debug, error, info};

/// Routing and form handling for the welcome screen.
///
/// One controller serves one tab. All calls are serialized UI events;
/// nothing here blocks or suspends.
pub struct WelcomeController<S, F, N> {
    identities: IdentityStore<S>,
    sessions: SessionStore<S>,
    tab: F,
    navigator: N,
    validator: FieldValidator,
    swipe_threshold_px: f64,
    swipe: SwipeRecognizer,
    view: Option<WelcomeView>,
}

impl<S, F, N> WelcomeController<S, F, N>
where
    S: KeyValueStore + Clone,
    F: TabFlag,
    N: Navigator,
{
    pub fn new(storage: S, tab: F, navigator: N, config: &Config) -> Self {
        let swipe_threshold_px = config.gesture.swipe_threshold_px;

        Self {
            identities: IdentityStore::new(storage.clone()),
            sessions: SessionStore::new(storage),
            tab,
            navigator,
            validator: FieldValidator::new(&config.validation),
            swipe_threshold_px,
            swipe: SwipeRecognizer::new(swipe_threshold_px, false),
            view: None,
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn tab(&self) -> &F {
        &self.tab
    }

    /// View from the last mount, `None` before mounting or after a redirect.
    pub fn view(&self) -> Option<&WelcomeView> {
        self.view.as_ref()
    }

    /// Runs once per mount of the welcome screen.
    ///
    /// Redirects only when this tab already passed the welcome screen and a
    /// session exists. Otherwise marks the tab and returns the view, so a new
    /// tab always shows the welcome screen once even with an active session.
    pub fn mount(&mut self) -> Mount {
        let session = self.sessions.get_local_session();

        if self.tab.has_opened_app_this_tab()
            && let Some(ref session) = session
        {
            info!(
                "Session for {} already entered in this tab, redirecting",
                session.name
            );
            self.view = None;
            self.swipe = SwipeRecognizer::new(self.swipe_threshold_px, false);
            self.navigator.navigate_to_main(true);
            return Mount::Redirected;
        }

        self.tab.mark_app_opened_this_tab();

        let user = self.identities.get_local_user();
        let view = WelcomeView::new(session, user);
        info!("Showing welcome screen: {}", view.greeting);

        self.swipe = SwipeRecognizer::new(self.swipe_threshold_px, view.logged_in);
        self.view = Some(view.clone());

        Mount::Shown(view)
    }

    /// Login dialog submit. Any non-empty pair is accepted; credentials are
    /// not checked against the registered user.
    pub fn submit_login(
        &mut self,
        identifier: &str,
        password: &str,
    ) -> Result<LocalSession, ValidationError> {
        let input = self.validator.validate_login(identifier, password)?;

        let session = self.start_session(&input.identifier);
        self.navigator.navigate_to_main(false);

        Ok(session)
    }

    /// Registration dialog submit. Stores the user and starts a session
    /// named after the user's name (not the username).
    pub fn submit_registration(
        &mut self,
        name: &str,
        phone: &str,
        username: &str,
        password: &str,
    ) -> Result<LocalSession, ValidationError> {
        let input = self
            .validator
            .validate_registration(name, phone, username, password)?;

        let user = LocalUser::new(input.name.as_str());
        if let Err(e) = self.identities.set_local_user(&user) {
            error!(
                "Failed to save local user {}: {e} ({})",
                user.name,
                e.recovery_hint()
            );
        }

        let session = self.start_session(&input.name);
        self.navigator.navigate_to_main(false);

        Ok(session)
    }

    /// "Start" (logged in) and "Demo mode" (anonymous) buttons.
    pub fn start(&mut self) {
        self.navigator.navigate_to_main(false);
    }

    pub fn touch_start(&mut self, y: Option<f64>) {
        self.swipe.on_touch_start(y);
    }

    /// Returns true when the touch completed a swipe-up and navigation happened.
    pub fn touch_end(&mut self, y: Option<f64>) -> bool {
        match self.swipe.on_touch_end(y) {
            Some(Gesture::SwipeUp) => {
                debug!("Swipe up on welcome screen, starting");
                self.start();
                true
            }
            None => false,
        }
    }

    // A failed write still lets the visitor in for this visit.
    fn start_session(&self, name: &str) -> LocalSession {
        match self.sessions.start_local_session(name) {
            Ok(session) => session,
            Err(e) => {
                error!(
                    "Failed to save local session for {name}: {e} ({})",
                    e.recovery_hint()
                );
                LocalSession::start(name)
            }
        }
    }
}
