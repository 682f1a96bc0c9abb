pub mod greeting;
pub mod mount;
pub mod navigator;
pub mod welcome_action;
pub mod welcome_controller;
pub mod welcome_view;

/// Route the welcome screen hands off to.
pub const MAIN_ROUTE: &str = "/home";
