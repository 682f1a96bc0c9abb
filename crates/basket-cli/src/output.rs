use basket_core::{LocalSession, LocalUser, ValidationError};
use basket_session::{MAIN_ROUTE, Mount};
use serde_json::{Value, json};

/// Where the tab ended up after a command.
pub fn navigation(navigation: Option<bool>) -> Value {
    match navigation {
        Some(replace) => json!({ "route": MAIN_ROUTE, "replace": replace }),
        None => Value::Null,
    }
}

pub fn mount(mount: &Mount) -> Value {
    match mount {
        Mount::Redirected => json!({ "screen": "redirected" }),
        Mount::Shown(view) => json!({
            "screen": "welcome",
            "greeting": view.greeting.to_string(),
            "loggedIn": view.logged_in,
            "swipeHint": view.show_swipe_hint,
            "actions": view.actions.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
        }),
    }
}

pub fn session(session: &LocalSession, navigation_value: Value) -> Value {
    json!({
        "session": session,
        "navigation": navigation_value,
    })
}

pub fn validation_error(error: &ValidationError) -> Value {
    json!({
        "error": error.code(),
        "message": error.message(),
    })
}

pub fn status(user: Option<&LocalUser>, session: Option<&LocalSession>) -> Value {
    json!({
        "user": user,
        "session": session,
    })
}

pub fn render(value: &Value, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
