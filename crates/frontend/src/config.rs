//! Frontend configuration.

/// Session storage key for the serialized auth state.
pub const AUTH_STATE_KEY: &str = "roster.auth";

/// Local storage keys used to prefill login after a signup. The login form
/// reads and removes them once.
pub const SIGNUP_EMAIL_KEY: &str = "signupEmail";
pub const SIGNUP_PASSWORD_KEY: &str = "signupPassword";

/// How long the search box waits after the last keystroke before querying.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// How long success notifications stay on screen.
pub const NOTIFICATION_MS: u32 = 3_000;

/// Base URL of the user API. Overridable at compile time, defaulting to the
/// origin the console is served from.
pub fn api_base_url() -> String {
    if let Some(url) = option_env!("ROSTER_API_URL") {
        return url.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:5000".to_string())
}
