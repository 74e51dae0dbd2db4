//! Click event model for asynchronous click tracking.

/// Raw request metadata captured on the redirect path.
///
/// Created in the redirect handler and passed to the background worker via a
/// bounded channel, decoupling the HTTP response from click persistence. The
/// worker derives the geo origin and applies the `"Direct"` / `"Unknown"`
/// sentinels before building a [`crate::domain::entities::NewClick`].
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub code: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
}

impl ClickEvent {
    /// Creates a new click event from request metadata.
    pub fn new(
        code: String,
        ip: Option<String>,
        user_agent: Option<&str>,
        referrer: Option<&str>,
    ) -> Self {
        Self {
            code,
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
            referrer: referrer.map(|s| s.to_string()),
        }
    }
}
