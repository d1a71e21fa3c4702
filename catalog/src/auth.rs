//! Auth gateway seam.
//!
//! The identity provider's protocol is handled entirely by its own client
//! library. The catalog only asks whether the session is authenticated, who
//! the user is, which bearer token to send, and how to end the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Narrow view of an identity-provider session.
pub trait AuthGateway {
    fn is_authenticated(&self) -> bool;

    /// Name to show in the UI for the signed-in user.
    fn display_name(&self) -> Option<String>;

    /// Bearer token for API requests.
    fn token(&self) -> Option<String>;

    /// End the session. Browser implementations redirect away.
    fn logout(&self);
}

/// `Authorization` header value for a token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// A session backed by a pre-issued access token.
///
/// Used by non-browser callers that obtain their token out of band.
#[derive(Clone, Debug, Default)]
pub struct StaticSession {
    token: Option<String>,
    name: Option<String>,
}

impl StaticSession {
    /// Blank tokens count as no token.
    #[must_use]
    pub fn new(token: Option<String>, name: Option<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        Self { token, name }
    }
}

impl AuthGateway for StaticSession {
    fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn display_name(&self) -> Option<String> {
        self.name.clone()
    }

    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn logout(&self) {}
}
