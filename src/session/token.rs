//! The bearer token the backend issues at log in.

use std::fmt;

/// An opaque bearer token for the backend API.
///
/// The token is whatever string the backend's log-in endpoint returned; the
/// UI never inspects it, it only stores it in the session cookie and echoes
/// it back on takmir API calls. The `Debug` impl is redacted so request
/// logging cannot leak credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a token string received from the backend.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for the `Authorization` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(********)")
    }
}
