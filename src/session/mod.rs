//! Takmir sessions: log in, log out, and the guard for takmir pages.
//!
//! Authentication itself happens in the backend API; this module only
//! forwards the credentials, stores the returned bearer token in a private
//! (encrypted) cookie, and attaches it to the request for the guarded
//! handlers. Enforcement stays with the backend: a token the backend no
//! longer accepts surfaces as [crate::Error::Unauthorized] and ends the
//! session.

mod cookie;
mod log_in;
mod log_out;
mod middleware;
mod token;

pub use cookie::DEFAULT_SESSION_DURATION;
pub use log_in::{get_log_in_page, post_log_in};
pub use log_out::get_log_out;
pub use middleware::{SessionState, takmir_guard};
pub use token::AccessToken;
