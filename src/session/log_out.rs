//! Ending a takmir session.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::PrivateCookieJar;

use crate::endpoints;

use super::cookie::invalidate_session_cookie;

/// Expire the session cookie and return to the log-in page.
///
/// The bearer token itself is not revoked here; only the backend can do
/// that, and forgetting the token is all the UI needs.
pub async fn get_log_out(jar: PrivateCookieJar) -> Response {
    let jar = invalidate_session_cookie(jar);
    let redirect_url = format!("{}?keluar=true", endpoints::LOG_IN_VIEW);

    (jar, Redirect::to(&redirect_url)).into_response()
}
