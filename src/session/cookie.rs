//! The private cookie that carries the takmir's bearer token.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime};

use crate::Error;

use super::AccessToken;

pub(crate) const SESSION_COOKIE: &str = "takmir_session";

/// How long a takmir session lasts before the cookie expires.
pub const DEFAULT_SESSION_DURATION: Duration = Duration::hours(8);

/// Store `token` in the session cookie.
///
/// Returns the cookie jar with the cookie added; the caller must include the
/// jar in its response for the cookie to reach the browser.
pub(crate) fn set_session_cookie(
    jar: PrivateCookieJar,
    token: &AccessToken,
    duration: Duration,
) -> PrivateCookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, token.as_str().to_owned()))
            .expires(OffsetDateTime::now_utc() + duration)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true)
            .path("/"),
    )
}

/// Read the bearer token out of the session cookie.
///
/// # Errors
/// Returns [Error::CookieMissing] when there is no session cookie, which the
/// guard turns into a redirect to the log-in page.
pub(crate) fn get_token_from_cookies(jar: &PrivateCookieJar) -> Result<AccessToken, Error> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| AccessToken::new(cookie.value()))
        .ok_or(Error::CookieMissing)
}

/// Overwrite the session cookie with an expired one, which deletes it on the
/// client side.
pub(crate) fn invalidate_session_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, "deleted"))
            .expires(OffsetDateTime::UNIX_EPOCH)
            .max_age(Duration::ZERO)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true)
            .path("/"),
    )
}
