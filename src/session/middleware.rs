//! The guard that keeps takmir pages behind a session cookie.

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;

use crate::{AppState, endpoints};

use super::cookie::get_token_from_cookies;

/// The state needed to decrypt the session cookie.
#[derive(Clone)]
pub struct SessionState {
    /// The key for signing and encrypting private cookies.
    pub cookie_key: Key,
}

impl FromRef<AppState> for SessionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<SessionState> for Key {
    fn from_ref(state: &SessionState) -> Self {
        state.cookie_key.clone()
    }
}

/// Middleware that requires a session cookie on every takmir route.
///
/// When the cookie is present its token is placed into the request
/// extensions, so guarded handlers can receive it with
/// `Extension(token): Extension<AccessToken>`. Without a cookie the request
/// is answered with a redirect to the log-in page: a regular 303 for full
/// page loads, an `HX-Redirect` header for htmx requests so the browser
/// navigates instead of swapping the redirect target into the page.
pub async fn takmir_guard(
    State(state): State<SessionState>,
    request: Request,
    next: Next,
) -> Response {
    let is_htmx = request.headers().contains_key("HX-Request");

    let (mut parts, body) = request.into_parts();
    let jar = match PrivateCookieJar::from_request_parts(&mut parts, &state).await {
        Ok(jar) => jar,
        Err(error) => {
            tracing::error!("Error getting cookie jar: {error:?}. Redirecting to log in page.");
            return redirect_to_log_in(is_htmx);
        }
    };

    match get_token_from_cookies(&jar) {
        Ok(token) => {
            let mut request = Request::from_parts(parts, body);
            request.extensions_mut().insert(token);

            next.run(request).await
        }
        Err(_) => redirect_to_log_in(is_htmx),
    }
}

fn redirect_to_log_in(is_htmx: bool) -> Response {
    if is_htmx {
        (
            HxRedirect(endpoints::LOG_IN_VIEW.to_owned()),
            StatusCode::OK,
        )
            .into_response()
    } else {
        Redirect::to(endpoints::LOG_IN_VIEW).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Extension, Router,
        body::Body,
        http::{Request, StatusCode, header::COOKIE},
        middleware,
        routing::get,
    };
    use axum_extra::extract::{PrivateCookieJar, cookie::Key};
    use tower::ServiceExt;

    use crate::{
        endpoints,
        session::{AccessToken, cookie::set_session_cookie},
    };

    use super::{SessionState, takmir_guard};

    fn guarded_router(state: SessionState) -> Router {
        Router::new()
            .route(
                "/guarded",
                get(|Extension(token): Extension<AccessToken>| async move {
                    token.as_str().to_owned()
                }),
            )
            .layer(middleware::from_fn_with_state(state, takmir_guard))
    }

    /// Build the `Cookie` header a browser would send after receiving the
    /// session cookie. The private jar encrypts values, so the header must
    /// be read back out of a `Set-Cookie` response header rather than built
    /// from the plaintext token.
    fn session_cookie_header(key: &Key, token: &str) -> String {
        use axum::response::IntoResponse;

        let jar = set_session_cookie(
            PrivateCookieJar::new(key.clone()),
            &AccessToken::new(token),
            time::Duration::hours(1),
        );

        let response = (jar, "").into_response();
        let set_cookie = response
            .headers()
            .get(axum::http::header::SET_COOKIE)
            .expect("No Set-Cookie header")
            .to_str()
            .expect("Set-Cookie is not valid UTF-8");

        set_cookie
            .split(';')
            .next()
            .expect("Set-Cookie header is empty")
            .to_owned()
    }

    #[tokio::test]
    async fn missing_cookie_redirects_to_the_log_in_page() {
        let state = SessionState {
            cookie_key: Key::generate(),
        };

        let response = guarded_router(state)
            .oneshot(Request::get("/guarded").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get("location").unwrap(),
            endpoints::LOG_IN_VIEW
        );
    }

    #[tokio::test]
    async fn htmx_requests_get_an_hx_redirect_instead() {
        let state = SessionState {
            cookie_key: Key::generate(),
        };

        let response = guarded_router(state)
            .oneshot(
                Request::get("/guarded")
                    .header("HX-Request", "true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("hx-redirect").unwrap(),
            endpoints::LOG_IN_VIEW
        );
    }

    #[tokio::test]
    async fn valid_cookie_passes_the_token_to_the_handler() {
        let key = Key::generate();
        let state = SessionState {
            cookie_key: key.clone(),
        };

        let response = guarded_router(state)
            .oneshot(
                Request::get("/guarded")
                    .header(COOKIE, session_cookie_header(&key, "tok-abc"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"tok-abc");
    }
}
