//! The takmir log-in page and endpoint.

use axum::{
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{Form, PrivateCookieJar, cookie::Key};
use maud::{Markup, html};
use serde::Deserialize;
use time::Duration;

use crate::{
    AppState, Error,
    alert::Alert,
    api::ApiClient,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
    },
    navigation::NavBar,
};

use super::cookie::set_session_cookie;

/// The state needed for logging in.
#[derive(Clone)]
pub struct LogInState {
    /// The client for the backend that verifies credentials.
    pub api: ApiClient,
    /// The key for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// How long the session cookie stays valid.
    pub cookie_duration: Duration,
}

impl FromRef<AppState> for LogInState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            cookie_key: state.cookie_key.clone(),
            cookie_duration: state.cookie_duration,
        }
    }
}

impl FromRef<LogInState> for Key {
    fn from_ref(state: &LogInState) -> Self {
        state.cookie_key.clone()
    }
}

/// The credentials the log-in form posts.
#[derive(Debug, Deserialize)]
pub struct LogInForm {
    /// The takmir account's email address.
    pub email: String,
    /// The plaintext password, forwarded to the backend over the form post.
    pub password: String,
}

/// Query parameters for the log-in page.
#[derive(Debug, Default, Deserialize)]
pub struct LogInPageQuery {
    /// Set by the log-out redirect so the page can confirm the session
    /// ended.
    #[serde(default)]
    pub keluar: bool,
}

/// Render the log-in page.
pub async fn get_log_in_page(Query(query): Query<LogInPageQuery>) -> Markup {
    let alert = query
        .keluar
        .then(|| Alert::success("Anda telah keluar.", ""));

    log_in_view("", alert)
}

/// Forward the credentials to the backend and start a session.
///
/// On success the bearer token lands in the session cookie and the takmir is
/// sent to the dashboard. Rejected credentials re-render the form with an
/// alert instead of redirecting, so the email stays filled in.
pub async fn post_log_in(
    State(state): State<LogInState>,
    jar: PrivateCookieJar,
    Form(form): Form<LogInForm>,
) -> Response {
    match state.api.log_in(&form.email, &form.password).await {
        Ok(token) => {
            let jar = set_session_cookie(jar, &token, state.cookie_duration);

            (jar, Redirect::to(endpoints::DASHBOARD_VIEW)).into_response()
        }
        Err(Error::InvalidCredentials) => (
            StatusCode::UNAUTHORIZED,
            log_in_view(
                &form.email,
                Some(Alert::error(
                    "Email atau kata sandi salah.",
                    "Periksa kembali lalu coba lagi.",
                )),
            ),
        )
            .into_response(),
        Err(error) => {
            tracing::error!("could not log in against the backend: {error}");

            error.into_response()
        }
    }
}

fn log_in_view(email: &str, alert: Option<Alert>) -> Markup {
    let nav_bar = NavBar::public(endpoints::LOG_IN_VIEW).into_html();

    base(
        "Masuk Takmir",
        &html! {
            (nav_bar)

            main class=(FORM_CONTAINER_STYLE)
            {
                section class="w-full mt-12"
                {
                    h1 class="text-xl font-bold mb-4" { "Masuk Takmir" }

                    @if let Some(alert) = alert {
                        (alert.into_html())
                    }

                    form method="post" action=(endpoints::LOG_IN_API) class="space-y-4"
                    {
                        div
                        {
                            label for="email" class=(FORM_LABEL_STYLE) { "Email" }
                            input
                                type="email"
                                name="email"
                                id="email"
                                value=(email)
                                required
                                class=(FORM_TEXT_INPUT_STYLE);
                        }

                        div
                        {
                            label for="password" class=(FORM_LABEL_STYLE) { "Kata Sandi" }
                            input
                                type="password"
                                name="password"
                                id="password"
                                required
                                class=(FORM_TEXT_INPUT_STYLE);
                        }

                        button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Masuk" }
                    }
                }
            }
        },
    )
}
