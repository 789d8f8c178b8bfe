//! Infaqku is the web UI for a mosque-donation crowdfunding platform.
//!
//! Campaigns, donations, expense disclosures, and authentication live in an
//! external backend API; this crate fetches that data per request, shapes
//! every list through one pure processor ([list]), and serves HTML pages
//! directly, with htmx swapping table fragments in place as the visitor
//! searches, sorts, and pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod api;
mod app_state;
mod campaign;
mod dashboard;
mod donation;
mod endpoints;
mod entry_table;
mod expense;
mod html;
mod internal_server_error;
pub mod list;
mod logging;
mod navigation;
mod not_found;
mod pagination;
mod routing;
mod session;
#[cfg(test)]
mod test_utils;
mod timezone;

pub use api::ApiClient;
pub use app_state::AppState;
pub use pagination::PaginationConfig;
pub use routing::build_router;

use crate::{
    internal_server_error::InternalServerError, not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The backend API could not be reached at all: connection refused, DNS
    /// failure, or a bad base URL.
    #[error("could not reach the donation API: {0}")]
    ApiUnreachable(String),

    /// The backend answered with a failure status the UI has no specific
    /// handling for. The body is kept for the server logs only.
    #[error("the donation API returned {0}: {1}")]
    ApiStatus(StatusCode, String),

    /// The backend rejected the session's bearer token, or a takmir route
    /// was reached without one.
    #[error("the session is missing or no longer valid")]
    Unauthorized,

    /// The backend rejected a log-in attempt.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The requested resource does not exist in the backend, e.g. a
    /// campaign ID from a stale link.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The backend answered 2xx but the body could not be decoded into the
    /// expected shape.
    #[error("could not decode the donation API response: {0}")]
    MalformedResponse(String),

    /// The configured timezone is not a known canonical timezone name.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// There is no session cookie in the cookie jar.
    #[error("no session cookie in the cookie jar")]
    CookieMissing,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::Unauthorized | Error::CookieMissing => {
                Redirect::to(endpoints::LOG_IN_VIEW).into_response()
            }
            Error::ApiUnreachable(details) => {
                tracing::error!("the donation API is unreachable: {details}");

                InternalServerError {
                    description: "Layanan donasi sedang tidak dapat dihubungi.",
                    fix: "Coba muat ulang halaman beberapa saat lagi.",
                }
                .into_response()
            }
            Error::InvalidTimezone(timezone) => {
                tracing::error!("invalid timezone {timezone} configured");

                InternalServerError {
                    description: "Konfigurasi zona waktu server tidak valid.",
                    fix: "Hubungi pengelola situs.",
                }
                .into_response()
            }
            // Any errors that are not handled above are not intended to be
            // shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");

                InternalServerError::default().into_response()
            }
        }
    }
}
