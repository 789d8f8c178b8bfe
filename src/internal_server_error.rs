//! The page shown when something goes wrong on our side.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// The internal server error page, with a description of what failed and a
/// hint for what the visitor can do about it.
pub struct InternalServerError<'a> {
    /// A short description of what went wrong.
    pub description: &'a str,
    /// What the visitor can do next.
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "Maaf, terjadi kesalahan pada server.",
            fix: "Coba lagi beberapa saat lagi.",
        }
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_view("Terjadi Kesalahan", "500", self.description, self.fix),
        )
            .into_response()
    }
}

/// Handler for the standalone error page route.
pub async fn get_internal_server_error_page() -> Response {
    InternalServerError::default().into_response()
}
