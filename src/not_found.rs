//! The page shown for routes that do not exist.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// Handler for unmatched routes.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// Build the 404 response outside a handler, e.g. from an error conversion.
pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Halaman Tidak Ditemukan",
            "404",
            "Halaman tidak ditemukan.",
            "Periksa kembali alamat yang dibuka, atau mulai dari beranda.",
        ),
    )
        .into_response()
}
