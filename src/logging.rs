//! Middleware for logging requests and responses.

use axum::{extract::Request, http::header::CONTENT_TYPE, middleware::Next, response::Response};

/// How much of a request or response body is logged at the `info` level.
/// Longer bodies are truncated there and logged in full at `debug`.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Form posts have their password field redacted before logging, so the
/// log-in form never leaks credentials into the logs. (The bearer token
/// never appears in request logs because it lives in an encrypted cookie.)
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body_text) = read_request(request).await;

    let is_form_post = parts.method == axum::http::Method::POST
        && parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

    if is_form_post {
        log_request(&parts, &redact_form_field(&body_text, "password"));
    } else {
        log_request(&parts, &body_text);
    }

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body_text) = read_response(response).await;
    log_response(&parts, &body_text);

    Response::from_parts(parts, body_text.into())
}

/// Replace the value of `field_name` in a URL-encoded form body with
/// asterisks.
fn redact_form_field(form_text: &str, field_name: &str) -> String {
    let marker = format!("{field_name}=");

    let Some(start) = form_text.find(&marker) else {
        return form_text.to_owned();
    };

    let value_start = start + marker.len();
    let value_end = form_text[value_start..]
        .find('&')
        .map(|offset| value_start + offset)
        .unwrap_or(form_text.len());

    format!(
        "{}********{}",
        &form_text[..value_start],
        &form_text[value_end..]
    )
}

async fn read_request(request: Request) -> (axum::http::request::Parts, String) {
    let (parts, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    (parts, String::from_utf8_lossy(&body_bytes).to_string())
}

async fn read_response(response: Response) -> (axum::http::response::Parts, String) {
    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    (parts, String::from_utf8_lossy(&body_bytes).to_string())
}

fn log_request(parts: &axum::http::request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received {} {}, body: {}...",
            parts.method,
            parts.uri,
            truncate_to_char_boundary(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received {} {}, body: {body:?}", parts.method, parts.uri);
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending {}, body: {}...",
            parts.status,
            truncate_to_char_boundary(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending {}, body: {body:?}", parts.status);
    }
}

/// The longest prefix of `text` that is at most `max` bytes and ends on a
/// char boundary.
fn truncate_to_char_boundary(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }

    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}
