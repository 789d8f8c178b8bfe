//! Helpers shared by the page and client tests.

pub(crate) mod backend;

use axum::response::Response;
use scraper::{ElementRef, Html, Selector};

/// Collect a handler's response body and parse it as a full HTML document.
pub(crate) async fn parse_html_document(response: Response) -> Html {
    Html::parse_document(&response_text(response).await)
}

/// Collect a handler's response body and parse it as an HTML fragment, the
/// way htmx receives partial updates.
pub(crate) async fn parse_html_fragment(response: Response) -> Html {
    Html::parse_fragment(&response_text(response).await)
}

async fn response_text(response: Response) -> String {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// Select the single element matching `selector`, panicking with a useful
/// message when it is missing.
#[track_caller]
pub(crate) fn must_select_one<'a>(html: &'a Html, selector: &str) -> ElementRef<'a> {
    let parsed = Selector::parse(selector).expect("Invalid selector");

    html.select(&parsed)
        .next()
        .unwrap_or_else(|| panic!("No element matches {selector}"))
}

/// The text content of every element matching `selector`, trimmed.
pub(crate) fn select_texts(html: &Html, selector: &str) -> Vec<String> {
    let parsed = Selector::parse(selector).expect("Invalid selector");

    html.select(&parsed)
        .map(|element| element.text().collect::<String>().trim().to_owned())
        .collect()
}
