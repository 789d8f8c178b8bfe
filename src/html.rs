//! The shared HTML shell, style constants, and formatting helpers.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, html};
use numfmt::{Formatter, Precision};
use time::{Date, Month};
use unicode_segmentation::UnicodeSegmentation;

// Link styles
pub const LINK_STYLE: &str = "text-emerald-700 hover:text-emerald-600 \
    dark:text-emerald-400 dark:hover:text-emerald-300 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-emerald-600 \
    dark:bg-emerald-700 disabled:bg-emerald-800 hover:enabled:bg-emerald-700 \
    hover:enabled:dark:bg-emerald-800 text-white rounded";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "flex flex-col items-center px-6 py-8 \
    mx-auto lg:py-0 max-w-md text-gray-900 dark:text-white";
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white bg-gray-50 dark:bg-gray-700 border \
    border-gray-300 dark:border-gray-600 dark:placeholder-gray-400 \
    focus:ring-emerald-600 focus:border-emerald-600";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";
pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";
pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Card style for campaign tiles and dashboard statistics
pub const CARD_STYLE: &str = "rounded-lg bg-white dark:bg-gray-800 shadow p-4";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

/// The max number of graphemes to display for a name before truncating and
/// appending an ellipsis.
pub const MAX_LABEL_GRAPHEMES: usize = 32;

/// Render `content` inside the shared page shell.
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Infaqku" }
                link href="/static/main.css" rel="stylesheet";

                script src="https://unpkg.com/htmx.org@2.0.8" {}
                script src="https://cdn.tailwindcss.com" {}

                style
                {
                    r#"
                    .htmx-indicator {
                        display: none;
                    }

                    .htmx-request .htmx-indicator {
                        display: inline;
                    }
                    "#
                }
            }

            body class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

/// The shared markup for the 404 and 500 pages.
pub fn error_view(title: &str, code: &str, description: &str, fix: &str) -> Markup {
    base(
        title,
        &html! {
            main class=(PAGE_CONTAINER_STYLE)
            {
                section class="text-center mt-16"
                {
                    h1 class="text-6xl font-bold text-emerald-700 dark:text-emerald-400" { (code) }
                    h2 class="text-2xl font-semibold mt-4" { (description) }
                    p class="mt-2 text-gray-600 dark:text-gray-400" { (fix) }

                    a href="/" class=(LINK_STYLE) { "Kembali ke beranda" }
                }
            }
        },
    )
}

/// Format a whole-Rupiah amount the way the UI displays money everywhere,
/// e.g. `Rp1.250.000`.
///
/// Fractional parts are rounded away: donations are recorded in whole
/// Rupiah, and derived figures like averages read better without cents.
pub fn format_currency(amount: f64) -> String {
    static FORMATTER: OnceLock<Formatter> = OnceLock::new();

    let formatter = FORMATTER.get_or_init(|| {
        Formatter::currency("Rp")
            .unwrap()
            .separator('.')
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    let amount = amount.round();

    if amount < 0.0 {
        // The backend never sends negative amounts, but a broken row should
        // render as a recognizable value rather than panic.
        format!("-{}", formatter.fmt_string(amount.abs()))
    } else if amount > 0.0 {
        formatter.fmt_string(amount)
    } else {
        // Zero is hardcoded as "0", so the prefix must be added by hand.
        "Rp0".to_owned()
    }
}

/// Format a date in Indonesian, e.g. `5 Oktober 2025`.
pub fn format_date(date: Date) -> String {
    let month = match date.month() {
        Month::January => "Januari",
        Month::February => "Februari",
        Month::March => "Maret",
        Month::April => "April",
        Month::May => "Mei",
        Month::June => "Juni",
        Month::July => "Juli",
        Month::August => "Agustus",
        Month::September => "September",
        Month::October => "Oktober",
        Month::November => "November",
        Month::December => "Desember",
    };

    format!("{} {month} {}", date.day(), date.year())
}

/// Shorten `text` to at most `max_graphemes` graphemes, appending an
/// ellipsis when something was cut off.
pub fn truncate_label(text: &str, max_graphemes: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let prefix: String = graphemes.by_ref().take(max_graphemes).collect();

    if graphemes.next().is_some() {
        format!("{prefix}…")
    } else {
        prefix
    }
}
