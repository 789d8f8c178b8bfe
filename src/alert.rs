//! Alert fragments for success and error messages.

use maud::{Markup, html};

/// How an alert is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// A green confirmation.
    Success,
    /// A red failure notice.
    Error,
}

/// A dismissable message rendered above the page content or swapped in by
/// htmx.
pub struct Alert<'a> {
    kind: AlertKind,
    message: &'a str,
    details: &'a str,
}

impl<'a> Alert<'a> {
    /// A success alert.
    pub fn success(message: &'a str, details: &'a str) -> Self {
        Self {
            kind: AlertKind::Success,
            message,
            details,
        }
    }

    /// An error alert.
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self {
            kind: AlertKind::Error,
            message,
            details,
        }
    }

    /// Render the alert.
    pub fn into_html(self) -> Markup {
        let (container_style, label) = match self.kind {
            AlertKind::Success => (
                "p-4 mb-4 text-sm rounded-lg bg-emerald-50 text-emerald-800 \
                dark:bg-gray-800 dark:text-emerald-400",
                "Berhasil",
            ),
            AlertKind::Error => (
                "p-4 mb-4 text-sm rounded-lg bg-red-50 text-red-800 \
                dark:bg-gray-800 dark:text-red-400",
                "Gagal",
            ),
        };

        html! {
            div class=(container_style) role="alert" data-alert=(label)
            {
                span class="font-medium" { (self.message) }
                @if !self.details.is_empty() {
                    " " (self.details)
                }
            }
        }
    }
}
