//! The immutable per-request value that drives table shaping.
//!
//! Controls are owned by the surrounding view: they are decoded from the
//! request's query parameters, normalized once, and passed by reference into
//! [super::process]. The processor never mutates them. Links and forms that
//! change a control go through the `with_*` builders so the page-reset rules
//! are applied in exactly one place.

use serde::Deserialize;

/// The number of rows shown per page when a view does not say otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// The axis a table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAxis {
    /// Order by the monetary amount.
    Amount,
    /// Order by the entry name, using the collation key.
    Name,
}

impl SortAxis {
    pub(crate) fn as_query_value(self) -> &'static str {
        match self {
            SortAxis::Amount => "amount",
            SortAxis::Name => "name",
        }
    }
}

/// The direction an active sort axis orders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Sort in order of increasing value.
    Ascending,
    /// Sort in order of decreasing value.
    Descending,
}

impl SortDirection {
    pub(crate) fn as_query_value(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// The sort state of a table: at most one axis is active at a time.
///
/// Toggling an axis cycles it inactive → ascending → descending → inactive.
/// Toggling a different axis abandons the current one and starts the new
/// axis at ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortSelection {
    /// Entries keep the order the backend returned them in.
    #[default]
    Inactive,
    /// Entries are ordered by `axis` in `direction`.
    Active {
        /// The active sort axis.
        axis: SortAxis,
        /// The direction to order the active axis in.
        direction: SortDirection,
    },
}

impl SortSelection {
    /// Advance the cycle for `axis`.
    #[must_use]
    pub fn toggle(self, axis: SortAxis) -> Self {
        match self {
            SortSelection::Active {
                axis: active_axis,
                direction,
            } if active_axis == axis => match direction {
                SortDirection::Ascending => SortSelection::Active {
                    axis,
                    direction: SortDirection::Descending,
                },
                SortDirection::Descending => SortSelection::Inactive,
            },
            _ => SortSelection::Active {
                axis,
                direction: SortDirection::Ascending,
            },
        }
    }

    /// The direction `axis` is currently ordered in, if it is the active axis.
    pub fn direction_of(self, axis: SortAxis) -> Option<SortDirection> {
        match self {
            SortSelection::Active {
                axis: active_axis,
                direction,
            } if active_axis == axis => Some(direction),
            _ => None,
        }
    }
}

/// Decoded, clamped controls for one table render.
#[derive(Debug, Clone, PartialEq)]
pub struct ListControls {
    /// Case-insensitive substring to filter entry names by.
    pub search_term: String,
    /// The active sort axis and direction, if any.
    pub sort: SortSelection,
    /// Rows per page, at least 1.
    pub page_size: usize,
    /// One-based page to display. The upper bound depends on the filtered
    /// set, so it is clamped inside [super::process] on every recompute.
    pub current_page: usize,
}

impl Default for ListControls {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort: SortSelection::default(),
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}

impl ListControls {
    /// Replace the search term and return to the first page.
    #[must_use]
    pub fn with_search_term(self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            current_page: 1,
            ..self
        }
    }

    /// Replace the page size (clamped to at least 1) and return to the first
    /// page.
    #[must_use]
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            ..self
        }
    }

    /// Jump to `page`, clamped to at least 1.
    #[must_use]
    pub fn with_page(self, page: usize) -> Self {
        Self {
            current_page: page.max(1),
            ..self
        }
    }

    /// Advance the sort cycle for `axis` and return to the first page.
    #[must_use]
    pub fn with_sort_toggled(self, axis: SortAxis) -> Self {
        Self {
            sort: self.sort.toggle(axis),
            current_page: 1,
            ..self
        }
    }

    /// Encode these controls as the query string the table links use.
    ///
    /// Defaulted values are omitted so plain page URLs stay short.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if !self.search_term.is_empty() {
            pairs.push(("q", self.search_term.clone()));
        }

        if let SortSelection::Active { axis, direction } = self.sort {
            pairs.push(("sort", axis.as_query_value().to_owned()));
            pairs.push(("dir", direction.as_query_value().to_owned()));
        }

        if self.current_page != 1 {
            pairs.push(("page", self.current_page.to_string()));
        }

        if self.page_size != DEFAULT_PAGE_SIZE {
            pairs.push(("page_size", self.page_size.to_string()));
        }

        serde_urlencoded::to_string(&pairs)
            .inspect_err(|error| tracing::error!("could not encode table controls: {error}"))
            .unwrap_or_default()
    }

    /// Append these controls to `route` as a query string.
    pub fn to_url(&self, route: &str) -> String {
        let query = self.to_query_string();

        if query.is_empty() {
            route.to_owned()
        } else {
            format!("{route}?{query}")
        }
    }
}

/// Raw query parameters for a table view.
///
/// Every field is optional and may hold garbage; [ListQuery::normalize]
/// applies defaults and clamps instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// The search term, `q` in the URL.
    pub q: Option<String>,
    /// The sort axis: "amount" or "name".
    pub sort: Option<String>,
    /// The sort direction: "asc" or "desc".
    pub dir: Option<String>,
    /// One-based page number.
    pub page: Option<usize>,
    /// Rows per page.
    pub page_size: Option<usize>,
}

impl ListQuery {
    /// Turn raw query parameters into usable controls.
    ///
    /// Unknown sort axes or directions deactivate sorting, zero page numbers
    /// and page sizes clamp to 1, and a missing page size falls back to
    /// `default_page_size`.
    pub fn normalize(self, default_page_size: usize) -> ListControls {
        let sort = match self.sort.as_deref() {
            Some("amount") => Some(SortAxis::Amount),
            Some("name") => Some(SortAxis::Name),
            _ => None,
        };
        let direction = match self.dir.as_deref() {
            Some("desc") => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        let sort = match sort {
            Some(axis) => SortSelection::Active { axis, direction },
            None => SortSelection::Inactive,
        };

        ListControls {
            search_term: self.q.unwrap_or_default(),
            sort,
            page_size: self.page_size.unwrap_or(default_page_size).max(1),
            current_page: self.page.unwrap_or(1).max(1),
        }
    }
}
