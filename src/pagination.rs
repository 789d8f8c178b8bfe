//! The numbered-page-link model shared by all table views.

use crate::list::DEFAULT_PAGE_SIZE;

/// The config that controls how pages of data are displayed.
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// Rows per page when the request does not specify one.
    pub default_page_size: usize,
    /// The most numbered links to show before collapsing to ellipses.
    pub max_links: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_links: 5,
        }
    }
}

/// One slot in a pagination bar.
#[derive(Debug, PartialEq, Eq)]
pub enum PageLink {
    /// A link to another page.
    Page(usize),
    /// The page currently displayed.
    Current(usize),
    /// A gap between non-adjacent page numbers.
    Ellipsis,
    /// A link to the previous page.
    Back(usize),
    /// A link to the next page.
    Next(usize),
}

/// Build the slots for a pagination bar.
///
/// At most `max_links` numbered links are shown around the current page; the
/// first and last page stay reachable through extra links separated by
/// ellipses. Out-of-range inputs are clamped, so callers can pass whatever
/// the processor produced without re-validating.
pub fn build_page_links(current_page: usize, total_pages: usize, max_links: usize) -> Vec<PageLink> {
    let total_pages = total_pages.max(1);
    let current_page = current_page.clamp(1, total_pages);
    let max_links = max_links.max(1);

    let half = max_links / 2;
    let (window_start, window_end) = if total_pages <= max_links {
        (1, total_pages)
    } else if current_page <= half {
        (1, max_links)
    } else if current_page + half >= total_pages {
        (total_pages - max_links + 1, total_pages)
    } else {
        (current_page - half, current_page + max_links - half - 1)
    };

    let mut links = Vec::new();

    if current_page > 1 {
        links.push(PageLink::Back(current_page - 1));
    }

    if window_start > 1 {
        links.push(PageLink::Page(1));
        if window_start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }

    for page in window_start..=window_end {
        if page == current_page {
            links.push(PageLink::Current(page));
        } else {
            links.push(PageLink::Page(page));
        }
    }

    if window_end < total_pages {
        if window_end + 1 < total_pages {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page(total_pages));
    }

    if current_page < total_pages {
        links.push(PageLink::Next(current_page + 1));
    }

    links
}
