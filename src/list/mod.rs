//! In-memory list shaping for donation, expense, and campaign tables.
//!
//! Every table in the app fetches a complete list from the backend API and
//! shapes it locally: filter by a search term, sort by one axis at a time,
//! paginate, and summarize. Shaping is a pure function of the entry list and
//! a [ListControls] value decoded from the request's query parameters, so
//! re-rendering with the same inputs always produces the same page.

mod controls;
mod entry;
mod process;
mod statistics;

pub use controls::{
    DEFAULT_PAGE_SIZE, ListControls, ListQuery, SortAxis, SortDirection, SortSelection,
};
pub use entry::Entry;
pub use process::{ProcessedList, RankedEntry, process};
pub use statistics::{Statistics, StatisticsBasis};
