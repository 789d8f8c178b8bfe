//! The takmir dashboard.
//!
//! Shows summary cards over every donation the takmir's campaigns received,
//! plus a filterable table of the campaigns themselves. The cards always
//! cover the full donation set; the table filter never changes them.

mod cards;
mod handlers;
mod tables;

pub use handlers::get_dashboard_page;
