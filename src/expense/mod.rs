//! The takmir view of one campaign's expense disclosures.

mod expenses_page;

pub use expenses_page::get_expenses_page;
