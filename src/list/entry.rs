//! The unit every table operates on: a labeled monetary amount.

use serde::{Deserialize, Serialize};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// One donation or expense record reduced to a display name and an amount in
/// whole Rupiah.
///
/// The API adapter guarantees `amount` is finite and non-negative; values the
/// backend sent in a shape that could not be read as a number arrive here as
/// zero (see [crate::api]). Names may be empty, in which case the entry
/// trivially matches every search and sorts before non-empty names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Label of the counterparty: a donor name or an expense purpose.
    pub name: String,
    /// Amount in whole Rupiah.
    pub amount: f64,
}

impl Entry {
    /// Create an entry from a display name and an amount.
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// Whether the entry name contains `term`, ignoring case.
    ///
    /// `term` must already be lowercased; [super::process] lowercases the
    /// search term once per call rather than once per entry.
    pub(crate) fn matches(&self, lowercase_term: &str) -> bool {
        self.name.to_lowercase().contains(lowercase_term)
    }

    /// The key used to order entries by name.
    ///
    /// Case and diacritics are folded out (NFKD, combining marks stripped,
    /// then lowercased) so that "Ésa" sorts with "esa" instead of after "z".
    pub(crate) fn collation_key(&self) -> String {
        self.name
            .nfkd()
            .filter(|character| !is_combining_mark(*character))
            .flat_map(char::to_lowercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Entry;

    #[test]
    fn matches_is_case_insensitive() {
        let entry = Entry::new("Siti Rahma", 500_000.0);

        assert!(entry.matches("si"));
        assert!(entry.matches("rahma"));
        assert!(!entry.matches("budi"));
    }

    #[test]
    fn empty_name_matches_empty_term_only_trivially() {
        let entry = Entry::new("", 1_000.0);

        assert!(entry.matches(""));
        assert!(!entry.matches("a"));
    }

    #[test]
    fn collation_key_folds_case_and_diacritics() {
        assert_eq!(Entry::new("Ésa", 0.0).collation_key(), "esa");
        assert_eq!(Entry::new("AHMAD", 0.0).collation_key(), "ahmad");
        assert_eq!(
            Entry::new("Ésa", 0.0).collation_key(),
            Entry::new("esa", 0.0).collation_key()
        );
    }
}
