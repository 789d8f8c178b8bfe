//! Summary figures displayed above each table.

use super::Entry;

/// Which set of entries feeds the summary figures.
///
/// Detail tables summarize what the visitor is looking at, so they use the
/// filtered set. The dashboard summarizes everything a takmir manages
/// regardless of the active table filter, so it uses the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsBasis {
    /// Compute statistics over the entries left after search filtering.
    Filtered,
    /// Compute statistics over the complete, unfiltered list.
    Full,
}

/// Total, average, highest, and count over a set of entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Sum of all amounts.
    pub total: f64,
    /// Mean amount, rounded to two decimal places. Zero for an empty set.
    pub average: f64,
    /// The largest single amount. Zero for an empty set.
    pub highest: f64,
    /// How many entries were summarized.
    pub count: usize,
}

impl Statistics {
    /// Compute statistics over `entries`.
    ///
    /// Entries whose amounts the API adapter coerced to zero still count
    /// toward `count`; they contribute nothing to the other figures.
    pub fn over<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut total = 0.0;
        let mut highest = 0.0_f64;
        let mut count = 0;

        for entry in entries {
            total += entry.amount;
            highest = highest.max(entry.amount);
            count += 1;
        }

        let average = if count == 0 {
            0.0
        } else {
            round_to_cents(total / count as f64)
        };

        Self {
            total,
            average,
            highest,
            count,
        }
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use crate::list::Entry;

    use super::Statistics;

    #[test]
    fn statistics_over_empty_set_are_all_zero() {
        let got = Statistics::over(&[]);

        assert_eq!(got.total, 0.0);
        assert_eq!(got.average, 0.0);
        assert_eq!(got.highest, 0.0);
        assert_eq!(got.count, 0);
    }

    #[test]
    fn statistics_match_known_donation_set() {
        let entries = [
            Entry::new("Ahmad", 2_000_000.0),
            Entry::new("Siti", 500_000.0),
            Entry::new("Budi", 750_000.0),
        ];

        let got = Statistics::over(&entries);

        assert_eq!(got.total, 3_250_000.0);
        assert_eq!(got.average, 1_083_333.33);
        assert_eq!(got.highest, 2_000_000.0);
        assert_eq!(got.count, 3);
    }

    #[test]
    fn zero_coerced_entries_count_but_add_nothing() {
        let entries = [
            Entry::new("Hamba Allah", 0.0),
            Entry::new("Ahmad", 1_000_000.0),
        ];

        let got = Statistics::over(&entries);

        assert_eq!(got.count, 2);
        assert_eq!(got.total, 1_000_000.0);
        assert_eq!(got.average, 500_000.0);
        assert_eq!(got.highest, 1_000_000.0);
    }
}
