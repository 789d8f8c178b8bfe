//! The pure filter → sort → paginate pipeline behind every table.

use std::cmp::Ordering;

use super::{
    Entry, ListControls, SortAxis, SortDirection, SortSelection, Statistics, StatisticsBasis,
};

/// An entry paired with its position in the original collection.
///
/// Detail tables show the position as the display rank, and it is what keeps
/// ties in a reproducible order across re-renders.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    /// Zero-based index into the collection the processor was given.
    pub original_index: usize,
    /// The entry itself.
    pub entry: Entry,
}

/// One display-ready page plus pagination metadata and summary figures.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedList {
    /// The entries to display, at most `page_size` of them.
    pub page_items: Vec<RankedEntry>,
    /// How many entries survive the search filter.
    pub total_filtered_count: usize,
    /// The number of pages. An empty result is one empty page, never zero.
    pub total_pages: usize,
    /// The page actually rendered, clamped to `1..=total_pages`.
    pub current_page: usize,
    /// Summary figures over the basis set.
    pub statistics: Statistics,
}

/// Shape `entries` for display: filter, then sort, then paginate.
///
/// The input list is read-only; a fresh [ProcessedList] is built on every
/// call so identical inputs always produce identical output. `basis` selects
/// whether [ProcessedList::statistics] describes the filtered set or the
/// full one.
pub fn process(
    entries: &[Entry],
    controls: &ListControls,
    basis: StatisticsBasis,
) -> ProcessedList {
    let lowercase_term = controls.search_term.to_lowercase();

    let mut filtered: Vec<RankedEntry> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.matches(&lowercase_term))
        .map(|(original_index, entry)| RankedEntry {
            original_index,
            entry: entry.clone(),
        })
        .collect();

    let statistics = match basis {
        StatisticsBasis::Full => Statistics::over(entries),
        StatisticsBasis::Filtered => Statistics::over(filtered.iter().map(|ranked| &ranked.entry)),
    };

    if let SortSelection::Active { axis, direction } = controls.sort {
        // Vec::sort_by is stable, and the comparator flips only the key
        // comparison, so equal keys keep their input order in both
        // directions.
        filtered.sort_by(|a, b| {
            let ordering = compare_on_axis(&a.entry, &b.entry, axis);

            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    let total_filtered_count = filtered.len();
    let page_size = controls.page_size.max(1);
    let total_pages = total_filtered_count.div_ceil(page_size).max(1);
    let current_page = controls.current_page.clamp(1, total_pages);
    let first_row = (current_page - 1) * page_size;

    let page_items = filtered
        .into_iter()
        .skip(first_row)
        .take(page_size)
        .collect();

    ProcessedList {
        page_items,
        total_filtered_count,
        total_pages,
        current_page,
        statistics,
    }
}

fn compare_on_axis(a: &Entry, b: &Entry, axis: SortAxis) -> Ordering {
    match axis {
        // Amounts are guaranteed finite by the API adapter, so total_cmp
        // matches plain numeric order here.
        SortAxis::Amount => a.amount.total_cmp(&b.amount),
        SortAxis::Name => a.collation_key().cmp(&b.collation_key()),
    }
}

#[cfg(test)]
mod tests {
    use crate::list::{
        Entry, ListControls, SortAxis, SortDirection, SortSelection, StatisticsBasis,
    };

    use super::process;

    fn donation_set() -> Vec<Entry> {
        vec![
            Entry::new("Ahmad", 2_000_000.0),
            Entry::new("Siti", 500_000.0),
            Entry::new("Budi", 750_000.0),
        ]
    }

    fn names(processed: &super::ProcessedList) -> Vec<&str> {
        processed
            .page_items
            .iter()
            .map(|ranked| ranked.entry.name.as_str())
            .collect()
    }

    #[test]
    fn amount_descending_paginates_in_order() {
        let entries = donation_set();
        let controls = ListControls {
            sort: SortSelection::Active {
                axis: SortAxis::Amount,
                direction: SortDirection::Descending,
            },
            page_size: 2,
            ..Default::default()
        };

        let page_one = process(&entries, &controls, StatisticsBasis::Filtered);
        assert_eq!(names(&page_one), ["Ahmad", "Budi"]);
        assert_eq!(page_one.total_pages, 2);
        assert_eq!(page_one.total_filtered_count, 3);

        let page_two = process(&entries, &controls.with_page(2), StatisticsBasis::Filtered);
        assert_eq!(names(&page_two), ["Siti"]);

        let statistics = page_one.statistics;
        assert_eq!(statistics.total, 3_250_000.0);
        assert_eq!(statistics.average, 1_083_333.33);
        assert_eq!(statistics.highest, 2_000_000.0);
        assert_eq!(statistics.count, 3);
    }

    #[test]
    fn search_is_a_case_insensitive_substring_match() {
        let entries = donation_set();
        let controls = ListControls::default().with_search_term("si");

        let got = process(&entries, &controls, StatisticsBasis::Filtered);

        assert_eq!(names(&got), ["Siti"]);
        assert_eq!(got.total_filtered_count, 1);
    }

    #[test]
    fn out_of_range_page_clamps_to_the_last_valid_page() {
        let entries = donation_set();
        let controls = ListControls::default().with_page(99);

        let got = process(&entries, &controls, StatisticsBasis::Filtered);

        assert_eq!(got.current_page, 1, "3 entries fit on a single page of 5");
        assert_eq!(got.page_items.len(), 3);
    }

    #[test]
    fn no_match_is_one_empty_page_not_zero_pages() {
        let entries = donation_set();
        let controls = ListControls::default().with_search_term("zzz");

        let got = process(&entries, &controls, StatisticsBasis::Filtered);

        assert_eq!(got.total_filtered_count, 0);
        assert_eq!(got.total_pages, 1);
        assert_eq!(got.current_page, 1);
        assert!(got.page_items.is_empty());
        assert_eq!(got.statistics.count, 0);
    }

    #[test]
    fn empty_input_is_well_defined() {
        let got = process(&[], &ListControls::default(), StatisticsBasis::Full);

        assert!(got.page_items.is_empty());
        assert_eq!(got.total_pages, 1);
        assert_eq!(got.statistics.total, 0.0);
    }

    #[test]
    fn empty_search_term_keeps_every_entry() {
        let entries = donation_set();

        let got = process(&entries, &ListControls::default(), StatisticsBasis::Filtered);

        assert_eq!(got.total_filtered_count, entries.len());
    }

    #[test]
    fn pages_partition_the_filtered_set() {
        let entries: Vec<Entry> = (0..23)
            .map(|i| Entry::new(format!("Donatur {i}"), (i * 10_000) as f64))
            .collect();
        let want_total: f64 = entries.iter().map(|entry| entry.amount).sum();
        let controls = ListControls::default().with_page_size(4);

        let first = process(&entries, &controls, StatisticsBasis::Filtered);
        let mut seen = Vec::new();
        let mut got_total = 0.0;
        for page in 1..=first.total_pages {
            let processed = process(&entries, &controls.clone().with_page(page), StatisticsBasis::Filtered);
            assert!(
                processed.page_items.len() <= controls.page_size,
                "page {page} has {} items, want at most {}",
                processed.page_items.len(),
                controls.page_size
            );
            for ranked in processed.page_items {
                got_total += ranked.entry.amount;
                seen.push(ranked.original_index);
            }
        }

        assert_eq!(got_total, want_total, "amounts were lost or duplicated");
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), entries.len(), "indices were lost or duplicated");
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let entries = donation_set();
        let controls = ListControls::default().with_page_size(2).with_page(2);

        let got = process(&entries, &controls, StatisticsBasis::Filtered);

        assert_eq!(got.page_items.len(), 1);
    }

    #[test]
    fn process_is_pure_and_idempotent() {
        let entries = donation_set();
        let controls = ListControls::default()
            .with_search_term("i")
            .with_sort_toggled(SortAxis::Name);

        let first = process(&entries, &controls, StatisticsBasis::Filtered);
        let second = process(&entries, &controls, StatisticsBasis::Filtered);

        assert_eq!(first, second);
        assert_eq!(entries, donation_set(), "the input list must not change");
    }

    #[test]
    fn ranked_entries_keep_their_original_index() {
        let entries = donation_set();
        let controls = ListControls::default().with_sort_toggled(SortAxis::Amount);

        let got = process(&entries, &controls, StatisticsBasis::Filtered);

        // Ascending by amount: Siti (1), Budi (2), Ahmad (0).
        let indices: Vec<usize> = got
            .page_items
            .iter()
            .map(|ranked| ranked.original_index)
            .collect();
        assert_eq!(indices, [1, 2, 0]);
    }

    #[test]
    fn equal_amounts_keep_input_order_in_both_directions() {
        let entries = vec![
            Entry::new("first", 100.0),
            Entry::new("second", 100.0),
            Entry::new("third", 100.0),
        ];

        let ascending = ListControls::default().with_sort_toggled(SortAxis::Amount);
        let got = process(&entries, &ascending, StatisticsBasis::Filtered);
        assert_eq!(names(&got), ["first", "second", "third"]);

        let descending = ascending.with_sort_toggled(SortAxis::Amount);
        let got = process(&entries, &descending, StatisticsBasis::Filtered);
        assert_eq!(names(&got), ["first", "second", "third"]);
    }

    #[test]
    fn name_sort_ignores_case_and_diacritics() {
        let entries = vec![
            Entry::new("zainal", 1.0),
            Entry::new("Ésa", 2.0),
            Entry::new("AHMAD", 3.0),
        ];
        let controls = ListControls::default().with_sort_toggled(SortAxis::Name);

        let got = process(&entries, &controls, StatisticsBasis::Filtered);

        assert_eq!(names(&got), ["AHMAD", "Ésa", "zainal"]);
    }

    #[test]
    fn statistics_basis_selects_the_summarized_set() {
        let entries = donation_set();
        let controls = ListControls::default().with_search_term("si");

        let filtered = process(&entries, &controls, StatisticsBasis::Filtered);
        assert_eq!(filtered.statistics.count, 1);
        assert_eq!(filtered.statistics.total, 500_000.0);

        let full = process(&entries, &controls, StatisticsBasis::Full);
        assert_eq!(full.statistics.count, 3);
        assert_eq!(full.statistics.total, 3_250_000.0);
        assert_eq!(
            full.total_filtered_count, 1,
            "the rendered rows still honor the filter"
        );
    }

    #[test]
    fn zero_page_size_clamps_to_one_row_per_page() {
        let entries = donation_set();
        let controls = ListControls {
            page_size: 0,
            ..Default::default()
        };

        let got = process(&entries, &controls, StatisticsBasis::Filtered);

        assert_eq!(got.page_items.len(), 1);
        assert_eq!(got.total_pages, 3);
    }
}
