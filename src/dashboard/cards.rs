//! The summary cards at the top of the dashboard.

use maud::{Markup, html};

use crate::{
    html::{CARD_STYLE, format_currency},
    list::Statistics,
};

/// Render the card grid from donation statistics and the campaign count.
///
/// `donation_statistics` must be computed over the full donation set, not a
/// filtered one; the campaign table's search box below the cards must never
/// change these figures.
pub(super) fn summary_cards(donation_statistics: &Statistics, campaign_count: usize) -> Markup {
    html! {
        section class="w-full lg:max-w-4xl"
        {
            div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 gap-4"
            {
                (card("Total Terkumpul", &format_currency(donation_statistics.total), "total"))
                (card("Jumlah Donasi", &donation_statistics.count.to_string(), "count"))
                (card(
                    "Rata-rata Donasi",
                    &format_currency(donation_statistics.average),
                    "average",
                ))
                (card(
                    "Donasi Tertinggi",
                    &format_currency(donation_statistics.highest),
                    "highest",
                ))
                (card("Kampanye Aktif", &campaign_count.to_string(), "campaigns"))
            }
        }
    }
}

fn card(label: &str, value: &str, key: &str) -> Markup {
    html! {
        div class=(CARD_STYLE) data-summary-card=(key)
        {
            p class="text-sm text-gray-500 dark:text-gray-400" { (label) }
            p class="text-lg font-bold" data-card-value="true" { (value) }
        }
    }
}
