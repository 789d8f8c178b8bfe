//! The filterable campaign table on the dashboard.
//!
//! The table runs the campaign list through the same processor as the
//! donation tables by mapping each campaign to an entry (name + collected
//! amount). The processor keeps each row's original index, which is how the
//! full [Campaign] is looked back up for the extra columns.

use maud::{Markup, html};

use crate::{
    campaign::Campaign,
    endpoints,
    entry_table::{EntryTableConfig, page_links_nav, search_form, sort_header},
    html::{
        LINK_STYLE, MAX_LABEL_GRAPHEMES, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_currency, truncate_label,
    },
    list::{ListControls, ProcessedList, SortAxis},
};

/// The id htmx targets when it swaps the campaign table.
pub(super) const CAMPAIGN_TABLE_ID: &str = "campaign-table";

fn table_config(max_page_links: usize) -> EntryTableConfig<'static> {
    EntryTableConfig {
        container_id: CAMPAIGN_TABLE_ID,
        route: endpoints::DASHBOARD_VIEW,
        name_header: "Kampanye",
        search_placeholder: "Cari kampanye",
        empty_message: "Tidak ada kampanye yang cocok.",
        statistics_labels: None,
        max_page_links,
    }
}

/// Render the campaign table for one page of processed entries.
///
/// `campaigns` must be the same collection the processed entries were built
/// from: each page item's original index points back into it.
pub(super) fn campaign_table(
    campaigns: &[Campaign],
    processed: &ProcessedList,
    controls: &ListControls,
    max_page_links: usize,
) -> Markup {
    let config = table_config(max_page_links);
    let target = format!("#{CAMPAIGN_TABLE_ID}");

    html! {
        section id=(CAMPAIGN_TABLE_ID) class="space-y-4 w-full lg:max-w-4xl"
        {
            (search_form(controls, &config, &target))

            // The summary always covers the full campaign list (the
            // processor ran with the full statistics basis), so searching
            // the table never changes these numbers.
            p class="text-sm text-gray-600 dark:text-gray-400"
            {
                "Total terkumpul dari "
                span data-campaign-count="true" { (processed.statistics.count) }
                " kampanye: "
                span class="font-semibold" data-campaign-total="true"
                {
                    (format_currency(processed.statistics.total))
                }
            }

            div class="relative overflow-x-auto rounded bg-white dark:bg-gray-800 shadow"
            {
                table class="w-full text-sm text-left text-gray-600 dark:text-gray-300"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE)
                            {
                                (sort_header("Kampanye", SortAxis::Name, controls, &config, &target))
                            }
                            th scope="col" class=(TABLE_CELL_STYLE)
                            {
                                (sort_header("Terkumpul", SortAxis::Amount, controls, &config, &target))
                            }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Progres" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Rincian" }
                        }
                    }

                    tbody
                    {
                        @if processed.page_items.is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td colspan="4" data-empty-state="true" class=(TABLE_CELL_STYLE)
                                {
                                    "Tidak ada kampanye yang cocok."
                                }
                            }
                        }

                        @for ranked in &processed.page_items {
                            (campaign_row(&campaigns[ranked.original_index]))
                        }
                    }
                }
            }

            (page_links_nav(processed, controls, &config, &target))
        }
    }
}

fn campaign_row(campaign: &Campaign) -> Markup {
    let donations_url = endpoints::format_endpoint(endpoints::DONATIONS_VIEW, campaign.id);
    let expenses_url = endpoints::format_endpoint(endpoints::EXPENSES_VIEW, campaign.id);

    html! {
        tr data-campaign-row=(campaign.id) class=(TABLE_ROW_STYLE)
        {
            th scope="row" class={ (TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white" }
            {
                (truncate_label(&campaign.name, MAX_LABEL_GRAPHEMES))
            }
            td class=(TABLE_CELL_STYLE) { (format_currency(campaign.collected)) }
            td class=(TABLE_CELL_STYLE)
            {
                (format!("{:.0}%", campaign.progress_percent()))
            }
            td class=(TABLE_CELL_STYLE)
            {
                a href=(donations_url) class=(LINK_STYLE) { "Donasi" }
                " | "
                a href=(expenses_url) class=(LINK_STYLE) { "Pengeluaran" }
            }
        }
    }
}
