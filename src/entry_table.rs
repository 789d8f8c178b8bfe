//! The shared table component behind the donor, expense, and campaign lists.
//!
//! Renders one [ProcessedList] page with a search box, sortable column
//! headers, a statistics line, and numbered page links. The whole section
//! carries an id so htmx can swap it in place when a control changes; every
//! link and the search form point back at `route` with a query string built
//! from the current [ListControls], which keeps the page-reset rules in the
//! controls type rather than in markup.

use maud::{Markup, html};

use crate::{
    html::{
        MAX_LABEL_GRAPHEMES, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_currency, truncate_label,
    },
    list::{ListControls, ProcessedList, SortAxis, SortDirection, SortSelection},
    pagination::{PageLink, build_page_links},
};

/// Labels for the statistics line above a table.
pub struct StatisticsLabels<'a> {
    /// Label for the sum of amounts, e.g. "Total Donasi".
    pub total: &'a str,
    /// Label for the mean amount.
    pub average: &'a str,
    /// Label for the largest amount.
    pub highest: &'a str,
    /// Label for the number of entries.
    pub count: &'a str,
}

/// Static configuration for one table view.
pub struct EntryTableConfig<'a> {
    /// The id of the swappable section, unique within the page.
    pub container_id: &'a str,
    /// The URL this table's links and search form point at.
    pub route: &'a str,
    /// Heading for the name column, e.g. "Donatur".
    pub name_header: &'a str,
    /// Placeholder text for the search box.
    pub search_placeholder: &'a str,
    /// Message shown when no entry matches the filter.
    pub empty_message: &'a str,
    /// Labels for the statistics line, or `None` to hide it.
    pub statistics_labels: Option<StatisticsLabels<'a>>,
    /// The most numbered page links to show at once.
    pub max_page_links: usize,
}

/// Render one page of entries with its controls.
pub fn entry_table(
    processed: &ProcessedList,
    controls: &ListControls,
    config: &EntryTableConfig,
) -> Markup {
    let target = format!("#{}", config.container_id);

    html! {
        section id=(config.container_id) class="space-y-4 w-full lg:max-w-4xl"
        {
            (search_form(controls, config, &target))

            @if let Some(labels) = &config.statistics_labels {
                (statistics_line(processed, labels))
            }

            div class="relative overflow-x-auto rounded bg-white dark:bg-gray-800 shadow"
            {
                table class="w-full text-sm text-left text-gray-600 dark:text-gray-300"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "No." }
                            th scope="col" class=(TABLE_CELL_STYLE)
                            {
                                (sort_header(config.name_header, SortAxis::Name, controls, config, &target))
                            }
                            th scope="col" class=(TABLE_CELL_STYLE)
                            {
                                (sort_header("Jumlah", SortAxis::Amount, controls, config, &target))
                            }
                        }
                    }

                    tbody
                    {
                        @if processed.page_items.is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td colspan="3" data-empty-state="true" class=(TABLE_CELL_STYLE)
                                {
                                    (config.empty_message)
                                }
                            }
                        }

                        @for ranked in &processed.page_items {
                            tr data-entry-row="true" class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (ranked.original_index + 1) }
                                th scope="row" class={ (TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white" }
                                {
                                    (truncate_label(&ranked.entry.name, MAX_LABEL_GRAPHEMES))
                                }
                                td class=(TABLE_CELL_STYLE) { (format_currency(ranked.entry.amount)) }
                            }
                        }
                    }
                }
            }

            (page_links_nav(processed, controls, config, &target))
        }
    }
}

pub(crate) fn search_form(controls: &ListControls, config: &EntryTableConfig, target: &str) -> Markup {
    html! {
        form
            method="get"
            action=(config.route)
            hx-get=(config.route)
            hx-target=(target)
            hx-swap="outerHTML"
            class="flex gap-2 items-center"
        {
            // Submitting a new search always lands on page 1: the page
            // parameter is simply left out of the form.
            @if let SortSelection::Active { axis, direction } = controls.sort {
                input type="hidden" name="sort" value=(axis.as_query_value());
                input type="hidden" name="dir" value=(direction.as_query_value());
            }
            input type="hidden" name="page_size" value=(controls.page_size);

            input
                type="search"
                name="q"
                value=(controls.search_term)
                placeholder=(config.search_placeholder)
                class="block p-2.5 rounded text-sm grow text-gray-900 dark:text-white bg-white dark:bg-gray-700 border border-gray-300 dark:border-gray-600";

            button
                type="submit"
                class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white rounded text-sm"
            {
                "Cari"
            }
        }
    }
}

pub(crate) fn sort_header(
    label: &str,
    axis: SortAxis,
    controls: &ListControls,
    config: &EntryTableConfig,
    target: &str,
) -> Markup {
    let toggled = controls.clone().with_sort_toggled(axis);
    let href = toggled.to_url(config.route);
    let indicator = match controls.sort.direction_of(axis) {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => "",
    };

    html! {
        a
            href=(href)
            hx-get=(href)
            hx-target=(target)
            hx-swap="outerHTML"
            data-sort-header=(label)
            class="hover:text-emerald-700 dark:hover:text-emerald-400"
        {
            (label) (indicator)
        }
    }
}

fn statistics_line(processed: &ProcessedList, labels: &StatisticsLabels) -> Markup {
    let statistics = processed.statistics;

    html! {
        dl class="grid grid-cols-2 sm:grid-cols-4 gap-2 text-sm"
        {
            div class="rounded bg-white dark:bg-gray-800 shadow p-3"
            {
                dt class="text-gray-500 dark:text-gray-400" { (labels.total) }
                dd class="font-semibold" data-statistic="total" { (format_currency(statistics.total)) }
            }
            div class="rounded bg-white dark:bg-gray-800 shadow p-3"
            {
                dt class="text-gray-500 dark:text-gray-400" { (labels.average) }
                dd class="font-semibold" data-statistic="average" { (format_currency(statistics.average)) }
            }
            div class="rounded bg-white dark:bg-gray-800 shadow p-3"
            {
                dt class="text-gray-500 dark:text-gray-400" { (labels.highest) }
                dd class="font-semibold" data-statistic="highest" { (format_currency(statistics.highest)) }
            }
            div class="rounded bg-white dark:bg-gray-800 shadow p-3"
            {
                dt class="text-gray-500 dark:text-gray-400" { (labels.count) }
                dd class="font-semibold" data-statistic="count" { (statistics.count) }
            }
        }
    }
}

pub(crate) fn page_links_nav(
    processed: &ProcessedList,
    controls: &ListControls,
    config: &EntryTableConfig,
    target: &str,
) -> Markup {
    let links = build_page_links(
        processed.current_page,
        processed.total_pages,
        config.max_page_links,
    );
    let page_url = |page: usize| controls.clone().with_page(page).to_url(config.route);
    let link_style = "px-3 py-1 rounded border border-gray-300 dark:border-gray-600 \
        hover:bg-emerald-50 dark:hover:bg-gray-700";
    let current_style = "px-3 py-1 rounded bg-emerald-600 text-white";

    html! {
        nav class="pagination flex gap-1 text-sm" aria-label="Halaman"
        {
            @for link in links {
                @match link {
                    PageLink::Back(page) => {
                        a href=(page_url(page)) hx-get=(page_url(page)) hx-target=(target) hx-swap="outerHTML" class=(link_style) { "‹" }
                    }
                    PageLink::Next(page) => {
                        a href=(page_url(page)) hx-get=(page_url(page)) hx-target=(target) hx-swap="outerHTML" class=(link_style) { "›" }
                    }
                    PageLink::Page(page) => {
                        a href=(page_url(page)) hx-get=(page_url(page)) hx-target=(target) hx-swap="outerHTML" class=(link_style) { (page) }
                    }
                    PageLink::Current(page) => {
                        span aria-current="page" class=(current_style) { (page) }
                    }
                    PageLink::Ellipsis => {
                        span class="px-2 text-gray-500" { "…" }
                    }
                }
            }
        }
    }
}
