//! The campaign detail page with its donor table.

use axum::{
    extract::{FromRef, Path, Query, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};

use crate::{
    AppState, Error,
    api::ApiClient,
    endpoints,
    entry_table::{EntryTableConfig, StatisticsLabels, entry_table},
    html::{BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE, base, format_currency, format_date},
    list::{ListQuery, StatisticsBasis, process},
    navigation::NavBar,
    pagination::PaginationConfig,
};

use super::models::{Campaign, CampaignId};

/// The id htmx targets when it swaps the donor table.
const DONOR_TABLE_ID: &str = "donor-table";

/// The state needed for the campaign detail page.
#[derive(Clone)]
pub struct CampaignDetailState {
    /// The client for the backend donation API.
    pub api: ApiClient,
    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for CampaignDetailState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Render one campaign with its donor table.
///
/// htmx requests get only the table fragment back: the search box, sort
/// headers, and page links all target the table container, so the rest of
/// the page never re-renders while the visitor plays with the controls.
pub async fn get_campaign_detail_page(
    State(state): State<CampaignDetailState>,
    Path(campaign_id): Path<CampaignId>,
    Query(query): Query<ListQuery>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response, Error> {
    let donations = state
        .api
        .donations(campaign_id)
        .await
        .inspect_err(|error| tracing::error!("could not fetch donations: {error}"))?;

    let controls = query.normalize(state.pagination_config.default_page_size);
    let processed = process(&donations, &controls, StatisticsBasis::Filtered);

    let route = endpoints::format_endpoint(endpoints::CAMPAIGN_DETAIL_VIEW, campaign_id);
    let config = donor_table_config(&route, state.pagination_config.max_links);
    let table = entry_table(&processed, &controls, &config);

    if is_htmx {
        return Ok(table.into_response());
    }

    let campaign = state
        .api
        .campaign(campaign_id)
        .await
        .inspect_err(|error| tracing::error!("could not fetch campaign: {error}"))?;
    let checkout_url = state.api.checkout_url(campaign_id)?;

    Ok(detail_view(&campaign, &checkout_url, table).into_response())
}

fn donor_table_config<'a>(route: &'a str, max_page_links: usize) -> EntryTableConfig<'a> {
    EntryTableConfig {
        container_id: DONOR_TABLE_ID,
        route,
        name_header: "Donatur",
        search_placeholder: "Cari donatur",
        empty_message: "Belum ada donasi yang cocok.",
        statistics_labels: Some(StatisticsLabels {
            total: "Total Donasi",
            average: "Rata-rata",
            highest: "Donasi Tertinggi",
            count: "Jumlah Donatur",
        }),
        max_page_links,
    }
}

fn detail_view(campaign: &Campaign, checkout_url: &str, donor_table: Markup) -> Markup {
    let nav_bar = NavBar::public(endpoints::CAMPAIGNS_VIEW).into_html();
    let percent = campaign.progress_percent();

    base(
        &campaign.name,
        &html! {
            (nav_bar)

            main class=(PAGE_CONTAINER_STYLE)
            {
                section class="w-full lg:max-w-4xl space-y-6"
                {
                    header
                    {
                        h1 class="text-2xl font-bold" { (campaign.name) }

                        @if let Some(created_at) = campaign.created_at {
                            p class="text-sm text-gray-500 dark:text-gray-400"
                            {
                                "Dibuka " (format_date(created_at))
                            }
                        }
                    }

                    p class="text-gray-700 dark:text-gray-300" { (campaign.description) }

                    div
                    {
                        div class="w-full bg-gray-200 dark:bg-gray-700 rounded h-3" role="progressbar" aria-valuenow=(format!("{percent:.0}"))
                        {
                            div class="bg-emerald-600 h-3 rounded" style=(format!("width: {percent:.0}%")) {}
                        }

                        p class="mt-2"
                        {
                            span class="font-semibold text-lg" data-collected="true"
                            {
                                (format_currency(campaign.collected))
                            }
                            " terkumpul dari target "
                            span data-target="true" { (format_currency(campaign.target)) }
                        }
                    }

                    div class="max-w-xs"
                    {
                        a href=(checkout_url) class=(BUTTON_PRIMARY_STYLE) data-donate-link="true"
                        {
                            "Donasi Sekarang"
                        }
                    }

                    section
                    {
                        h2 class="text-lg font-semibold mb-3" { "Daftar Donatur" }
                        (donor_table)
                    }
                }
            }
        },
    )
}
