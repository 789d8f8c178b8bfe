//! The donation table for one of the takmir's campaigns.

use axum::{
    extract::{FromRef, Path, Query, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};

use crate::{
    AppState, Error,
    api::ApiClient,
    campaign::{Campaign, CampaignId},
    endpoints,
    entry_table::{EntryTableConfig, StatisticsLabels, entry_table},
    html::{PAGE_CONTAINER_STYLE, base},
    list::{ListQuery, StatisticsBasis, process},
    navigation::NavBar,
    pagination::PaginationConfig,
};

/// The id htmx targets when it swaps the donation table.
const DONATION_TABLE_ID: &str = "donation-table";

/// The state needed for the donations page.
#[derive(Clone)]
pub struct DonationsViewState {
    /// The client for the backend donation API.
    pub api: ApiClient,
    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for DonationsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Render the donation table for one campaign.
///
/// The statistics line covers the filtered set: when the takmir searches for
/// a donor, the totals describe what the table shows.
pub async fn get_donations_page(
    State(state): State<DonationsViewState>,
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

    let route = endpoints::format_endpoint(endpoints::DONATIONS_VIEW, campaign_id);
    let config = EntryTableConfig {
        container_id: DONATION_TABLE_ID,
        route: &route,
        name_header: "Donatur",
        search_placeholder: "Cari donatur",
        empty_message: "Belum ada donasi yang cocok.",
        statistics_labels: Some(StatisticsLabels {
            total: "Total Donasi",
            average: "Rata-rata",
            highest: "Donasi Tertinggi",
            count: "Jumlah Donatur",
        }),
        max_page_links: state.pagination_config.max_links,
    };
    let table = entry_table(&processed, &controls, &config);

    if is_htmx {
        return Ok(table.into_response());
    }

    let campaign = state
        .api
        .campaign(campaign_id)
        .await
        .inspect_err(|error| tracing::error!("could not fetch campaign: {error}"))?;

    Ok(donations_view(&campaign, table).into_response())
}

fn donations_view(campaign: &Campaign, table: Markup) -> Markup {
    let nav_bar = NavBar::takmir(endpoints::DASHBOARD_VIEW).into_html();

    base(
        "Donasi",
        &html! {
            (nav_bar)

            main class=(PAGE_CONTAINER_STYLE)
            {
                section class="w-full lg:max-w-4xl space-y-4"
                {
                    h1 class="text-xl font-bold" { "Donasi · " (campaign.name) }

                    (table)
                }
            }
        },
    )
}
