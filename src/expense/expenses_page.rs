//! The expense disclosure table for one of the takmir's campaigns.
//!
//! Expense disclosures are what donors get shown as proof of spending; only
//! the campaign's takmir can list them here, so the backend call carries the
//! session's bearer token.

use axum::{
    Extension,
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
    session::AccessToken,
};

/// The id htmx targets when it swaps the expense table.
const EXPENSE_TABLE_ID: &str = "expense-table";

/// The state needed for the expenses page.
#[derive(Clone)]
pub struct ExpensesViewState {
    /// The client for the backend donation API.
    pub api: ApiClient,
    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for ExpensesViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Render the expense table for one campaign.
pub async fn get_expenses_page(
    State(state): State<ExpensesViewState>,
    Extension(token): Extension<AccessToken>,
    Path(campaign_id): Path<CampaignId>,
    Query(query): Query<ListQuery>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response, Error> {
    let expenses = state
        .api
        .expenses(&token, campaign_id)
        .await
        .inspect_err(|error| tracing::error!("could not fetch expenses: {error}"))?;

    let controls = query.normalize(state.pagination_config.default_page_size);
    let processed = process(&expenses, &controls, StatisticsBasis::Filtered);

    let route = endpoints::format_endpoint(endpoints::EXPENSES_VIEW, campaign_id);
    let config = EntryTableConfig {
        container_id: EXPENSE_TABLE_ID,
        route: &route,
        name_header: "Keperluan",
        search_placeholder: "Cari pengeluaran",
        empty_message: "Belum ada pengeluaran yang cocok.",
        statistics_labels: Some(StatisticsLabels {
            total: "Total Pengeluaran",
            average: "Rata-rata",
            highest: "Pengeluaran Terbesar",
            count: "Jumlah Transaksi",
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

    Ok(expenses_view(&campaign, table).into_response())
}

fn expenses_view(campaign: &Campaign, table: Markup) -> Markup {
    let nav_bar = NavBar::takmir(endpoints::DASHBOARD_VIEW).into_html();

    base(
        "Pengeluaran",
        &html! {
            (nav_bar)

            main class=(PAGE_CONTAINER_STYLE)
            {
                section class="w-full lg:max-w-4xl space-y-4"
                {
                    h1 class="text-xl font-bold" { "Pengeluaran · " (campaign.name) }

                    p class="text-sm text-gray-600 dark:text-gray-400"
                    {
                        "Rincian ini ditampilkan kepada donatur sebagai bukti penggunaan dana."
                    }

                    (table)
                }
            }
        },
    )
}
