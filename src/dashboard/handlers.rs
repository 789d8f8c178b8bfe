//! The route handler for the dashboard page.

use axum::{
    Extension,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error,
    api::ApiClient,
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base, format_date},
    list::{Entry, ListQuery, Statistics, StatisticsBasis, process},
    navigation::NavBar,
    pagination::PaginationConfig,
    session::AccessToken,
    timezone::get_local_offset,
};

use super::{cards::summary_cards, tables::campaign_table};

/// The state needed for the dashboard page.
#[derive(Clone)]
pub struct DashboardViewState {
    /// The client for the backend donation API.
    pub api: ApiClient,
    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Jakarta".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            pagination_config: state.pagination_config.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the takmir dashboard.
///
/// The summary cards cover every donation across the takmir's campaigns,
/// while the campaign table below them filters, sorts, and paginates the
/// campaign list. The two are deliberately independent: searching the table
/// re-renders only the table fragment (htmx), so the cards keep describing
/// the full set.
pub async fn get_dashboard_page(
    State(state): State<DashboardViewState>,
    Extension(token): Extension<AccessToken>,
    Query(query): Query<ListQuery>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response, Error> {
    let campaigns = state
        .api
        .managed_campaigns(&token)
        .await
        .inspect_err(|error| tracing::error!("could not fetch managed campaigns: {error}"))?;

    let controls = query.normalize(state.pagination_config.default_page_size);
    let entries: Vec<Entry> = campaigns
        .iter()
        .map(|campaign| Entry::new(campaign.name.clone(), campaign.collected))
        .collect();
    // Full basis: the table filter must never change the campaign summary.
    let processed = process(&entries, &controls, StatisticsBasis::Full);

    let table = campaign_table(
        &campaigns,
        &processed,
        &controls,
        state.pagination_config.max_links,
    );

    if is_htmx {
        return Ok(table.into_response());
    }

    let donations = state
        .api
        .all_donations(&token)
        .await
        .inspect_err(|error| tracing::error!("could not fetch donations: {error}"))?;
    let donation_statistics = Statistics::over(&donations);
    let today = current_local_date(&state.local_timezone)?;

    Ok(dashboard_view(
        summary_cards(&donation_statistics, campaigns.len()),
        table,
        today,
    )
    .into_response())
}

fn current_local_date(local_timezone: &str) -> Result<Date, Error> {
    let Some(local_offset) = get_local_offset(local_timezone) else {
        tracing::error!("Invalid timezone {}", local_timezone);
        return Err(Error::InvalidTimezone(local_timezone.to_owned()));
    };

    Ok(OffsetDateTime::now_utc().to_offset(local_offset).date())
}

fn dashboard_view(cards: Markup, table: Markup, today: Date) -> Markup {
    let nav_bar = NavBar::takmir(endpoints::DASHBOARD_VIEW).into_html();

    base(
        "Dashboard Takmir",
        &html! {
            (nav_bar)

            main class=(PAGE_CONTAINER_STYLE)
            {
                section class="w-full lg:max-w-4xl space-y-6"
                {
                    header class="flex justify-between items-baseline flex-wrap"
                    {
                        h1 class="text-xl font-bold" { "Dashboard Takmir" }
                        span class="text-sm text-gray-500 dark:text-gray-400"
                        {
                            "Data per " (format_date(today))
                        }
                    }

                    (cards)

                    section
                    {
                        h2 class="text-lg font-semibold mb-3" { "Kampanye Anda" }
                        (table)
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use axum::{
        Extension,
        extract::{Query, State},
    };
    use axum_htmx::HxRequest;
    use scraper::Selector;
    use serde_json::json;

    use crate::{
        Error,
        api::ApiClient,
        list::ListQuery,
        pagination::PaginationConfig,
        session::AccessToken,
        test_utils::{
            assert_valid_html, backend::FakeBackend, must_select_one, parse_html_document,
            parse_html_fragment, select_texts,
        },
    };

    use super::{DashboardViewState, get_dashboard_page};

    fn campaigns_json() -> serde_json::Value {
        json!([
            {
                "id": 1,
                "NamaKampanye": "Renovasi Atap",
                "TargetDonasi": 10000000,
                "JumlahDonasi": 2500000,
            },
            {
                "id": 2,
                "NamaKampanye": "Karpet Baru",
                "TargetDonasi": 4000000,
                "JumlahDonasi": 4000000,
            },
        ])
    }

    fn donations_json() -> serde_json::Value {
        json!([
            { "Nama": "Ahmad", "JumlahDonasi": 2000000 },
            { "Nama": "Siti", "JumlahDonasi": 500000 },
            { "Nama": "Budi", "JumlahDonasi": 750000 },
        ])
    }

    async fn state_for(backend: &FakeBackend) -> DashboardViewState {
        DashboardViewState {
            api: ApiClient::new(backend.base_url()).expect("Could not build client"),
            pagination_config: PaginationConfig::default(),
            local_timezone: "Asia/Jakarta".to_owned(),
        }
    }

    #[tokio::test]
    async fn dashboard_shows_cards_over_the_full_donation_set() {
        let backend = FakeBackend::spawn(&[
            ("/takmir/campaigns", campaigns_json()),
            ("/takmir/donations", donations_json()),
        ])
        .await;

        let response = get_dashboard_page(
            State(state_for(&backend).await),
            Extension(AccessToken::new("tok")),
            Query(ListQuery {
                q: Some("karpet".to_owned()),
                ..Default::default()
            }),
            HxRequest(false),
        )
        .await
        .expect("Handler failed");

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let total = must_select_one(&html, "[data-summary-card='total'] [data-card-value]");
        assert_eq!(
            total.text().collect::<String>().trim(),
            "Rp3.250.000",
            "cards must cover the full donation set even while the table is filtered"
        );

        let rows = select_texts(&html, "tr[data-campaign-row]");
        assert_eq!(rows.len(), 1, "the table itself honors the filter");
        assert!(rows[0].contains("Karpet Baru"));
    }

    #[tokio::test]
    async fn htmx_request_swaps_only_the_campaign_table() {
        let backend = FakeBackend::spawn(&[
            ("/takmir/campaigns", campaigns_json()),
            ("/takmir/donations", donations_json()),
        ])
        .await;

        let response = get_dashboard_page(
            State(state_for(&backend).await),
            Extension(AccessToken::new("tok")),
            Query(ListQuery::default()),
            HxRequest(true),
        )
        .await
        .expect("Handler failed");

        let html = parse_html_fragment(response).await;
        let selector = Selector::parse("[data-summary-card]").unwrap();
        assert!(
            html.select(&selector).next().is_none(),
            "fragments must not re-render the summary cards"
        );

        let rows = select_texts(&html, "tr[data-campaign-row]");
        assert_eq!(rows.len(), 2);

        let requests = backend.requests();
        assert!(
            requests.iter().all(|request| request.path != "/takmir/donations"),
            "fragment renders must not refetch the donation set"
        );
    }

    #[tokio::test]
    async fn expired_token_surfaces_as_unauthorized() {
        let backend = crate::test_utils::backend::respond_with_status(
            axum::http::StatusCode::UNAUTHORIZED,
        )
        .await;

        let got = get_dashboard_page(
            State(state_for(&backend).await),
            Extension(AccessToken::new("expired")),
            Query(ListQuery::default()),
            HxRequest(false),
        )
        .await;

        assert!(matches!(got, Err(Error::Unauthorized)));
    }
}
