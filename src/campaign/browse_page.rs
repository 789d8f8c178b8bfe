//! The donor-facing campaign list.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    api::ApiClient,
    endpoints,
    html::{CARD_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base, format_currency, truncate_label},
    navigation::NavBar,
};

use super::models::Campaign;

/// The max number of graphemes of a campaign description to show on a card.
const MAX_CARD_DESCRIPTION_GRAPHEMES: usize = 96;

/// The state needed for the campaign list page.
#[derive(Clone)]
pub struct CampaignListState {
    /// The client for the backend donation API.
    pub api: ApiClient,
}

impl FromRef<AppState> for CampaignListState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// Render the grid of open campaigns.
pub async fn get_campaigns_page(
    State(state): State<CampaignListState>,
) -> Result<Response, Error> {
    let campaigns = state
        .api
        .campaigns()
        .await
        .inspect_err(|error| tracing::error!("could not fetch campaigns: {error}"))?;

    Ok(campaigns_view(&campaigns).into_response())
}

fn campaigns_view(campaigns: &[Campaign]) -> Markup {
    let nav_bar = NavBar::public(endpoints::CAMPAIGNS_VIEW).into_html();

    base(
        "Kampanye",
        &html! {
            (nav_bar)

            main class=(PAGE_CONTAINER_STYLE)
            {
                section class="w-full lg:max-w-5xl space-y-4"
                {
                    h1 class="text-xl font-bold" { "Kampanye Pembangunan Masjid" }

                    @if campaigns.is_empty() {
                        p data-empty-state="true" class="text-gray-600 dark:text-gray-400"
                        {
                            "Belum ada kampanye yang dibuka."
                        }
                    }

                    div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4"
                    {
                        @for campaign in campaigns {
                            (campaign_card(campaign))
                        }
                    }
                }
            }
        },
    )
}

fn campaign_card(campaign: &Campaign) -> Markup {
    let detail_url = endpoints::format_endpoint(endpoints::CAMPAIGN_DETAIL_VIEW, campaign.id);
    let percent = campaign.progress_percent();

    html! {
        article class=(CARD_STYLE) data-campaign-card=(campaign.id)
        {
            h2 class="text-lg font-semibold"
            {
                a href=(detail_url) class=(LINK_STYLE) { (campaign.name) }
            }

            p class="mt-1 text-sm text-gray-600 dark:text-gray-400"
            {
                (truncate_label(&campaign.description, MAX_CARD_DESCRIPTION_GRAPHEMES))
            }

            div class="mt-3 w-full bg-gray-200 dark:bg-gray-700 rounded h-2" role="progressbar" aria-valuenow=(format!("{percent:.0}"))
            {
                div class="bg-emerald-600 h-2 rounded" style=(format!("width: {percent:.0}%")) {}
            }

            p class="mt-2 text-sm"
            {
                span class="font-semibold" data-collected="true" { (format_currency(campaign.collected)) }
                " terkumpul dari "
                span data-target="true" { (format_currency(campaign.target)) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use serde_json::json;

    use crate::{
        api::ApiClient,
        test_utils::{assert_valid_html, backend::FakeBackend, parse_html_document, select_texts},
    };

    use super::{CampaignListState, get_campaigns_page};

    async fn state_for(backend: &FakeBackend) -> CampaignListState {
        CampaignListState {
            api: ApiClient::new(backend.base_url()).expect("Could not build client"),
        }
    }

    #[tokio::test]
    async fn campaign_cards_show_progress_and_amounts() {
        let backend = FakeBackend::spawn(&[(
            "/campaigns",
            json!([
                {
                    "id": 1,
                    "NamaKampanye": "Renovasi Atap",
                    "Deskripsi": "Atap bocor di sisi timur",
                    "TargetDonasi": 10000000,
                    "JumlahDonasi": 2500000,
                },
                {
                    "id": 2,
                    "NamaKampanye": "Karpet Baru",
                    "TargetDonasi": "4000000",
                    "JumlahDonasi": "4000000",
                },
            ]),
        )])
        .await;

        let response = get_campaigns_page(State(state_for(&backend).await))
            .await
            .expect("Handler failed");

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let cards = select_texts(&html, "article[data-campaign-card]");
        assert_eq!(cards.len(), 2);
        assert!(cards[0].contains("Renovasi Atap"));

        let collected = select_texts(&html, "span[data-collected='true']");
        assert_eq!(collected, ["Rp2.500.000", "Rp4.000.000"]);
    }

    #[tokio::test]
    async fn empty_campaign_list_shows_the_empty_state() {
        let backend = FakeBackend::spawn(&[("/campaigns", json!([]))]).await;

        let response = get_campaigns_page(State(state_for(&backend).await))
            .await
            .expect("Handler failed");

        let html = parse_html_document(response).await;
        let empty = select_texts(&html, "p[data-empty-state='true']");
        assert_eq!(empty.len(), 1);
    }
}
