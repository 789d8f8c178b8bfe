//! The HTTP client for the backend donation API.

use reqwest::{
    StatusCode, Url,
    header::{HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::{
    Error,
    campaign::{Campaign, CampaignId},
    list::Entry,
    session::AccessToken,
};

use super::models::{CampaignDto, DonationDto, ExpenseDto, TokenDto};

/// Header that tells the tunnel fronting the backend to skip its browser
/// interstitial and return JSON.
const BYPASS_HEADER: &str = "ngrok-skip-browser-warning";

/// A thin, typed wrapper over the backend's REST endpoints.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
/// Every request carries the bypass header; takmir endpoints additionally
/// carry the caller's bearer token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the API at `base_url`.
    ///
    /// # Errors
    /// Returns [Error::ApiUnreachable] if `base_url` cannot be parsed or the
    /// underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        // A missing trailing slash would make Url::join replace the last
        // path segment instead of appending to it.
        let normalized = if base_url.ends_with('/') {
            base_url.to_owned()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|error| Error::ApiUnreachable(format!("invalid API base URL: {error}")))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(BYPASS_HEADER, HeaderValue::from_static("1"));

        let http = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|error| Error::ApiUnreachable(error.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// All public campaigns, for the browse page.
    pub async fn campaigns(&self) -> Result<Vec<Campaign>, Error> {
        let dtos: Vec<CampaignDto> = self.get_json("campaigns", None).await?;

        Ok(dtos.into_iter().map(CampaignDto::into_campaign).collect())
    }

    /// One campaign by ID.
    pub async fn campaign(&self, campaign_id: CampaignId) -> Result<Campaign, Error> {
        let dto: CampaignDto = self
            .get_json(&format!("campaigns/{campaign_id}"), None)
            .await?;

        Ok(dto.into_campaign())
    }

    /// The donations received by one campaign, newest first.
    pub async fn donations(&self, campaign_id: CampaignId) -> Result<Vec<Entry>, Error> {
        let dtos: Vec<DonationDto> = self
            .get_json(&format!("campaigns/{campaign_id}/donations"), None)
            .await?;

        Ok(dtos.into_iter().map(DonationDto::into_entry).collect())
    }

    /// The expense disclosures of one campaign. Takmir only.
    pub async fn expenses(
        &self,
        token: &AccessToken,
        campaign_id: CampaignId,
    ) -> Result<Vec<Entry>, Error> {
        let dtos: Vec<ExpenseDto> = self
            .get_json(&format!("campaigns/{campaign_id}/expenses"), Some(token))
            .await?;

        Ok(dtos.into_iter().map(ExpenseDto::into_entry).collect())
    }

    /// The campaigns managed by the logged-in takmir.
    pub async fn managed_campaigns(&self, token: &AccessToken) -> Result<Vec<Campaign>, Error> {
        let dtos: Vec<CampaignDto> = self.get_json("takmir/campaigns", Some(token)).await?;

        Ok(dtos.into_iter().map(CampaignDto::into_campaign).collect())
    }

    /// Every donation across the takmir's campaigns, for the dashboard
    /// summary cards.
    pub async fn all_donations(&self, token: &AccessToken) -> Result<Vec<Entry>, Error> {
        let dtos: Vec<DonationDto> = self.get_json("takmir/donations", Some(token)).await?;

        Ok(dtos.into_iter().map(DonationDto::into_entry).collect())
    }

    /// The backend-hosted checkout page for a campaign.
    ///
    /// Payments never touch this crate; the donate button simply links the
    /// visitor to the backend.
    pub fn checkout_url(&self, campaign_id: CampaignId) -> Result<String, Error> {
        self.join(&format!("campaigns/{campaign_id}/checkout"))
            .map(Into::into)
    }

    /// Exchange takmir credentials for a bearer token.
    ///
    /// # Errors
    /// Returns [Error::InvalidCredentials] when the backend rejects the
    /// pair, so the log-in page can tell "wrong password" apart from "API is
    /// down".
    pub async fn log_in(&self, email: &str, password: &str) -> Result<AccessToken, Error> {
        let endpoint = self.join("auth/login")?;

        let response = self
            .http
            .post(endpoint)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|error| Error::ApiUnreachable(error.to_string()))?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(Error::InvalidCredentials);
        }

        let response = check_status(response).await?;
        let dto: TokenDto = response
            .json()
            .await
            .map_err(|error| Error::MalformedResponse(error.to_string()))?;

        Ok(AccessToken::new(dto.token))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&AccessToken>,
    ) -> Result<T, Error> {
        let endpoint = self.join(path)?;

        let mut request = self.http.get(endpoint);
        if let Some(token) = token {
            request = request.bearer_auth(token.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|error| Error::ApiUnreachable(error.to_string()))?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|error| Error::MalformedResponse(error.to_string()))
    }

    fn join(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(path)
            .map_err(|error| Error::ApiUnreachable(format!("invalid API path {path}: {error}")))
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    Err(match status {
        StatusCode::UNAUTHORIZED => Error::Unauthorized,
        StatusCode::NOT_FOUND => Error::NotFound,
        _ => {
            let body = response.text().await.unwrap_or_default();
            Error::ApiStatus(status, body)
        }
    })
}
