//! The campaign model the UI consumes.

use time::Date;

/// Identifier the backend assigns to a campaign.
pub type CampaignId = i64;

/// A fundraising effort tied to a mosque, with a target and a collected
/// amount.
///
/// Campaigns are consumed, not processed: the UI renders them and maps them
/// into [crate::list::Entry] values when the dashboard table needs filtering,
/// but all campaign state lives in the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    /// The backend's identifier for this campaign.
    pub id: CampaignId,
    /// Display title, e.g. "Renovasi Atap Masjid Al-Falah".
    pub name: String,
    /// Free-text description shown on the detail page.
    pub description: String,
    /// The fundraising goal in whole Rupiah.
    pub target: f64,
    /// The amount collected so far in whole Rupiah.
    pub collected: f64,
    /// When the campaign was opened, if the backend sent a readable date.
    pub created_at: Option<Date>,
}

impl Campaign {
    /// How far along the campaign is, as a percentage clamped to `0..=100`.
    ///
    /// A zero or negative target reads as no progress rather than a division
    /// error, and over-collection caps at 100 so progress bars never
    /// overflow their track.
    pub fn progress_percent(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }

        (self.collected / self.target * 100.0).clamp(0.0, 100.0)
    }
}
