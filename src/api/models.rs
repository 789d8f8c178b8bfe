//! Typed adapters for the backend's JSON.
//!
//! The backend names the same field differently across endpoints (`Nama`
//! next to `nama_donatur`, `JumlahDonasi` sometimes a number and sometimes a
//! string). These DTOs absorb all of that at the boundary so the rest of the
//! crate only ever sees the canonical [Entry] and [Campaign] shapes with
//! finite amounts.

use serde::Deserialize;
use serde_json::Value;
use time::{Date, macros::format_description};

use crate::{
    campaign::Campaign,
    list::Entry,
};

/// One donation as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DonationDto {
    /// The donor's display name.
    #[serde(alias = "Nama", alias = "nama", alias = "nama_donatur", default)]
    name: String,
    /// The donated amount; a number, a numeric string, or garbage.
    #[serde(
        alias = "JumlahDonasi",
        alias = "jumlah_donasi",
        alias = "jumlah",
        default
    )]
    amount: Value,
}

impl DonationDto {
    pub(crate) fn into_entry(self) -> Entry {
        Entry::new(self.name, coerce_amount(&self.amount))
    }
}

/// One expense disclosure as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ExpenseDto {
    /// What the money was spent on.
    #[serde(
        alias = "Keperluan",
        alias = "keperluan",
        alias = "nama_pengeluaran",
        default
    )]
    purpose: String,
    /// The amount spent; same loose typing as donations.
    #[serde(
        alias = "JumlahPengeluaran",
        alias = "jumlah_pengeluaran",
        alias = "nominal",
        default
    )]
    amount: Value,
}

impl ExpenseDto {
    pub(crate) fn into_entry(self) -> Entry {
        Entry::new(self.purpose, coerce_amount(&self.amount))
    }
}

/// One campaign as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CampaignDto {
    id: i64,
    #[serde(
        alias = "NamaKampanye",
        alias = "nama_kampanye",
        alias = "judul",
        default
    )]
    name: String,
    #[serde(alias = "Deskripsi", alias = "deskripsi", default)]
    description: String,
    #[serde(alias = "TargetDonasi", alias = "target_donasi", default)]
    target: Value,
    #[serde(
        alias = "JumlahDonasi",
        alias = "jumlah_donasi",
        alias = "donasi_terkumpul",
        default
    )]
    collected: Value,
    #[serde(alias = "TanggalDibuat", alias = "tanggal_dibuat", default)]
    created_at: Option<String>,
}

impl CampaignDto {
    pub(crate) fn into_campaign(self) -> Campaign {
        Campaign {
            id: self.id,
            name: self.name,
            description: self.description,
            target: coerce_amount(&self.target),
            collected: coerce_amount(&self.collected),
            created_at: self.created_at.as_deref().and_then(parse_backend_date),
        }
    }
}

/// The body of a successful log-in response.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenDto {
    #[serde(alias = "access_token", alias = "Token")]
    pub(crate) token: String,
}

/// Read a monetary value out of whatever the backend sent.
///
/// Numbers pass through, numeric strings are parsed, and anything else
/// (null, objects, unparseable text, NaN, infinities) becomes zero. The row
/// is kept either way: a donation with a broken amount still shows up in
/// tables and searches, it just contributes nothing to the sums.
pub(crate) fn coerce_amount(raw: &Value) -> f64 {
    let amount = match raw {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => text.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };

    if amount.is_finite() { amount } else { 0.0 }
}

/// Dates arrive as `YYYY-MM-DD`, occasionally with a time suffix we ignore.
fn parse_backend_date(text: &str) -> Option<Date> {
    let date_part = text.get(..10).unwrap_or(text);

    Date::parse(date_part, format_description!("[year]-[month]-[day]")).ok()
}
