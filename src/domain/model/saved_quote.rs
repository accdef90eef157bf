use std::fmt;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::domain::enums::Purity;
use crate::domain::model::input::QuoteForm;

/// Immutable snapshot of a quote form plus the selected wastage percent.
/// Totals are not stored; they are replayed from these fields on demand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedQuote {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Raw price text as entered
    pub price_per_gram: String,

    /// Raw weight text as entered
    pub weight_grams: String,

    pub purity: Purity,

    pub wastage_min_percent: String,

    pub wastage_max_percent: String,

    /// Percent selected at save time; absent if nothing was computed yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_percent: Option<u32>,

    /// RFC 3339 timestamp; older records may not carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl SavedQuote {
    /// Snapshot a form with a fresh id and the current time
    pub fn from_form(form: &QuoteForm, selected_percent: Option<u32>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            price_per_gram: form.price.clone(),
            weight_grams: form.weight.clone(),
            purity: form.purity,
            wastage_min_percent: form.wastage_min.clone(),
            wastage_max_percent: form.wastage_max.clone(),
            selected_percent,
            saved_at: Some(chrono::Utc::now().to_rfc3339()),
        }
    }

    /// Rebuild the raw form this quote was saved from
    pub fn to_form(&self) -> QuoteForm {
        QuoteForm {
            price: self.price_per_gram.clone(),
            weight: self.weight_grams.clone(),
            purity: self.purity,
            wastage_min: self.wastage_min_percent.clone(),
            wastage_max: self.wastage_max_percent.clone(),
        }
    }

    /// Saved time rendered for listings, or an empty string when unknown
    pub fn format_saved_at(&self) -> String {
        match self.saved_at.as_deref().map(chrono::DateTime::parse_from_rfc3339) {
            Some(Ok(dt)) => dt.naive_local().format("%Y-%m-%d %H:%M").to_string(),
            Some(Err(_)) | None => String::new(),
        }
    }
}

impl fmt::Display for SavedQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SavedQuote {{ id: {}, price: {}, weight: {}, purity: {}, range: {}-{} }}",
            self.id, self.price_per_gram, self.weight_grams, self.purity,
            self.wastage_min_percent, self.wastage_max_percent)
    }
}
