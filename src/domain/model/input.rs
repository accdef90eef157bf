// Domain model for calculator input: the raw form text and its validated form
use serde::{Serialize, Deserialize};

use crate::domain::enums::{Metal, Purity};
use crate::engine::config::profile;

/// Raw text values exactly as entered. Saved quotes capture these, not parsed numbers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteForm {
    pub price: String,
    pub weight: String,
    pub purity: Purity,
    pub wastage_min: String,
    pub wastage_max: String,
}

impl QuoteForm {
    pub fn new(
        price: impl Into<String>,
        weight: impl Into<String>,
        purity: Purity,
        wastage_min: impl Into<String>,
        wastage_max: impl Into<String>,
    ) -> Self {
        Self {
            price: price.into(),
            weight: weight.into(),
            purity,
            wastage_min: wastage_min.into(),
            wastage_max: wastage_max.into(),
        }
    }

    /// Empty price/weight with the metal's default purity and wastage band
    pub fn with_defaults(metal: Metal) -> Self {
        let profile = profile(metal);
        Self::new(
            "",
            "",
            profile.default_purity,
            profile.default_wastage.0.to_string(),
            profile.default_wastage.1.to_string(),
        )
    }
}

/// Validated pricing parameters. Only the validator builds these, so every
/// numeric field is finite and the range is ordered.
#[derive(Clone, Debug, PartialEq)]
pub struct PricingInput {
    pub metal: Metal,
    pub price_per_gram: f64,
    pub weight_grams: f64,
    pub purity: Purity,
    /// Fraction of pure metal the purity prices at (916 → 0.92)
    pub purity_fraction: f64,
    pub wastage_min_percent: u32,
    pub wastage_max_percent: u32,
}

impl PricingInput {
    /// Number of integer percentage points in the wastage band
    pub fn sweep_len(&self) -> usize {
        (self.wastage_max_percent - self.wastage_min_percent) as usize + 1
    }

    /// Purity-adjusted price of one gram
    pub fn effective_rate(&self) -> f64 {
        self.price_per_gram * self.purity_fraction
    }
}
