use log::debug;

use crate::domain::constants::PERCENT_DIVISOR;
use crate::domain::model::input::PricingInput;
use crate::domain::model::priced_result::PricedResult;

/// Price every integer wastage percent in `[min, max]`, ascending.
/// The first element is always the minimum-percent baseline.
pub fn compute(input: &PricingInput) -> Vec<PricedResult> {
    let results: Vec<PricedResult> = (input.wastage_min_percent..=input.wastage_max_percent)
        .map(|percent| price_at(input, percent))
        .collect();

    debug!(
        "Swept {} {}% to {}% at {}/g x {}g: {} results",
        input.metal,
        input.wastage_min_percent,
        input.wastage_max_percent,
        input.price_per_gram,
        input.weight_grams,
        results.len()
    );

    results
}

/// Price a single wastage percent. Replay goes through here too, so a saved
/// quote's total can never drift from the live sweep.
pub fn price_at(input: &PricingInput, percent: u32) -> PricedResult {
    let purity_value = input.weight_grams * input.purity_fraction * input.price_per_gram;
    let wastage_value =
        input.weight_grams * (percent as f64 / PERCENT_DIVISOR) * input.price_per_gram;
    let total = purity_value + wastage_value;

    let effective_rate = input.effective_rate();
    let wastage_grams = if effective_rate > 0.0 {
        wastage_value / effective_rate
    } else {
        0.0
    };

    PricedResult {
        percent,
        purity_value,
        wastage_value,
        wastage_grams,
        total,
    }
}
