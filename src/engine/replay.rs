use log::debug;

use crate::domain::enums::Metal;
use crate::domain::errors::ValidationErrors;
use crate::domain::model::saved_quote::SavedQuote;
use crate::engine::sweep::price_at;
use crate::engine::validator::validate;

/// Total for a saved quote without materialising its sweep. Uses the selected
/// percent, or the range minimum when nothing was selected.
pub fn total_for(metal: Metal, quote: &SavedQuote) -> Result<f64, ValidationErrors> {
    let input = validate(metal, &quote.to_form())?;
    let percent = quote.selected_percent.unwrap_or(input.wastage_min_percent);
    let total = price_at(&input, percent).total;
    debug!("Replayed quote {} at {}%: {}", quote.id, percent, total);
    Ok(total)
}
