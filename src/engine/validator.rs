use log::debug;

use crate::domain::constants::{MAX_WASTAGE_PERCENT, PERCENT_DIVISOR};
use crate::domain::enums::{Field, Metal};
use crate::domain::errors::{FieldError, ValidationErrors};
use crate::domain::model::input::{PricingInput, QuoteForm};
use crate::engine::config::profile;

/// Validate raw form text for `metal`. Every rule is evaluated and all failures
/// are reported together; nothing is computed unless the result is `Ok`.
pub fn validate(metal: Metal, form: &QuoteForm) -> Result<PricingInput, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let price = parse_positive(&form.price);
    if price.is_none() {
        errors.insert(Field::Price, FieldError::InvalidPrice);
    }

    let weight = parse_positive(&form.weight);
    if weight.is_none() {
        errors.insert(Field::Weight, FieldError::InvalidWeight);
    }

    let purity_fraction = profile(metal).purity_fraction(form.purity);
    if purity_fraction.is_none() {
        errors.insert(Field::Purity, FieldError::InvalidPurity { metal, purity: form.purity });
    }

    let min = parse_percent(&form.wastage_min);
    if min.is_none() {
        errors.insert(Field::WastageMin, FieldError::InvalidPercent);
    }

    let max = parse_percent(&form.wastage_max);
    if max.is_none() {
        errors.insert(Field::WastageMax, FieldError::InvalidPercent);
    }

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            errors.insert(Field::WastageMax, FieldError::RangeInverted);
        }
    }

    // Each number can be finite while their product is not (1e200 x 1e200)
    if let (Some(price), Some(weight), Some(fraction)) = (price, weight, purity_fraction) {
        let top_percent = max.or(min).unwrap_or(0);
        if !prices_finitely(price, weight, fraction, top_percent) {
            errors.insert(Field::Price, FieldError::InvalidPrice);
            errors.insert(Field::Weight, FieldError::InvalidWeight);
        }
    }

    match (price, weight, purity_fraction, min, max) {
        (Some(price_per_gram), Some(weight_grams), Some(purity_fraction), Some(min), Some(max))
            if errors.is_empty() =>
        {
            Ok(PricingInput {
                metal,
                price_per_gram,
                weight_grams,
                purity: form.purity,
                purity_fraction,
                wastage_min_percent: min,
                wastage_max_percent: max,
            })
        }
        _ => {
            debug!("Rejected {} form: {}", metal, errors);
            Err(errors)
        }
    }
}

/// Finite real strictly above zero
fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Whole number from 0 to `MAX_WASTAGE_PERCENT`
fn parse_percent(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|p| *p <= MAX_WASTAGE_PERCENT)
}

/// Every figure the sweep derives stays finite up to `percent`.
/// Wastage only grows with the percent, so the top of the range bounds the rest.
fn prices_finitely(price: f64, weight: f64, fraction: f64, percent: u32) -> bool {
    let purity_value = weight * fraction * price;
    let wastage_value = weight * (percent as f64 / PERCENT_DIVISOR) * price;
    let effective_rate = price * fraction;
    let wastage_grams = if effective_rate > 0.0 { wastage_value / effective_rate } else { 0.0 };

    [purity_value, wastage_value, purity_value + wastage_value, wastage_grams]
        .iter()
        .all(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::Purity;

    fn form(price: &str, weight: &str, min: &str, max: &str) -> QuoteForm {
        QuoteForm::new(price, weight, Purity::Fine916, min, max)
    }

    #[test]
    fn test_valid_form_produces_input() {
        let input = validate(Metal::Gold, &form(" 7200 ", "10.5", "8", "14")).unwrap();
        assert_eq!(input.price_per_gram, 7200.0);
        assert_eq!(input.weight_grams, 10.5);
        assert_eq!(input.purity_fraction, 0.92);
        assert_eq!(input.wastage_min_percent, 8);
        assert_eq!(input.wastage_max_percent, 14);
    }

    #[test]
    fn test_errors_accumulate_across_fields() {
        let errors = validate(Metal::Gold, &form("", "-3", "x", "1.5")).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Price), Some(&FieldError::InvalidPrice));
        assert_eq!(errors.get(Field::Weight), Some(&FieldError::InvalidWeight));
        assert_eq!(errors.get(Field::WastageMin), Some(&FieldError::InvalidPercent));
        assert_eq!(errors.get(Field::WastageMax), Some(&FieldError::InvalidPercent));
    }

    #[test]
    fn test_range_inverted_flags_max_even_with_bad_price() {
        let errors = validate(Metal::Gold, &form("0", "10", "15", "8")).unwrap_err();
        assert_eq!(errors.get(Field::WastageMax), Some(&FieldError::RangeInverted));
        assert_eq!(errors.get(Field::WastageMin), None);
        assert_eq!(errors.get(Field::Price), Some(&FieldError::InvalidPrice));
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        let errors = validate(Metal::Gold, &form("NaN", "inf", "0", "0")).unwrap_err();
        assert!(errors.get(Field::Price).is_some());
        assert!(errors.get(Field::Weight).is_some());
    }

    #[test]
    fn test_negative_percent_is_invalid() {
        let errors = validate(Metal::Gold, &form("7200", "10", "-1", "14")).unwrap_err();
        assert_eq!(errors.get(Field::WastageMin), Some(&FieldError::InvalidPercent));
    }

    #[test]
    fn test_purity_must_belong_to_metal() {
        let errors = validate(Metal::Silver, &form("85", "50", "8", "15")).unwrap_err();
        assert_eq!(
            errors.get(Field::Purity),
            Some(&FieldError::InvalidPurity { metal: Metal::Silver, purity: Purity::Fine916 })
        );
    }

    #[test]
    fn test_overflowing_product_is_rejected() {
        let errors = validate(Metal::Gold, &form("1e200", "1e200", "8", "14")).unwrap_err();
        assert_eq!(errors.get(Field::Price), Some(&FieldError::InvalidPrice));
        assert_eq!(errors.get(Field::Weight), Some(&FieldError::InvalidWeight));
        assert_eq!(errors.get(Field::WastageMax), None);
    }

    #[test]
    fn test_wastage_overflow_alone_is_rejected() {
        // Metal value and making charge each fit in an f64; their sum does not
        let errors = validate(Metal::Gold, &form("1e154", "1e154", "100", "100")).unwrap_err();
        assert_eq!(errors.get(Field::Price), Some(&FieldError::InvalidPrice));
    }

    #[test]
    fn test_percent_above_cap_is_invalid() {
        let errors = validate(Metal::Gold, &form("7200", "10", "0", "4294967295")).unwrap_err();
        assert_eq!(errors.get(Field::WastageMax), Some(&FieldError::InvalidPercent));

        let errors = validate(Metal::Gold, &form("7200", "10", "101", "101")).unwrap_err();
        assert_eq!(errors.get(Field::WastageMin), Some(&FieldError::InvalidPercent));

        let input = validate(Metal::Gold, &form("7200", "10", "0", "100")).unwrap();
        assert_eq!(input.sweep_len(), 101);
    }

    #[test]
    fn test_equal_bounds_are_allowed() {
        let input = validate(Metal::Gold, &form("7200", "10", "0", "0")).unwrap();
        assert_eq!(input.sweep_len(), 1);
    }
}
