// Display formatting. Currency goes through rusty_money's INR definition, whose
// en-IN locale gives the ₹ symbol and lakh/crore grouping (12,34,567.89).
use rusty_money::{iso, Money};

use crate::domain::constants::GRAMS_DECIMALS;

/// Money value in en-IN currency style with exactly two decimals
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}{}", iso::INR.symbol, value);
    }
    Money::from_minor(to_minor_units(value), iso::INR).to_string()
}

/// Rupees → paise, rounded half away from zero
fn to_minor_units(value: f64) -> i64 {
    let scale = 10f64.powi(iso::INR.exponent as i32);
    (value * scale).round() as i64
}

/// Mass in grams, three decimals
pub fn format_grams(value: f64) -> String {
    format!("{:.*} g", GRAMS_DECIMALS, value)
}
