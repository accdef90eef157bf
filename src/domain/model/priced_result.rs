use std::fmt;
use serde::{Serialize, Deserialize};

/// Priced outcome at one integer wastage percent
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedResult {
    /// Wastage percent this row was priced at
    pub percent: u32,

    /// Value of the pure metal content; identical for every row of one sweep
    pub purity_value: f64,

    /// Making charge at `percent`
    pub wastage_value: f64,

    /// Making charge expressed as grams at the purity-adjusted rate
    pub wastage_grams: f64,

    /// `purity_value + wastage_value`, unrounded
    pub total: f64,
}

impl fmt::Display for PricedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PricedResult {{ percent: {}, purity: {}, wastage: {}, total: {} }}",
            self.percent, self.purity_value, self.wastage_value, self.total)
    }
}
