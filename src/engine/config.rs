/// Per-metal constants for the pricing engine
use crate::domain::enums::{Metal, Purity};

/// Everything that differs between the gold and silver calculators
#[derive(Debug, Clone, Copy)]
pub struct MetalProfile {
    pub metal: Metal,
    /// Accepted purities and the fraction each prices at
    pub purities: &'static [(Purity, f64)],
    pub default_purity: Purity,
    /// Default inclusive wastage band (min, max)
    pub default_wastage: (u32, u32),
}

impl MetalProfile {
    pub fn purity_fraction(&self, purity: Purity) -> Option<f64> {
        self.purities
            .iter()
            .find(|(p, _)| *p == purity)
            .map(|(_, fraction)| *fraction)
    }

    pub fn supports(&self, purity: Purity) -> bool {
        self.purity_fraction(purity).is_some()
    }
}

// Fractions are the fineness rounded to two decimals
pub const GOLD_PURITIES: &[(Purity, f64)] = &[
    (Purity::Fine999, 1.0),
    (Purity::Fine916, 0.92),
    (Purity::Fine750, 0.75),
    (Purity::Fine585, 0.59),
];

pub const SILVER_PURITIES: &[(Purity, f64)] = &[
    (Purity::Fine999, 1.0),
];

pub const GOLD: MetalProfile = MetalProfile {
    metal: Metal::Gold,
    purities: GOLD_PURITIES,
    default_purity: Purity::Fine916,
    default_wastage: (8, 14),
};

pub const SILVER: MetalProfile = MetalProfile {
    metal: Metal::Silver,
    purities: SILVER_PURITIES,
    default_purity: Purity::Fine999,
    default_wastage: (8, 15),
};

pub fn profile(metal: Metal) -> &'static MetalProfile {
    match metal {
        Metal::Gold => &GOLD,
        Metal::Silver => &SILVER,
    }
}
