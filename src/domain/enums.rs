use std::fmt;

use serde::{Serialize, Deserialize, Serializer};
use anyhow::{Result, anyhow};

use crate::domain::constants::STORE_KEY_SUFFIX;

/// Metal variant a calculator instance prices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metal {
    Gold,
    Silver,
}

// Always serialized as the lowercase name so config files and stored keys agree
impl Serialize for Metal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl Metal {
    pub const ALL: [Metal; 2] = [Metal::Gold, Metal::Silver];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metal::Gold => "gold",
            Metal::Silver => "silver",
        }
    }

    pub fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gold" => Ok(Metal::Gold),
            "silver" => Ok(Metal::Silver),
            other => Err(anyhow!("Unknown metal: {}", other)),
        }
    }

    /// Key under which this variant's saved quotes live in the key-value store
    pub fn storage_key(&self) -> String {
        format!("{}{}", self.as_str(), STORE_KEY_SUFFIX)
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hallmark fineness code. Which codes a metal accepts, and the fraction each
/// one prices at, is decided by the metal's profile in `engine::config`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum Purity {
    #[serde(rename = "999")]
    Fine999,
    #[serde(rename = "916")]
    Fine916,
    #[serde(rename = "750")]
    Fine750,
    #[serde(rename = "585")]
    Fine585,
}

// Stored quotes carry the hallmark string, not the variant name
impl Serialize for Purity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.hallmark())
    }
}

impl Purity {
    pub fn hallmark(&self) -> &'static str {
        match self {
            Purity::Fine999 => "999",
            Purity::Fine916 => "916",
            Purity::Fine750 => "750",
            Purity::Fine585 => "585",
        }
    }

    pub fn from_hallmark(s: &str) -> Result<Self> {
        match s.trim() {
            "999" => Ok(Purity::Fine999),
            "916" => Ok(Purity::Fine916),
            "750" => Ok(Purity::Fine750),
            "585" => Ok(Purity::Fine585),
            other => Err(anyhow!("Unknown purity hallmark: {}", other)),
        }
    }

    /// Karat label jewellers use alongside the hallmark
    pub fn karat_label(&self) -> &'static str {
        match self {
            Purity::Fine999 => "24K",
            Purity::Fine916 => "22K",
            Purity::Fine750 => "18K",
            Purity::Fine585 => "14K",
        }
    }
}

impl fmt::Display for Purity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hallmark())
    }
}

/// Form fields the validator reports against
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Price,
    Weight,
    Purity,
    WastageMin,
    WastageMax,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Price => "price",
            Field::Weight => "weight",
            Field::Purity => "purity",
            Field::WastageMin => "wastageMin",
            Field::WastageMax => "wastageMax",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
