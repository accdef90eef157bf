use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::domain::constants::MAX_WASTAGE_PERCENT;
use crate::domain::enums::{Field, Metal, Purity};

/// A single field-scoped validation failure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Price per gram must be a number greater than 0")]
    InvalidPrice,

    #[error("Weight must be a number greater than 0")]
    InvalidWeight,

    #[error("Purity {purity} is not offered for {metal}")]
    InvalidPurity { metal: Metal, purity: Purity },

    #[error("Wastage percent must be a whole number from 0 to {max}", max = MAX_WASTAGE_PERCENT)]
    InvalidPercent,

    #[error("Maximum wastage must not be below the minimum")]
    RangeInverted,
}

/// Every field that failed validation, at most one error per field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Field, &FieldError)> {
        self.errors.iter()
    }

    /// Field name → human readable message, as the form layer displays them
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|(field, error)| (field.as_str(), error.to_string()))
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error))
            .collect();
        write!(f, "invalid quote input ({})", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Selection can only point at a percent present in the last sweep
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("No computed result at {0}% wastage")]
    NotInResults(u32),
}

/// Quote store failures. Reads never fail; only saves and backend writes do.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage backend error: {0}")]
    Backend(anyhow::Error),

    #[error("Cannot save a {quote} quote into the {store} store")]
    MetalMismatch { quote: Metal, store: Metal },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_keyed_by_field_name() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Price, FieldError::InvalidPrice);
        errors.insert(Field::WastageMax, FieldError::RangeInverted);

        let messages = errors.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages.get("wastageMax").map(String::as_str),
            Some("Maximum wastage must not be below the minimum")
        );
        assert!(messages.contains_key("price"));
    }

    #[test]
    fn test_later_error_replaces_earlier_on_same_field() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::WastageMax, FieldError::InvalidPercent);
        errors.insert(Field::WastageMax, FieldError::RangeInverted);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::WastageMax), Some(&FieldError::RangeInverted));
    }
}
