use std::collections::{HashSet, VecDeque};

use log::{debug, info, warn};
use uuid::Uuid;

use crate::domain::constants::STORE_CAPACITY;
use crate::domain::enums::Metal;
use crate::domain::errors::StoreError;
use crate::domain::model::input::QuoteForm;
use crate::domain::model::saved_quote::SavedQuote;
use crate::domain::traits::KeyValueStore;
use crate::engine::validator::validate;

/// Most-recent-first history of saved quotes for one metal, capped at
/// `STORE_CAPACITY`. Sole owner of its key in the backend.
pub struct QuoteStore<S: KeyValueStore> {
    metal: Metal,
    key: String,
    backend: S,
    entries: VecDeque<SavedQuote>,
}

impl<S: KeyValueStore> QuoteStore<S> {
    /// Load the history for `metal`. Never fails: a missing, unreadable or
    /// corrupt value is treated as an empty history.
    pub fn new(metal: Metal, backend: S) -> Self {
        let key = metal.storage_key();
        let entries = Self::load(&key, &backend);
        debug!("Opened {} quote store with {} entries", metal, entries.len());

        Self { metal, key, backend, entries }
    }

    fn load(key: &str, backend: &S) -> VecDeque<SavedQuote> {
        let raw = match backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return VecDeque::new(),
            Err(e) => {
                warn!("Failed to read {}: {}", key, e);
                return VecDeque::new();
            }
        };

        let quotes: Vec<SavedQuote> = match serde_json::from_str(&raw) {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!("Discarding corrupt saved quotes under {}: {}", key, e);
                return VecDeque::new();
            }
        };

        let mut seen = HashSet::new();
        let mut entries: VecDeque<SavedQuote> = quotes
            .into_iter()
            .filter(|q| {
                let fresh = seen.insert(q.id.clone());
                if !fresh {
                    warn!("Dropping duplicate saved quote id {}", q.id);
                }
                fresh
            })
            .collect();
        entries.truncate(STORE_CAPACITY);
        entries
    }

    pub fn metal(&self) -> Metal {
        self.metal
    }

    /// Save a snapshot of `form`. The form must validate; its raw text is
    /// stored as entered. Evicts the oldest entry beyond capacity.
    pub fn save(&mut self, form: &QuoteForm, selected_percent: Option<u32>) -> Result<SavedQuote, StoreError> {
        validate(self.metal, form)?;

        let mut quote = SavedQuote::from_form(form, selected_percent);
        while self.entries.iter().any(|q| q.id == quote.id) {
            quote.id = Uuid::new_v4().to_string();
        }

        let mut next = self.entries.clone();
        next.push_front(quote.clone());
        if next.len() > STORE_CAPACITY {
            for evicted in next.drain(STORE_CAPACITY..) {
                warn!("Evicting oldest saved {} quote {}", self.metal, evicted.id);
            }
        }

        self.persist(&next)?;
        self.entries = next;
        info!("Saved {} quote {} ({} stored)", self.metal, quote.id, self.entries.len());
        Ok(quote)
    }

    /// Saved quotes, most recent first
    pub fn list(&self) -> Vec<SavedQuote> {
        self.entries.iter().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<&SavedQuote> {
        self.entries.iter().find(|q| q.id == id)
    }

    /// Remove the quote with `id`. Returns whether anything was removed; an
    /// unknown id leaves the store untouched.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(index) = self.entries.iter().position(|q| q.id == id) else {
            debug!("Delete of unknown {} quote {} ignored", self.metal, id);
            return Ok(false);
        };

        let mut next = self.entries.clone();
        next.remove(index);
        self.persist(&next)?;
        self.entries = next;
        info!("Deleted {} quote {}", self.metal, id);
        Ok(true)
    }

    /// Drop the whole history for this metal
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.backend.remove(&self.key).map_err(StoreError::Backend)?;
        self.entries.clear();
        info!("Cleared saved {} quotes", self.metal);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn persist(&mut self, entries: &VecDeque<SavedQuote>) -> Result<(), StoreError> {
        let value = serde_json::to_string(entries)?;
        self.backend.set(&self.key, value).map_err(StoreError::Backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::Purity;
    use crate::infrastructure::storage::MemoryStore;
    use anyhow::{anyhow, Result};

    fn gold_form(price: &str) -> QuoteForm {
        QuoteForm::new(price, "10", Purity::Fine916, "8", "14")
    }

    /// Backend whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }
        fn set(&mut self, _key: &str, _value: String) -> Result<()> {
            Err(anyhow!("read-only"))
        }
        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(anyhow!("read-only"))
        }
    }

    #[test]
    fn test_invalid_form_is_not_saved() {
        let mut store = QuoteStore::new(Metal::Gold, MemoryStore::new());
        let result = store.save(&gold_form("abc"), None);
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_write_leaves_history_unchanged() {
        let mut store = QuoteStore::new(Metal::Gold, ReadOnlyStore);
        let result = store.save(&gold_form("7200"), None);
        assert!(matches!(result, Err(StoreError::Backend(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_ids_in_backend_are_collapsed() -> Result<()> {
        let mut backend = MemoryStore::new();
        let form = gold_form("7200");
        let quote = SavedQuote::from_form(&form, None);
        backend.set(&Metal::Gold.storage_key(), serde_json::to_string(&vec![quote.clone(), quote])?)?;

        let store = QuoteStore::new(Metal::Gold, backend);
        assert_eq!(store.len(), 1);
        Ok(())
    }

    #[test]
    fn test_clear_removes_backend_key() -> Result<()> {
        let mut store = QuoteStore::new(Metal::Gold, MemoryStore::new());
        store.save(&gold_form("7200"), Some(9))?;
        store.clear()?;

        assert!(store.is_empty());
        assert_eq!(store.backend().get(&Metal::Gold.storage_key())?, None);
        Ok(())
    }
}
