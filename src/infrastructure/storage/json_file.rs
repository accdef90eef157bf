use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::traits::KeyValueStore;

/// Key-value backend persisted as one JSON object file (key → string value).
/// Read once on open, written through on every change.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file starts empty; an unreadable or
    /// corrupt file is logged and also starts empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();

        let entries = if !path.exists() {
            debug!("No store file at {}, starting empty", path.display());
            BTreeMap::new()
        } else {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                    Ok(entries) => {
                        info!("Loaded {} keys from {}", entries.len(), path.display());
                        entries
                    }
                    Err(e) => {
                        warn!("Ignoring corrupt store file {}: {}", path.display(), e);
                        BTreeMap::new()
                    }
                },
                Err(e) => {
                    warn!("Failed to read store file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            }
        };

        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| anyhow!("Failed to create directory '{}': {}", parent.display(), e))?;
            }
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)
            .map_err(|e| anyhow!("Failed to write store file '{}': {}", self.path.display(), e))?;

        debug!("Wrote {} keys to {}", self.entries.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
