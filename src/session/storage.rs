//! Persistent key/value storage for the session
//!
//! Storage works like browser local storage: string values under string
//! keys. Writes and removals take several keys at once so the credential and
//! profile land in (or leave) the backing document together.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::write_private;
use crate::error::{Result, SessionError};

/// Key holding the bearer credential
pub const STORAGE_KEY_CREDENTIAL: &str = "access_token";

/// Key holding the serialized principal
pub const STORAGE_KEY_PRINCIPAL: &str = "customer";

/// Backing store for persisted session values
pub trait SessionStorage: Send {
    /// Read a single value.
    ///
    /// Returns `SessionError::Corrupt` when the backing document cannot be parsed.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write all entries in one transaction.
    fn write_all(&mut self, entries: &[(&str, &str)]) -> Result<()>;

    /// Remove all keys in one transaction. Missing keys are not an error.
    fn remove_all(&mut self, keys: &[&str]) -> Result<()>;

    /// Human-readable location, for status output
    fn location(&self) -> String;
}

type Document = BTreeMap<String, String>;

/// YAML document on disk, rewritten whole on every change
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Document> {
        if !self.path.exists() {
            return Ok(Document::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Document::new());
        }

        serde_yaml::from_str(&contents).map_err(|e| SessionError::Corrupt(e.to_string()).into())
    }

    /// Current document, or an empty one if the existing file is unreadable.
    /// Used by writers, which replace whatever was there.
    fn load_for_write(&self) -> Document {
        match self.load() {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!(
                    "Discarding unreadable session file {}: {}",
                    self.path.display(),
                    e
                );
                Document::new()
            }
        }
    }

    fn store(&self, doc: &Document) -> Result<()> {
        if doc.is_empty() {
            if self.path.exists() {
                std::fs::remove_file(&self.path)?;
            }
            return Ok(());
        }

        let contents =
            serde_yaml::to_string(doc).map_err(|e| SessionError::Storage(e.to_string()))?;
        write_private(&self.path, &contents)
    }
}

impl SessionStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn write_all(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        let mut doc = self.load_for_write();
        for (key, value) in entries {
            doc.insert((*key).to_string(), (*value).to_string());
        }
        self.store(&doc)
    }

    fn remove_all(&mut self, keys: &[&str]) -> Result<()> {
        let mut doc = self.load_for_write();
        for key in keys {
            doc.remove(*key);
        }
        self.store(&doc)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory storage for tests
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: std::sync::Arc<std::sync::Mutex<Document>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly, bypassing the paired-write discipline
    pub fn seed(self, key: &str, value: &str) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn write_all(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        let mut doc = self.entries.lock().unwrap();
        for (key, value) in entries {
            doc.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }

    fn remove_all(&mut self, keys: &[&str]) -> Result<()> {
        let mut doc = self.entries.lock().unwrap();
        for key in keys {
            doc.remove(*key);
        }
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
