//! Translatable tool text
//!
//! Tool descriptions shown to MCP clients can be overridden per deployment,
//! either through environment variables or through a JSON file of
//! `KEY: text` pairs. Every key looked up is remembered so the full set can
//! be written back out as a starting point for a translation file.

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Json};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, warn};

use crate::config::TranslationSettings;

/// Thread-safe map of translation keys, normalized to upper case
#[derive(Debug, Default)]
pub struct TranslationStore {
    keys: RwLock<HashMap<String, String>>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import_key(&self, key: &str, value: impl Into<String>) {
        self.write().insert(key.to_uppercase(), value.into());
    }

    pub fn export_key(&self, key: &str) -> Option<String> {
        self.read().get(&key.to_uppercase()).cloned()
    }

    pub fn import_map<I, K, V>(&self, translations: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut keys = self.write();
        for (key, value) in translations {
            keys.insert(key.as_ref().to_uppercase(), value.into());
        }
    }

    /// Copy of every key and value
    pub fn export_map(&self) -> HashMap<String, String> {
        self.read().clone()
    }

    /// Merge the keys of a JSON object of strings into the store
    pub fn import_from_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("error reading file {}", path.display()))?;
        let translations: HashMap<String, String> =
            serde_json::from_str(&data).context("error parsing JSON")?;

        self.import_map(translations);
        Ok(())
    }

    /// Write every key as pretty JSON, sorted by key
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let sorted: BTreeMap<String, String> = self.export_map().into_iter().collect();
        let data =
            serde_json::to_string_pretty(&sorted).context("error marshaling map to JSON")?;

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options
            .open(path)
            .with_context(|| format!("error writing file {}", path.display()))?;
        file.write_all(data.as_bytes())
            .with_context(|| format!("error writing file {}", path.display()))?;

        Ok(())
    }

    pub fn delete_key(&self, key: &str) {
        self.write().remove(&key.to_uppercase());
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, String>> {
        self.keys.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, String>> {
        self.keys.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Translation that always falls back to the built-in text
pub fn null_translation(_key: &str, default: &str) -> String {
    default.to_string()
}

/// Resolves translatable text from the environment, the override file and
/// built-in defaults, in that order
#[derive(Debug)]
pub struct TranslationHelper {
    file: PathBuf,
    env_prefix: String,
    overrides: HashMap<String, String>,
    resolved: TranslationStore,
}

impl TranslationHelper {
    /// Load overrides from `file` if it exists
    pub fn load(file: impl Into<PathBuf>, env_prefix: impl Into<String>) -> Self {
        let file = file.into();
        let overrides = if file.exists() {
            match Figment::from(Json::file_exact(&file)).extract::<HashMap<String, String>>() {
                Ok(map) => {
                    debug!(path = %file.display(), keys = map.len(), "loaded translation overrides");
                    map.into_iter().map(|(k, v)| (k.to_uppercase(), v)).collect()
                }
                Err(e) => {
                    warn!(path = %file.display(), error = %e, "could not read translations");
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        Self {
            file,
            env_prefix: env_prefix.into(),
            overrides,
            resolved: TranslationStore::new(),
        }
    }

    pub fn from_settings(settings: &TranslationSettings) -> Self {
        Self::load(&settings.file, settings.env_prefix.as_str())
    }

    /// Helper with no overrides, every key resolves to its default unless set in the environment
    pub fn empty(env_prefix: impl Into<String>) -> Self {
        Self {
            file: PathBuf::new(),
            env_prefix: env_prefix.into(),
            overrides: HashMap::new(),
            resolved: TranslationStore::new(),
        }
    }

    pub fn translate(&self, key: &str, default: &str) -> String {
        let key = key.to_uppercase();

        if let Some(value) = self.resolved.export_key(&key) {
            return value;
        }

        let value = Env::var(&format!("{}{}", self.env_prefix, key))
            .or_else(|| self.overrides.get(&key).cloned())
            .unwrap_or_else(|| default.to_string());

        self.resolved.import_key(&key, value.as_str());
        value
    }

    /// Write every key resolved so far to the translation file
    pub fn dump(&self) -> Result<()> {
        self.resolved
            .export_to_file(&self.file)
            .with_context(|| format!("failed to dump translations to {}", self.file.display()))
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn resolved(&self) -> &TranslationStore {
        &self.resolved
    }
}
