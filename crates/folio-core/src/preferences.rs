//! Persistent visitor preferences using redb.
//!
//! A flat string key-value table. Three keys are meaningful to the app:
//! - `theme`: `light` or `dark`
//! - `vantaEffect`: background effect name
//! - `portfolio_theme_config`: the customized palettes as JSON

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::effects::BackgroundEffect;
use crate::error::FolioError;
use crate::theme::{ThemeConfig, ThemeMode};

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// Database file name inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.redb";

pub const THEME_KEY: &str = "theme";
pub const EFFECT_KEY: &str = "vantaEffect";
pub const THEME_CONFIG_KEY: &str = "portfolio_theme_config";

/// Key-value preference store
#[derive(Clone)]
pub struct Preferences {
    db: Arc<RwLock<Database>>,
}

impl Preferences {
    /// Open (or create) the store at the given file path.
    ///
    /// Creates the parent directory and the table if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FolioError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "Opened preference store");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open the store under a data directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Result<Self, FolioError> {
        Self::open(dir.as_ref().join(PREFERENCES_FILE))
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Remove a key. Returns whether it was present.
    pub fn remove(&self, key: &str) -> Result<bool, FolioError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            let removed = table.remove(key)?;
            removed.is_some()
        };
        write_txn.commit()?;
        Ok(existed)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Typed accessors
    // ═══════════════════════════════════════════════════════════════════════

    /// Stored mode. Anything other than exactly `dark` reads as light.
    pub fn theme_mode(&self) -> Result<ThemeMode, FolioError> {
        Ok(match self.get(THEME_KEY)?.as_deref() {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        })
    }

    pub fn set_theme_mode(&self, mode: ThemeMode) -> Result<(), FolioError> {
        self.set(THEME_KEY, mode.as_str())
    }

    /// Stored effect, falling back to the default when absent or unknown.
    pub fn background_effect(&self) -> Result<BackgroundEffect, FolioError> {
        let Some(raw) = self.get(EFFECT_KEY)? else {
            return Ok(BackgroundEffect::default());
        };
        match raw.parse() {
            Ok(effect) => Ok(effect),
            Err(_) => {
                tracing::warn!(stored = %raw, "Ignoring unknown background effect");
                Ok(BackgroundEffect::default())
            }
        }
    }

    pub fn set_background_effect(&self, effect: BackgroundEffect) -> Result<(), FolioError> {
        self.set(EFFECT_KEY, effect.name())
    }

    /// Customized palettes, if any were saved and are still readable.
    pub fn theme_config(&self) -> Result<Option<ThemeConfig>, FolioError> {
        let Some(raw) = self.get(THEME_CONFIG_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str::<ThemeConfig>(&raw) {
            Ok(config) => Ok(Some(config)),
            Err(e) => {
                tracing::warn!(error = %e, "Stored theme config is unreadable, using defaults");
                Ok(None)
            }
        }
    }

    pub fn save_theme_config(&self, config: &ThemeConfig) -> Result<(), FolioError> {
        let json = serde_json::to_string(config)?;
        self.set(THEME_CONFIG_KEY, &json)
    }

    pub fn clear_theme_config(&self) -> Result<(), FolioError> {
        self.remove(THEME_CONFIG_KEY).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, Preferences) {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences::in_dir(dir.path()).unwrap();
        (dir, prefs)
    }

    #[test]
    fn raw_get_set_remove() {
        let (_dir, prefs) = store();
        assert_eq!(prefs.get("k").unwrap(), None);
        prefs.set("k", "v").unwrap();
        assert_eq!(prefs.get("k").unwrap().as_deref(), Some("v"));
        assert!(prefs.remove("k").unwrap());
        assert!(!prefs.remove("k").unwrap());
        assert_eq!(prefs.get("k").unwrap(), None);
    }

    #[test]
    fn mode_defaults_to_light() {
        let (_dir, prefs) = store();
        assert_eq!(prefs.theme_mode().unwrap(), ThemeMode::Light);
        prefs.set(THEME_KEY, "DARK").unwrap();
        assert_eq!(prefs.theme_mode().unwrap(), ThemeMode::Light);
        prefs.set_theme_mode(ThemeMode::Dark).unwrap();
        assert_eq!(prefs.theme_mode().unwrap(), ThemeMode::Dark);
    }

    #[test]
    fn effect_defaults_and_ignores_garbage() {
        let (_dir, prefs) = store();
        assert_eq!(prefs.background_effect().unwrap(), BackgroundEffect::Fog);
        prefs.set(EFFECT_KEY, "SPARKLES").unwrap();
        assert_eq!(prefs.background_effect().unwrap(), BackgroundEffect::Fog);
        prefs.set_background_effect(BackgroundEffect::Net).unwrap();
        assert_eq!(prefs.background_effect().unwrap(), BackgroundEffect::Net);
    }

    #[test]
    fn theme_config_roundtrip_and_clear() {
        let (_dir, prefs) = store();
        assert!(prefs.theme_config().unwrap().is_none());

        let mut config = ThemeConfig::default();
        config.dark.bg_color = "#101010".into();
        prefs.save_theme_config(&config).unwrap();
        assert_eq!(prefs.theme_config().unwrap(), Some(config));

        prefs.clear_theme_config().unwrap();
        assert!(prefs.theme_config().unwrap().is_none());
    }

    #[test]
    fn corrupt_theme_config_reads_as_absent() {
        let (_dir, prefs) = store();
        prefs.set(THEME_CONFIG_KEY, "{not json").unwrap();
        assert!(prefs.theme_config().unwrap().is_none());
    }
}
