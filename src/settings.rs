use crate::error::Result;
use crate::i18n::{Registry, TranslationTable, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Language used when none is asked for
    pub default_language: String,
    /// JSON translation tables merged on startup
    pub translation_files: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            translation_files: Vec::new(),
        }
    }
}

impl Settings {
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("reltime").join("settings.json"))
    }

    /// Loads the user's settings, or the defaults if there are none
    pub fn load() -> Self {
        Self::settings_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        match Self::settings_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Merges every configured translation file into `registry`, in order
    pub fn apply(&self, registry: &Registry) -> Result<()> {
        for path in &self.translation_files {
            log::debug!("Loading translations from {}", path.display());
            registry.merge(TranslationTable::from_path(path)?);
        }
        Ok(())
    }
}
