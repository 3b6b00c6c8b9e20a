use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use apricot_ipc::Settings;

/// Persists [`Settings`] as JSON. A store without a path keeps settings in
/// memory only.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    path: Option<PathBuf>,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// `~/.config/apricot/settings.json`
    pub fn from_home() -> Self {
        dirs::home_dir()
            .map(|home| Self::new(home.join(".config").join("apricot").join("settings.json")))
            .unwrap_or_default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read stored settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings> {
        let Some(path) = &self.path else {
            return Ok(Settings::default());
        };
        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(settings)
    }

    /// Like [`load`](Self::load), but falls back to the defaults on error.
    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Using default settings: {:#}", e);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }
}
