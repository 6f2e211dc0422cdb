//! Application settings persistence
//!
//! Handles saving and loading user preferences. Page state (scroll
//! position, reveals, form fields) is deliberately not persisted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    pub display: DisplaySettings,
}

/// Display-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode theme
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    /// Suspend the frame subscription; reveals and fills still apply,
    /// just without interpolation frames
    #[serde(default)]
    pub reduce_motion: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplaySettings::default(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            reduce_motion: false,
        }
    }
}

impl Settings {
    /// Default settings file path under the platform config directory
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("io", "pixelfolio", "Pixelfolio")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the default file, falling back to defaults
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save settings to the default file
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::file_path()
            .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;
        self.save_to_file(&path)
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_dark_with_motion() {
        let settings = Settings::default();
        assert!(settings.display.dark_mode);
        assert!(!settings.display.reduce_motion);
    }

    #[test]
    fn roundtrip_through_file() {
        let dir = std::env::temp_dir().join("pixelfolio-settings-test");
        let path = dir.join("settings.json");

        let mut settings = Settings::default();
        settings.display.dark_mode = false;
        settings.display.reduce_motion = true;
        settings.save_to_file(&path).expect("save");

        let loaded = Settings::load_from_file(&path).expect("load");
        assert!(!loaded.display.dark_mode);
        assert!(loaded.display.reduce_motion);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_fields_fall_back() {
        let loaded: Settings = serde_json::from_str(r#"{"display":{}}"#).expect("parse");
        assert!(loaded.display.dark_mode);
        assert!(!loaded.display.reduce_motion);
    }
}
