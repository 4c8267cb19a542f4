//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::KeyBindings;
use super::carousel::{
    CarouselConfig, DEFAULT_AUTO_ADVANCE_INTERVAL, DEFAULT_SWIPE_THRESHOLD,
    DEFAULT_TRANSITION_DURATION,
};
use super::listing::{DEFAULT_ROTATION_INTERVAL, DEFAULT_SHOPS_PER_PAGE};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Hero slider timing
    pub carousel: CarouselSettings,
    /// Shop listing paging and category rotation
    pub listing: ListingSettings,
    /// Custom keybindings
    pub keybindings: KeyBindings,
}

/// Display-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Interface language code ("en", "es", "hi")
    pub language: String,
}

/// Hero slider settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Delay between automatic advances in milliseconds
    pub auto_advance_interval_ms: u64,
    /// Transition animation length in milliseconds
    pub transition_duration_ms: u64,
    /// Minimum swipe distance in logical pixels
    pub swipe_threshold: f32,
}

/// Shop listing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSettings {
    pub shops_per_page: usize,
    /// Cycle the category filter until the user picks one
    pub rotate_categories: bool,
    pub rotation_interval_ms: u64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: "en".to_string(),
        }
    }
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            auto_advance_interval_ms: DEFAULT_AUTO_ADVANCE_INTERVAL.as_millis() as u64,
            transition_duration_ms: DEFAULT_TRANSITION_DURATION.as_millis() as u64,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            shops_per_page: DEFAULT_SHOPS_PER_PAGE,
            rotate_categories: true,
            rotation_interval_ms: DEFAULT_ROTATION_INTERVAL.as_millis() as u64,
        }
    }
}

impl ListingSettings {
    /// Rotation period; `None` when rotation is off or the interval is zero
    pub fn rotation_interval(&self) -> Option<Duration> {
        (self.rotate_categories && self.rotation_interval_ms > 0)
            .then(|| Duration::from_millis(self.rotation_interval_ms))
    }
}

impl CarouselSettings {
    /// Build the carousel configuration these settings describe
    pub fn to_config(&self) -> CarouselConfig {
        CarouselConfig {
            auto_advance_interval: Duration::from_millis(self.auto_advance_interval_ms),
            transition_duration: Duration::from_millis(self.transition_duration_ms),
            swipe_threshold: self.swipe_threshold.max(0.0),
        }
    }
}

/// Platform config directory for bazaar
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "bazaar", "Bazaar").map(|dirs| dirs.config_dir().into())
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    if path.exists() {
                        tracing::warn!("Failed to load settings from {:?}: {}", path, e);
                    }
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_carousel_defaults() {
        let config = Settings::default().carousel.to_config();
        assert_eq!(config, CarouselConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.display.dark_mode = true;
        settings.display.language = "hi".to_string();
        settings.carousel.auto_advance_interval_ms = 8000;
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert!(loaded.display.dark_mode);
        assert_eq!(loaded.display.language, "hi");
        assert_eq!(
            loaded.carousel.to_config().auto_advance_interval,
            Duration::from_secs(8)
        );
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"carousel": {"transition_duration_ms": 250}}"#).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.carousel.transition_duration_ms, 250);
        assert_eq!(
            loaded.carousel.auto_advance_interval_ms,
            DEFAULT_AUTO_ADVANCE_INTERVAL.as_millis() as u64
        );
        assert_eq!(loaded.display.language, "en");
    }

    #[test]
    fn zero_rotation_interval_disables_rotation() {
        let listing = ListingSettings {
            rotation_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(listing.rotation_interval(), None);
        assert_eq!(
            ListingSettings::default().rotation_interval(),
            Some(DEFAULT_ROTATION_INTERVAL)
        );
    }

    #[test]
    fn listing_settings_survive_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"listing": {"rotate_categories": false}}"#).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert!(!loaded.listing.rotate_categories);
        assert_eq!(loaded.listing.shops_per_page, DEFAULT_SHOPS_PER_PAGE);
        assert_eq!(loaded.listing.rotation_interval(), None);
    }

    #[test]
    fn negative_threshold_clamped() {
        let settings = CarouselSettings {
            swipe_threshold: -10.0,
            ..Default::default()
        };
        assert_eq!(settings.to_config().swipe_threshold, 0.0);
    }
}
