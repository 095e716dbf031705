//! Application settings
//!
//! Layout rows, the visibility tracking band, smooth-scroll timing and the receipt
//! directory. Loaded from a JSON file passed with `--config`; every key is optional.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::EstimatorError;
use crate::navigator::{StepNavigator, TrackBand};

/// Sticky chrome heights, in terminal rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Title bar at the top of the screen
    pub header_rows: u16,
    /// Step indicator below the title bar
    pub stepper_rows: u16,
    /// Extra rows left above a section after jumping to it
    pub jump_padding_rows: u16,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            header_rows: 3,
            stepper_rows: 3,
            jump_padding_rows: 0,
        }
    }
}

impl LayoutSettings {
    /// Rows the document is shifted by (header plus stepper)
    pub fn fixed_rows(&self) -> u16 {
        self.header_rows.saturating_add(self.stepper_rows)
    }
}

/// Tracking band of the visibility observer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilitySettings {
    pub top_margin_rows: u16,
    pub bottom_fraction: f64,
    pub threshold: f64,
}

impl Default for VisibilitySettings {
    fn default() -> Self {
        Self {
            top_margin_rows: 6,
            bottom_fraction: 0.5,
            threshold: 0.1,
        }
    }
}

/// Smooth scroll timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub frames: u32,
    pub tick_ms: u64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            frames: 6,
            tick_ms: 16,
        }
    }
}

impl AnimationSettings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// All application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub layout: LayoutSettings,
    pub visibility: VisibilitySettings,
    pub animation: AnimationSettings,
    /// Directory receipts are written to; the current directory when unset
    pub receipt_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path.as_ref()))?;

        let settings: Self =
            serde_json::from_str(&content).context("Failed to parse settings JSON")?;

        settings
            .validate()
            .with_context(|| format!("Invalid settings in {:?}", path.as_ref()))?;
        Ok(settings)
    }

    /// Load settings from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Save settings to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize settings to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write settings to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> crate::error::Result<()> {
        let bottom = self.visibility.bottom_fraction;
        if !(0.0..1.0).contains(&bottom) {
            return Err(EstimatorError::config(format!(
                "visibility.bottom_fraction must be in [0, 1) (got {})",
                bottom
            )));
        }

        let threshold = self.visibility.threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(EstimatorError::config(format!(
                "visibility.threshold must be in (0, 1] (got {})",
                threshold
            )));
        }

        if self.animation.frames == 0 {
            return Err(EstimatorError::config("animation.frames must be at least 1"));
        }

        Ok(())
    }

    /// Directory receipts are written to
    pub fn receipt_dir(&self) -> PathBuf {
        self.receipt_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn track_band(&self) -> TrackBand {
        TrackBand {
            top_margin: u32::from(self.visibility.top_margin_rows),
            bottom_fraction: self.visibility.bottom_fraction,
            threshold: self.visibility.threshold,
        }
    }

    /// Navigator configured with these settings
    pub fn navigator(&self) -> StepNavigator {
        StepNavigator::new(
            u32::from(self.layout.fixed_rows()),
            u32::from(self.layout.jump_padding_rows),
            self.track_band(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.layout.fixed_rows(), 6);
        assert_eq!(settings.animation.frames, 6);
        assert!(settings.validate().is_ok());
        assert_eq!(settings.receipt_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_partial_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{ "layout": { "jump_padding_rows": 2 }, "receipt_dir": "/tmp/r" }"#)
            .unwrap();
        temp_file.flush().unwrap();

        let settings = Settings::load_from_file(temp_file.path()).unwrap();
        assert_eq!(settings.layout.header_rows, 3);
        assert_eq!(settings.layout.jump_padding_rows, 2);
        assert_eq!(settings.receipt_dir(), PathBuf::from("/tmp/r"));
    }

    #[test]
    fn test_rejects_bad_bottom_fraction() {
        let mut settings = Settings::default();
        settings.visibility.bottom_fraction = 1.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_threshold() {
        let mut settings = Settings::default();
        settings.visibility.threshold = 0.0;
        assert!(settings.validate().is_err());
        settings.visibility.threshold = 1.0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_frames() {
        let mut settings = Settings::default();
        settings.animation.frames = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_or_default_without_path() {
        let settings = Settings::load_or_default(None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let mut settings = Settings::default();
        settings.animation.tick_ms = 30;
        let temp_file = NamedTempFile::new().unwrap();
        settings.save_to_file(temp_file.path()).unwrap();
        assert_eq!(Settings::load_from_file(temp_file.path()).unwrap(), settings);
    }

    #[test]
    fn test_navigator_uses_fixed_rows() {
        let settings = Settings::default();
        assert_eq!(settings.navigator().fixed_offset(), 6);
    }
}
