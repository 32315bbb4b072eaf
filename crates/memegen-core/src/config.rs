use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::caption::{CaptionStyle, Color};
use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_VOLUME, VOLUME_MAX};
use crate::error::{MemeError, Result};

/// Application settings, loadable from TOML. Missing sections fall back to
/// their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemeConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub caption: CaptionStyle,
    #[serde(default)]
    pub speech: SpeechConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Letterbox color behind non-matching aspect ratios.
    pub background: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            background: Color::BLACK,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// espeak-ng executable; looked up on `PATH` when not absolute.
    pub espeak_bin: PathBuf,
    /// Initial volume range position (0–100).
    pub default_volume: u8,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            espeak_bin: PathBuf::from("espeak-ng"),
            default_volume: DEFAULT_VOLUME,
        }
    }
}

impl MemeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| MemeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| MemeError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(MemeError::Config(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        self.caption.validate()?;
        if self.speech.default_volume > VOLUME_MAX {
            return Err(MemeError::Config(format!(
                "default_volume {} is above {}",
                self.speech.default_volume,
                VOLUME_MAX
            )));
        }
        Ok(())
    }
}
