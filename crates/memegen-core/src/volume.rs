use std::fmt;

use crate::consts::{VOLUME_MAX, VOLUME_TIER_LOW_MAX, VOLUME_TIER_MEDIUM_MAX};
use crate::error::{MemeError, Result};

/// Position of the 0–100 volume range control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct VolumeLevel(u8);

/// Icon tier shown next to the volume control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeTier {
    Muted,
    Low,
    Medium,
    High,
}

impl VolumeLevel {
    pub const MAX: VolumeLevel = VolumeLevel(VOLUME_MAX);

    pub fn new(value: u8) -> Result<Self> {
        if value > VOLUME_MAX {
            return Err(MemeError::InvalidArgument(format!(
                "volume {value} is above {VOLUME_MAX}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Linear mapping of the range value onto [0, 1].
    pub fn scalar(self) -> f32 {
        self.0 as f32 / VOLUME_MAX as f32
    }

    /// Upper bounds are inclusive: 33 is still low, 66 still medium.
    pub fn tier(self) -> VolumeTier {
        match self.0 {
            0 => VolumeTier::Muted,
            v if v <= VOLUME_TIER_LOW_MAX => VolumeTier::Low,
            v if v <= VOLUME_TIER_MEDIUM_MAX => VolumeTier::Medium,
            _ => VolumeTier::High,
        }
    }
}

impl Default for VolumeLevel {
    fn default() -> Self {
        Self::MAX
    }
}

impl VolumeTier {
    pub fn index(self) -> u8 {
        match self {
            Self::Muted => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Relative path of the icon asset for this tier.
    pub fn icon_path(self) -> String {
        format!("icons/volume-level-{}.svg", self.index())
    }

    /// Speaker glyph used where SVG icons are not available.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Muted => "\u{1F507}",
            Self::Low => "\u{1F508}",
            Self::Medium => "\u{1F509}",
            Self::High => "\u{1F50A}",
        }
    }
}

impl fmt::Display for VolumeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Muted => write!(f, "Muted"),
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}
