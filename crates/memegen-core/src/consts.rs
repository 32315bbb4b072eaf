/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 400;

/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;

/// Caption font size in pixels.
pub const DEFAULT_CAPTION_FONT_PX: u32 = 50;

/// Baseline of the top caption, measured from the top edge.
pub const DEFAULT_TOP_BASELINE: f64 = 50.0;

/// Distance of the bottom caption's baseline from the bottom edge.
pub const DEFAULT_BOTTOM_MARGIN: f64 = 10.0;

/// Largest accepted caption font size in pixels.
pub const MAX_CAPTION_FONT_PX: u32 = 1000;

/// Caption outline width in pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 0.75;

/// Largest accepted caption outline width in pixels.
pub const MAX_STROKE_WIDTH: f64 = 32.0;

/// Upper bound of the volume range control.
pub const VOLUME_MAX: u8 = 100;

/// Initial position of the volume range control.
pub const DEFAULT_VOLUME: u8 = 100;

/// Inclusive upper bound of the "low" volume tier.
pub const VOLUME_TIER_LOW_MAX: u8 = 33;

/// Inclusive upper bound of the "medium" volume tier.
pub const VOLUME_TIER_MEDIUM_MAX: u8 = 66;

/// espeak-ng amplitude at full volume (its own default).
pub const ESPEAK_FULL_AMPLITUDE: f32 = 100.0;

/// Suffix appended to the label of the engine's default voice.
pub const DEFAULT_VOICE_SUFFIX: &str = " -- DEFAULT";
