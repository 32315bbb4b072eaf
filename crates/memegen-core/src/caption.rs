use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BOTTOM_MARGIN, DEFAULT_CAPTION_FONT_PX, DEFAULT_STROKE_WIDTH, DEFAULT_TOP_BASELINE,
    MAX_CAPTION_FONT_PX, MAX_STROKE_WIDTH,
};
use crate::error::{MemeError, Result};

/// RGBA color, serialized as `[r, g, b, a]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0, 255]);
    pub const WHITE: Color = Color([255, 255, 255, 255]);
    pub const TRANSPARENT: Color = Color([0, 0, 0, 0]);

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba(self.0)
    }
}

/// Top and bottom caption text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Captions {
    pub top: String,
    pub bottom: String,
}

impl Captions {
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            bottom: bottom.into(),
        }
    }

    /// Text spoken by "read text": both captions joined by a single space.
    pub fn utterance_text(&self) -> String {
        format!("{} {}", self.top, self.bottom)
    }
}

/// How captions are drawn onto the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionStyle {
    /// Glyph height in pixels.
    pub font_px: u32,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    /// Top caption baseline, from the top edge.
    pub top_baseline: f64,
    /// Bottom caption baseline, from the bottom edge.
    pub bottom_margin: f64,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_px: DEFAULT_CAPTION_FONT_PX,
            fill: Color::WHITE,
            stroke: Color::BLACK,
            stroke_width: DEFAULT_STROKE_WIDTH,
            top_baseline: DEFAULT_TOP_BASELINE,
            bottom_margin: DEFAULT_BOTTOM_MARGIN,
        }
    }
}

impl CaptionStyle {
    /// Baseline positions `(x, top_y, bottom_y)` for a canvas of the given size.
    pub fn anchors(&self, width: u32, height: u32) -> (f64, f64, f64) {
        (
            width as f64 / 2.0,
            self.top_baseline,
            height as f64 - self.bottom_margin,
        )
    }

    /// Font size in `1..=MAX_CAPTION_FONT_PX`, stroke width finite in
    /// `0..=MAX_STROKE_WIDTH`, finite anchors.
    pub fn validate(&self) -> Result<()> {
        if self.font_px == 0 || self.font_px > MAX_CAPTION_FONT_PX {
            return Err(MemeError::Config(format!(
                "caption font_px must be in 1..={MAX_CAPTION_FONT_PX}, got {}",
                self.font_px
            )));
        }
        if !self.stroke_width.is_finite()
            || self.stroke_width < 0.0
            || self.stroke_width > MAX_STROKE_WIDTH
        {
            return Err(MemeError::Config(format!(
                "caption stroke_width must be in 0..={MAX_STROKE_WIDTH}, got {}",
                self.stroke_width
            )));
        }
        if !self.top_baseline.is_finite() || !self.bottom_margin.is_finite() {
            return Err(MemeError::Config(format!(
                "caption anchors must be finite, got top_baseline {} and bottom_margin {}",
                self.top_baseline, self.bottom_margin
            )));
        }
        Ok(())
    }
}
