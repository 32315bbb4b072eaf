#![allow(dead_code)]

use image::{Rgba, RgbaImage};

use memegen_core::caption::{CaptionStyle, Color};
use memegen_core::error::Result;
use memegen_core::geometry::DrawRect;
use memegen_core::render::Surface;
use memegen_core::speech::{SpeechSynthesizer, Utterance, Voice};

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    FillRect(DrawRect, Color),
    DrawImage { size: (u32, u32), dest: DrawRect },
    FillText { text: String, x: f64, y: f64 },
    StrokeText { text: String, x: f64, y: f64 },
}

/// Surface that records draw calls instead of drawing.
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, rect: &DrawRect, color: Color) {
        self.ops.push(DrawOp::FillRect(*rect, color));
    }

    fn draw_image(&mut self, image: &RgbaImage, dest: &DrawRect) {
        self.ops.push(DrawOp::DrawImage {
            size: image.dimensions(),
            dest: *dest,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, baseline_y: f64, _style: &CaptionStyle) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y: baseline_y,
        });
    }

    fn stroke_text(&mut self, text: &str, x: f64, baseline_y: f64, _style: &CaptionStyle) {
        self.ops.push(DrawOp::StrokeText {
            text: text.to_string(),
            x,
            y: baseline_y,
        });
    }
}

/// Synthesizer that keeps every utterance it is asked to speak.
#[derive(Default)]
pub struct RecordingSynthesizer {
    pub voices: Vec<Voice>,
    pub spoken: Vec<Utterance>,
}

impl SpeechSynthesizer for RecordingSynthesizer {
    fn name(&self) -> &str {
        "recording"
    }

    fn voices(&mut self) -> Result<Vec<Voice>> {
        Ok(self.voices.clone())
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        self.spoken.push(utterance.clone());
        Ok(())
    }
}

pub fn make_image(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

pub fn voice(name: &str, lang: &str, is_default: bool) -> Voice {
    Voice {
        name: name.to_string(),
        lang: lang.to_string(),
        identifier: format!("id/{lang}"),
        is_default,
    }
}
