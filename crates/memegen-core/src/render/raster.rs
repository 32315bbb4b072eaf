use image::imageops::{self, FilterType};
use image::{Pixel, RgbaImage};

use crate::caption::{CaptionStyle, Color};
use crate::consts::{MAX_CAPTION_FONT_PX, MAX_STROKE_WIDTH};
use crate::geometry::DrawRect;

use super::glyph::GlyphMask;
use super::Surface;

/// In-memory RGBA canvas.
#[derive(Clone, Debug)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// A fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        self.image
            .get_pixel_mut(x as u32, y as u32)
            .blend(&color.to_rgba());
    }

    /// Paint the covered pixels of `mask`, centered on `x` with its
    /// baseline on `baseline_y`.
    fn paint_mask(&mut self, mask: &GlyphMask, x: f64, baseline_y: f64, color: Color) {
        let left = (x - mask.width() as f64 / 2.0).round() as i64;
        let top = (baseline_y - mask.baseline()).round() as i64;

        for my in 0..mask.height() as i64 {
            for mx in 0..mask.width() as i64 {
                if mask.is_on(mx, my) {
                    self.blend_pixel(left + mx, top + my, color);
                }
            }
        }
    }
}

/// Caption mask at the style's font size, clamped to the supported range.
fn caption_mask(text: &str, style: &CaptionStyle) -> Option<GlyphMask> {
    let font_px = style.font_px.clamp(1, MAX_CAPTION_FONT_PX);
    GlyphMask::rasterize(text).map(|mask| mask.scaled_to(font_px))
}

impl Surface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Color::TRANSPARENT.to_rgba();
        }
    }

    fn fill_rect(&mut self, rect: &DrawRect, color: Color) {
        let px = rect.to_pixels();
        for y in px.y..px.y + px.height as i64 {
            for x in px.x..px.x + px.width as i64 {
                self.blend_pixel(x, y, color);
            }
        }
    }

    fn draw_image(&mut self, image: &RgbaImage, dest: &DrawRect) {
        let px = dest.to_pixels();
        let scaled = imageops::resize(image, px.width, px.height, FilterType::Triangle);
        imageops::overlay(&mut self.image, &scaled, px.x, px.y);
    }

    fn fill_text(&mut self, text: &str, x: f64, baseline_y: f64, style: &CaptionStyle) {
        if let Some(mask) = caption_mask(text, style) {
            self.paint_mask(&mask, x, baseline_y, style.fill);
        }
    }

    fn stroke_text(&mut self, text: &str, x: f64, baseline_y: f64, style: &CaptionStyle) {
        if style.stroke_width.is_nan() || style.stroke_width <= 0.0 {
            return;
        }
        let radius = style.stroke_width.min(MAX_STROKE_WIDTH).ceil() as u32;
        if let Some(mask) = caption_mask(text, style) {
            self.paint_mask(&mask.outlined(radius.max(1)), x, baseline_y, style.stroke);
        }
    }
}
