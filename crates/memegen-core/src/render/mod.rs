//! Drawing surface abstraction and meme composition.
//!
//! [`Surface`] is the canvas the session draws on. [`RasterSurface`] is the
//! in-memory RGBA implementation used by both front ends; tests substitute
//! recording surfaces to check the draw calls themselves.

mod glyph;
mod raster;

use image::RgbaImage;
use tracing::debug;

use crate::caption::{CaptionStyle, Captions, Color};
use crate::error::Result;
use crate::geometry::{fit_content, DrawRect};

pub use raster::RasterSurface;

/// A 2D drawing surface with a fixed pixel size.
pub trait Surface {
    /// `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);

    /// Reset every pixel to fully transparent.
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: &DrawRect, color: Color);

    /// Draw `image` scaled into `dest`.
    fn draw_image(&mut self, image: &RgbaImage, dest: &DrawRect);

    /// Fill `text` horizontally centered on `x`, sitting on `baseline_y`.
    fn fill_text(&mut self, text: &str, x: f64, baseline_y: f64, style: &CaptionStyle);

    /// Outline `text` at the same placement as [`Surface::fill_text`].
    fn stroke_text(&mut self, text: &str, x: f64, baseline_y: f64, style: &CaptionStyle);
}

/// Clear the surface, paint the background, and draw `image` fitted and
/// centered. Returns the rectangle the image was drawn into.
pub fn compose_background(
    surface: &mut dyn Surface,
    image: &RgbaImage,
    background: Color,
) -> Result<DrawRect> {
    let (width, height) = surface.size();
    surface.clear();
    surface.fill_rect(&DrawRect::full(width, height), background);

    let rect = fit_content(
        width as f64,
        height as f64,
        image.width() as f64,
        image.height() as f64,
    )?;
    surface.draw_image(image, &rect);

    debug!(
        canvas = ?(width, height),
        image = ?(image.width(), image.height()),
        rect = ?rect,
        "Image composed"
    );
    Ok(rect)
}

/// Draw both captions: fills first, then outlines on top.
pub fn draw_captions(surface: &mut dyn Surface, captions: &Captions, style: &CaptionStyle) {
    let (width, height) = surface.size();
    let (x, top_y, bottom_y) = style.anchors(width, height);

    surface.fill_text(&captions.top, x, top_y, style);
    surface.fill_text(&captions.bottom, x, bottom_y, style);
    surface.stroke_text(&captions.top, x, top_y, style);
    surface.stroke_text(&captions.bottom, x, bottom_y, style);
}
