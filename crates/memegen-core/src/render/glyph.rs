use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

const CAPTION_FONT: &MonoFont<'static> = &FONT_10X20;

/// One-bit coverage mask for a line of text.
#[derive(Clone, Debug)]
pub(crate) struct GlyphMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
    /// Baseline row, measured from the top of the mask.
    baseline: f64,
}

impl GlyphMask {
    fn blank(width: u32, height: u32, baseline: f64) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
            baseline,
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Render `text` in the caption font at its native size.
    /// Returns `None` for empty text.
    pub(crate) fn rasterize(text: &str) -> Option<Self> {
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return None;
        }

        let advance = CAPTION_FONT.character_size.width + CAPTION_FONT.character_spacing;
        let width = chars.saturating_mul(advance) - CAPTION_FONT.character_spacing;
        let height = CAPTION_FONT.character_size.height;

        let mut mask = Self::blank(width, height, CAPTION_FONT.baseline as f64);
        let style = MonoTextStyle::new(CAPTION_FONT, BinaryColor::On);
        // Drawing into the mask cannot fail.
        let _ = Text::with_baseline(text, Point::zero(), style, Baseline::Top).draw(&mut mask);
        Some(mask)
    }

    /// Nearest-neighbour scale so the glyph cell is `font_px` tall.
    pub(crate) fn scaled_to(&self, font_px: u32) -> Self {
        let scale = font_px as f64 / self.height as f64;
        let width = ((self.width as f64 * scale).round() as u32).max(1);
        let height = ((self.height as f64 * scale).round() as u32).max(1);

        let mut scaled = Self::blank(width, height, self.baseline * scale);
        for y in 0..height {
            let src_y = ((y as f64 / scale) as u32).min(self.height - 1);
            for x in 0..width {
                let src_x = ((x as f64 / scale) as u32).min(self.width - 1);
                let i = scaled.index(x, y);
                scaled.bits[i] = self.is_on(src_x as i64, src_y as i64);
            }
        }
        scaled
    }

    /// The ring an outline paints around the glyphs: uncovered pixels within
    /// `radius` (square neighbourhood) of a covered one. The result is
    /// `radius` pixels larger on every side and shares this mask's baseline.
    pub(crate) fn outlined(&self, radius: u32) -> Self {
        let r = radius as i64;
        let width = self.width + 2 * radius;
        let height = self.height + 2 * radius;

        // Separable dilation: rows first, then columns.
        let mut rows = Self::blank(width, self.height, 0.0);
        for y in 0..self.height {
            let mut last_on: Option<i64> = None;
            let mut next_on = (0..self.width as i64).find(|&x| self.is_on(x, y as i64));
            for ox in 0..width as i64 {
                let sx = ox - r;
                if self.is_on(sx, y as i64) {
                    last_on = Some(sx);
                }
                if next_on.is_some_and(|n| n < sx) {
                    next_on = (sx..self.width as i64).find(|&x| self.is_on(x, y as i64));
                }
                let near_left = last_on.is_some_and(|l| sx - l <= r);
                let near_right = next_on.is_some_and(|n| n - sx <= r);
                if near_left || near_right {
                    let i = rows.index(ox as u32, y);
                    rows.bits[i] = true;
                }
            }
        }

        let mut ring = Self::blank(width, height, self.baseline + radius as f64);
        for x in 0..width {
            let mut last_on: Option<i64> = None;
            let mut next_on = (0..self.height as i64).find(|&y| rows.is_on(x as i64, y));
            for oy in 0..height as i64 {
                let sy = oy - r;
                if rows.is_on(x as i64, sy) {
                    last_on = Some(sy);
                }
                if next_on.is_some_and(|n| n < sy) {
                    next_on = (sy..self.height as i64).find(|&y| rows.is_on(x as i64, y));
                }
                let near = last_on.is_some_and(|l| sy - l <= r)
                    || next_on.is_some_and(|n| n - sy <= r);
                if near && !self.is_on(x as i64 - r, sy) {
                    let i = ring.index(x, oy as u32);
                    ring.bits[i] = true;
                }
            }
        }
        ring
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn baseline(&self) -> f64 {
        self.baseline
    }

    pub(crate) fn is_on(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        self.bits[self.index(x as u32, y as u32)]
    }
}

impl OriginDimensions for GlyphMask {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for GlyphMask {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x < self.width && y < self.height {
                let i = self.index(x, y);
                self.bits[i] = color.is_on();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rasterize_empty_is_none() {
        assert!(GlyphMask::rasterize("").is_none());
    }

    #[test]
    fn test_rasterize_width_per_char() {
        let mask = GlyphMask::rasterize("AB").unwrap();
        assert_eq!(mask.width(), 20);
        assert_eq!(mask.height(), 20);
        assert!(mask.bits.iter().any(|&b| b));
    }

    #[test]
    fn test_scaled_to_font_px() {
        let mask = GlyphMask::rasterize("A").unwrap().scaled_to(50);
        assert_eq!(mask.height(), 50);
        assert_eq!(mask.width(), 25);
        assert!(mask.baseline() > 0.0 && mask.baseline() < 50.0);
    }

    #[test]
    fn test_outline_surrounds_coverage() {
        let blank = GlyphMask::rasterize(" ").unwrap().outlined(1);
        assert!(blank.bits.iter().all(|&b| !b));

        let mut mask = GlyphMask::blank(5, 5, 4.0);
        mask.bits[2 * 5 + 2] = true;

        let ring = mask.outlined(1);
        assert_eq!((ring.width(), ring.height()), (7, 7));
        assert_eq!(ring.baseline(), 5.0);
        // Coordinates shift by the radius.
        assert!(!ring.is_on(3, 3));
        assert!(ring.is_on(2, 2));
        assert!(ring.is_on(4, 3));
        assert!(!ring.is_on(1, 1));
        assert_eq!(ring.bits.iter().filter(|&&b| b).count(), 8);

        let wide = mask.outlined(2);
        assert!(wide.is_on(2, 2));
        assert_eq!(wide.bits.iter().filter(|&&b| b).count(), 24);
    }

    #[test]
    fn test_outline_matches_brute_force() {
        let mask = GlyphMask::rasterize("Wg").unwrap().scaled_to(30);
        let radius = 3;
        let ring = mask.outlined(radius);
        let r = radius as i64;
        for y in 0..ring.height() as i64 {
            for x in 0..ring.width() as i64 {
                let (sx, sy) = (x - r, y - r);
                let expected = !mask.is_on(sx, sy)
                    && (-r..=r).any(|dy| (-r..=r).any(|dx| mask.is_on(sx + dx, sy + dy)));
                assert_eq!(ring.is_on(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_large_mask_dimensions_do_not_overflow() {
        let mask = GlyphMask::rasterize("HELLO WORLD").unwrap().scaled_to(1000);
        assert_eq!(mask.height(), 1000);
        assert_eq!(mask.bits.len(), mask.width() as usize * 1000);
    }
}
