use crate::error::{MemeError, Result};

/// Placement of scaled content inside a container.
///
/// Produced by [`fit_content`]; the offsets are the top-left corner of the
/// content within the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRect {
    pub width: f64,
    pub height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// A [`DrawRect`] snapped to whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl DrawRect {
    /// Rectangle covering a whole `width` x `height` surface.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Round to integer placement. Width and height never drop below 1.
    pub fn to_pixels(&self) -> PixelRect {
        PixelRect {
            x: self.offset_x.round() as i64,
            y: self.offset_y.round() as i64,
            width: (self.width.round() as u32).max(1),
            height: (self.height.round() as u32).max(1),
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Compute the largest rectangle with the content's aspect ratio that fits
/// inside the container, centered on the axis it does not fill.
///
/// Content relatively taller than the container fills the container height;
/// everything else, including an exact aspect match, fills the width.
pub fn fit_content(
    container_width: f64,
    container_height: f64,
    content_width: f64,
    content_height: f64,
) -> Result<DrawRect> {
    check_dimension("container width", container_width)?;
    check_dimension("container height", container_height)?;
    check_dimension("content width", content_width)?;
    check_dimension("content height", content_height)?;

    let aspect_ratio = content_width / content_height;
    let container_aspect = container_width / container_height;

    let rect = if aspect_ratio < container_aspect {
        let width = container_height * aspect_ratio;
        DrawRect {
            width,
            height: container_height,
            offset_x: (container_width - width) / 2.0,
            offset_y: 0.0,
        }
    } else {
        let height = container_width / aspect_ratio;
        DrawRect {
            width: container_width,
            height,
            offset_x: 0.0,
            offset_y: (container_height - height) / 2.0,
        }
    };

    Ok(rect)
}

fn check_dimension(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MemeError::InvalidArgument(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixels_rounds_half_offsets() {
        let rect = DrawRect {
            width: 75.0,
            height: 300.0,
            offset_x: 162.5,
            offset_y: 0.0,
        };
        let px = rect.to_pixels();
        assert_eq!(px.x, 163);
        assert_eq!(px.y, 0);
        assert_eq!((px.width, px.height), (75, 300));
    }

    #[test]
    fn test_to_pixels_never_zero_sized() {
        let rect = DrawRect {
            width: 0.2,
            height: 400.0,
            offset_x: 199.9,
            offset_y: 0.0,
        };
        assert_eq!(rect.to_pixels().width, 1);
    }

    #[test]
    fn test_check_dimension_rejects_nan() {
        assert!(check_dimension("w", f64::NAN).is_err());
        assert!(check_dimension("w", f64::INFINITY).is_err());
        assert!(check_dimension("w", -1.0).is_err());
        assert!(check_dimension("w", 0.0).is_err());
        assert!(check_dimension("w", 0.5).is_ok());
    }
}
