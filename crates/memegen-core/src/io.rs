use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::error::{MemeError, Result};

/// A decoded user image plus the file name it came from.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    pub image: RgbaImage,
    pub name: String,
}

impl LoadedImage {
    pub fn new(image: RgbaImage, name: impl Into<String>) -> Self {
        Self {
            image,
            name: name.into(),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Decode any supported image file into RGBA.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)?.to_rgba8();
    if img.width() == 0 || img.height() == 0 {
        return Err(MemeError::InvalidArgument(format!(
            "{} has no pixels",
            path.display()
        )));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    debug!(name = %name, width = img.width(), height = img.height(), "Image decoded");
    Ok(LoadedImage::new(img, name))
}

/// Save the canvas as PNG.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
