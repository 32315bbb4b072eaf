use memegen_core::image::RgbaImage;

/// Convert the RGBA canvas to an egui ColorImage.
pub fn canvas_to_color_image(image: &RgbaImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}
