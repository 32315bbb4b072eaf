use memegen_core::geometry::{fit_content, DrawRect};

use crate::app::MemeApp;

pub fn show(ctx: &egui::Context, app: &mut MemeApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        if let Some(texture) = app.viewport.texture.as_ref() {
            let tex_size = texture.size_vec2();
            let img_rect = compute_img_rect(rect, tex_size);
            // A cleared canvas is fully transparent.
            ui.painter()
                .rect_filled(img_rect, 0.0, egui::Color32::from_gray(45));
            ui.painter().image(
                texture.id(),
                img_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
            draw_viewing_label(ui, rect, &app.viewport.viewing_label);
        } else {
            show_placeholder(ui);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Canvas rectangle inside the panel, aspect preserved and centered.
fn compute_img_rect(rect: egui::Rect, tex_size: egui::Vec2) -> egui::Rect {
    let fitted = fit_content(
        rect.width() as f64,
        rect.height() as f64,
        tex_size.x as f64,
        tex_size.y as f64,
    )
    .unwrap_or_else(|_| DrawRect::full(tex_size.x as u32, tex_size.y as u32));

    egui::Rect::from_min_size(
        rect.min + egui::vec2(fitted.offset_x as f32, fitted.offset_y as f32),
        egui::vec2(fitted.width as f32, fitted.height as f32),
    )
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
