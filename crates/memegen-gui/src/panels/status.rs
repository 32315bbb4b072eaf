use crate::app::MemeApp;

const LOG_LINES: usize = 4;

pub fn show(ctx: &egui::Context, app: &mut MemeApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * LOG_LINES as f32 + spacing * (LOG_LINES - 1) as f32;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..LOG_LINES {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(size) = app.viewport.canvas_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            ui.label(format!("State: {}", app.session.state()));
            ui.separator();
            let volume = app.session.volume();
            ui.label(format!("Volume: {}% ({})", volume.value(), volume.tier()));
        });

        ui.add_space(2.0);
    });
}
