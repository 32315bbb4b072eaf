use std::path::PathBuf;

use memegen_core::config::MemeConfig;

use crate::app::MemeApp;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::worker::send;

pub fn show(ctx: &egui::Context, app: &mut MemeApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
    let can_save = app.session.image().is_some();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(app);
                }

                if ui
                    .add_enabled(
                        can_save,
                        egui::Button::new("Save As...").shortcut_text(ctx.format_shortcut(&save_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    save_file(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(ctx, app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(ctx, app);
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
            open_file(app);
        }
        if can_save && ctx.input_mut(|i| i.consume_shortcut(&save_shortcut)) {
            save_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

pub(crate) fn open_file(app: &mut MemeApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::DecodeImage { path });
        }
    });
}

fn save_file(app: &mut MemeApp) {
    let cmd_tx = app.cmd_tx.clone();
    let image = app.surface.image().clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("meme.png")
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SaveImage { path, image });
        }
    });
}

fn import_config(ctx: &egui::Context, app: &mut MemeApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new().add_filter("TOML", &["toml"]).pick_file() else {
            return;
        };
        let result = match MemeConfig::load(&path) {
            Ok(config) => WorkerResult::ConfigImported { config },
            Err(e) => WorkerResult::Error {
                message: format!("Failed to import {}: {e}", path.display()),
            },
        };
        send(&result_tx, &ctx, result);
    });
}

fn export_config(ctx: &egui::Context, app: &mut MemeApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    let config = app.session.config().clone();

    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("memegen.toml")
            .save_file()
        else {
            return;
        };
        send(&result_tx, &ctx, write_config(&config, path));
    });
}

fn write_config(config: &MemeConfig, path: PathBuf) -> WorkerResult {
    let written = config
        .to_toml()
        .map_err(|e| e.to_string())
        .and_then(|content| std::fs::write(&path, content).map_err(|e| e.to_string()));
    match written {
        Ok(()) => WorkerResult::Log {
            message: format!("Config exported: {}", path.display()),
        },
        Err(message) => WorkerResult::Error { message },
    }
}
