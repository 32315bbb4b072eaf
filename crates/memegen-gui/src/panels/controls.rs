use crate::app::MemeApp;

use super::section_header;

const LEFT_PANEL_WIDTH: f32 = 260.0;

pub fn show(ctx: &egui::Context, app: &mut MemeApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                file_section(ui, app);
                ui.separator();
                caption_section(ui, ctx, app);
                ui.separator();
                speech_section(ui, app);
            });
        });
}

fn file_section(ui: &mut egui::Ui, app: &mut MemeApp) {
    section_header(ui, "Image", None);
    ui.add_space(4.0);

    if ui.button("Open...").clicked() {
        super::menu_bar::open_file(app);
    }

    if let Some(ref name) = app.ui_state.file_name {
        ui.label(name);
    }
    if let Some(image) = app.session.image() {
        let (w, h) = image.dimensions();
        ui.small(format!("{w}x{h}"));
    }
}

fn caption_section(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut MemeApp) {
    let state = app.session.state().to_string();
    section_header(ui, "Captions", Some(&state));
    ui.add_space(4.0);

    ui.label("Top");
    ui.text_edit_singleline(&mut app.ui_state.top_text);
    ui.label("Bottom");
    ui.text_edit_singleline(&mut app.ui_state.bottom_text);
    ui.add_space(4.0);

    let gates = app.session.gates();
    ui.horizontal(|ui| {
        if ui.add_enabled(gates.submit, egui::Button::new("Generate")).clicked() {
            app.generate(ctx);
        }
        if ui.add_enabled(gates.reset, egui::Button::new("Clear")).clicked() {
            app.reset(ctx);
        }
    });
}

fn speech_section(ui: &mut egui::Ui, app: &mut MemeApp) {
    let engine = app.ui_state.engine.clone();
    section_header(ui, "Speech", engine.as_deref());
    ui.add_space(4.0);

    let ready = app.session.voices().is_ready();
    let selected_label = app
        .session
        .selected_voice()
        .and_then(|i| app.session.voices().options().get(i))
        .map(|o| o.label.clone())
        .unwrap_or_else(|| if ready { "(none)".into() } else { "Loading...".into() });

    let mut selected = app.session.selected_voice();
    ui.add_enabled_ui(ready, |ui| {
        egui::ComboBox::from_label("Voice")
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                for option in app.session.voices().options() {
                    ui.selectable_value(&mut selected, Some(option.index), &option.label);
                }
            });
    });
    if selected != app.session.selected_voice() {
        if let Some(index) = selected {
            if let Err(e) = app.session.select_voice(index) {
                app.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(app.session.volume().tier().glyph())
            .on_hover_text(app.session.volume().tier().icon_path());
        let response = ui.add(
            egui::Slider::new(&mut app.ui_state.volume, 0..=100)
                .text("Volume")
                .clamping(egui::SliderClamping::Always),
        );
        if response.changed() {
            let value = app.ui_state.volume;
            app.set_volume(value);
        }
    });

    ui.add_space(4.0);
    if ui
        .add_enabled(app.session.gates().read, egui::Button::new("Read Text"))
        .clicked()
    {
        app.read();
    }
}
