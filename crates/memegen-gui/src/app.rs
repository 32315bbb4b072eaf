use std::sync::mpsc;

use memegen_core::caption::Captions;
use memegen_core::config::MemeConfig;
use memegen_core::render::RasterSurface;
use memegen_core::session::MemeSession;
use tracing::warn;

use crate::convert::canvas_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::worker::{self, WorkerSpeech};

pub struct MemeApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: MemeSession,
    pub surface: RasterSurface,
    pub speech: WorkerSpeech,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl MemeApp {
    pub fn new(ctx: &egui::Context, config: MemeConfig) -> anyhow::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(config.speech.clone(), result_tx.clone(), ctx.clone())?;

        // The voice list shows up later as `VoicesReady`.
        let _ = cmd_tx.send(WorkerCommand::LoadVoices);

        let surface = RasterSurface::new(config.canvas.width, config.canvas.height);
        let ui_state = UIState {
            volume: config.speech.default_volume,
            ..UIState::default()
        };
        let session = MemeSession::new(config)?;

        Ok(Self {
            speech: WorkerSpeech::new(cmd_tx.clone()),
            cmd_tx,
            result_tx,
            result_rx,
            session,
            surface,
            ui_state,
            viewport: ViewportState::default(),
            show_about: false,
        })
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageDecoded { image } => {
                    let name = image.name.clone();
                    let (w, h) = image.dimensions();
                    match self.session.load_image(image, &mut self.surface) {
                        Ok(_) => {
                            self.ui_state.add_log(format!("Opened: {name} ({w}x{h})"));
                            self.ui_state.file_name = Some(name);
                            self.update_canvas_texture(ctx, "Image");
                        }
                        Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
                    }
                }
                WorkerResult::VoicesReady { engine, voices } => {
                    self.ui_state
                        .add_log(format!("{} voices from {engine}", voices.len()));
                    self.ui_state.engine = Some(engine);
                    self.session.voices_changed(voices);
                }
                WorkerResult::ConfigImported { config } => {
                    self.apply_config(ctx, config);
                }
                WorkerResult::ImageSaved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Generate button.
    pub fn generate(&mut self, ctx: &egui::Context) {
        let captions = Captions::new(
            self.ui_state.top_text.as_str(),
            self.ui_state.bottom_text.as_str(),
        );
        match self.session.generate(captions, &mut self.surface) {
            Ok(()) => self.update_canvas_texture(ctx, "Meme"),
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Clear button.
    pub fn reset(&mut self, ctx: &egui::Context) {
        match self.session.reset(&mut self.surface) {
            Ok(()) => self.update_canvas_texture(ctx, ""),
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Read Text button.
    pub fn read(&mut self) {
        let captions = Captions::new(
            self.ui_state.top_text.as_str(),
            self.ui_state.bottom_text.as_str(),
        );
        match self.session.read(&captions, &mut self.speech) {
            Ok(utterance) => self.ui_state.add_log(format!("Reading: \"{}\"", utterance.text)),
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn set_volume(&mut self, value: u8) {
        if let Err(e) = self.session.set_volume(value) {
            warn!(value, error = %e, "Rejected volume");
        }
    }

    /// Swap in an imported config. The canvas is rebuilt at the new size and
    /// the loaded image, if any, is drawn again; captions must be regenerated.
    fn apply_config(&mut self, ctx: &egui::Context, config: MemeConfig) {
        let speech = config.speech.clone();
        let mut session = match MemeSession::new(config) {
            Ok(session) => session,
            Err(e) => {
                self.ui_state.add_log(format!("ERROR: {e}"));
                return;
            }
        };
        let mut surface = RasterSurface::new(
            session.config().canvas.width,
            session.config().canvas.height,
        );

        if let Some(image) = self.session.image().cloned() {
            if let Err(e) = session.load_image(image, &mut surface) {
                self.ui_state.add_log(format!("ERROR: {e}"));
                return;
            }
        }

        self.ui_state.volume = session.volume().value();
        self.session = session;
        self.surface = surface;
        self.update_canvas_texture(ctx, "Image");
        self.send_command(WorkerCommand::Configure { speech });
        self.ui_state.add_log("Config imported".into());
    }

    fn update_canvas_texture(&mut self, ctx: &egui::Context, label: &str) {
        let image = canvas_to_color_image(self.surface.image());
        let size = image.size;
        let texture = ctx.load_texture("canvas", image, egui::TextureOptions::LINEAR);
        self.viewport.texture = Some(texture);
        self.viewport.canvas_size = Some(size);
        self.viewport.viewing_label = label.to_string();
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for MemeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Meme Generator")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Meme Generator");
                        ui.label("Caption images and read them aloud");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
