mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod worker;

use memegen_core::config::MemeConfig;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Meme Generator"),
        ..Default::default()
    };

    eframe::run_native(
        "MemeGenerator",
        options,
        Box::new(|cc| Ok(Box::new(app::MemeApp::new(&cc.egui_ctx, MemeConfig::default())?))),
    )
}
