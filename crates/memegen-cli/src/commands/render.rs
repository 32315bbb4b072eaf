use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use memegen_core::caption::Captions;
use memegen_core::io::{load_image, save_png};
use memegen_core::render::RasterSurface;
use memegen_core::session::MemeSession;
use memegen_core::speech::detect_synthesizer;
use tracing::debug;

#[derive(Args)]
pub struct RenderArgs {
    /// Input image file (PNG, JPEG, GIF, ...)
    pub file: PathBuf,

    /// Top caption
    #[arg(long, default_value = "")]
    pub top: String,

    /// Bottom caption
    #[arg(long, default_value = "")]
    pub bottom: String,

    /// Canvas width (overrides config)
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height (overrides config)
    #[arg(long)]
    pub height: Option<u32>,

    /// Read the captions aloud after rendering
    #[arg(long)]
    pub read: bool,

    /// Volume for --read, 0-100
    #[arg(long)]
    pub volume: Option<u8>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "meme.png")]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.canvas.width = width;
    }
    if let Some(height) = args.height {
        config.canvas.height = height;
    }

    debug!(
        width = config.canvas.width,
        height = config.canvas.height,
        input = %args.file.display(),
        "Rendering meme"
    );

    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let image_size = image.dimensions();

    let mut surface = RasterSurface::new(config.canvas.width, config.canvas.height);
    let mut session = MemeSession::new(config.clone())?;
    if let Some(volume) = args.volume {
        session.set_volume(volume)?;
    }

    let rect = session.load_image(image, &mut surface)?;
    let captions = Captions::new(args.top.as_str(), args.bottom.as_str());
    crate::summary::print_render_summary(
        &args.file,
        &args.output,
        &config,
        image_size,
        &rect,
        &captions,
    );

    session.generate(captions, &mut surface)?;
    save_png(surface.image(), &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    if args.read {
        let mut synth = detect_synthesizer(&session.config().speech);
        session.voices_changed(synth.voices()?);
        let utterance = session.utterance(session.captions());
        crate::summary::print_speech_summary(synth.name(), &utterance, session.volume());
        super::speak::speak_and_wait(synth.as_mut(), &utterance)?;
    }

    Ok(())
}
