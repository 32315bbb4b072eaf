use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use memegen_core::caption::Captions;
use memegen_core::speech::{detect_synthesizer, SpeechSynthesizer, Utterance, VoiceCatalog};
use memegen_core::volume::VolumeLevel;

#[derive(Args)]
pub struct SpeakArgs {
    /// Top caption
    #[arg(long, default_value = "")]
    pub top: String,

    /// Bottom caption
    #[arg(long, default_value = "")]
    pub bottom: String,

    /// Volume, 0-100 (defaults to the configured volume)
    #[arg(long)]
    pub volume: Option<u8>,

    /// Voice index as printed by `memegen voices`
    #[arg(long)]
    pub voice: Option<usize>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &SpeakArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let volume = VolumeLevel::new(args.volume.unwrap_or(config.speech.default_volume))?;
    let mut synth = detect_synthesizer(&config.speech);

    let voice = match args.voice {
        Some(index) => {
            let mut catalog = VoiceCatalog::new();
            catalog.populate(synth.voices()?);
            match catalog.voice_for(index) {
                Some(v) => Some(v.clone()),
                None => bail!(
                    "Voice {index} not found ({} voices available)",
                    catalog.voices().len()
                ),
            }
        }
        None => None,
    };

    let utterance = Utterance {
        text: Captions::new(args.top.as_str(), args.bottom.as_str()).utterance_text(),
        voice,
        volume: volume.scalar(),
    };

    crate::summary::print_speech_summary(synth.name(), &utterance, volume);
    speak_and_wait(synth.as_mut(), &utterance)
}

/// Speak and keep the process alive until playback ends.
pub(crate) fn speak_and_wait(synth: &mut dyn SpeechSynthesizer, utterance: &Utterance) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    spinner.set_message("Speaking");
    spinner.enable_steady_tick(Duration::from_millis(100));

    synth.speak(utterance)?;
    synth.wait_idle();

    spinner.finish_and_clear();
    Ok(())
}
