//! Speech synthesis seam.
//!
//! [`SpeechSynthesizer`] stands in for the host speech engine. Voice lists
//! may only become available some time after startup, so consumers hold a
//! [`VoiceCatalog`] that starts empty and is populated when the engine
//! reports its voices.

mod catalog;
mod espeak;
mod logging;

use std::fmt;

use tracing::{info, warn};

use crate::config::SpeechConfig;
use crate::error::Result;

pub use catalog::{VoiceCatalog, VoiceListener, VoiceOption};
pub use espeak::{parse_voice_table, EspeakSynthesizer};
pub use logging::LoggingSynthesizer;

/// A voice offered by the synthesizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub lang: String,
    /// Engine-specific identifier passed back when speaking.
    pub identifier: String,
    pub is_default: bool,
}

/// A single speech request.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub voice: Option<Voice>,
    /// Playback volume in [0, 1].
    pub volume: f32,
}

/// Text-to-speech engine.
pub trait SpeechSynthesizer: Send {
    /// Short engine name for logs.
    fn name(&self) -> &str;

    /// Enumerate available voices. May be slow; call off the UI thread.
    fn voices(&mut self) -> Result<Vec<Voice>>;

    /// Start speaking. Returns once playback has been requested.
    fn speak(&mut self, utterance: &Utterance) -> Result<()>;

    /// Block until every requested utterance has finished playing.
    fn wait_idle(&mut self) {}
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.lang)
    }
}

/// Pick the best available engine: espeak-ng if it runs, otherwise a
/// synthesizer that only logs.
pub fn detect_synthesizer(config: &SpeechConfig) -> Box<dyn SpeechSynthesizer> {
    let espeak = EspeakSynthesizer::new(config.espeak_bin.clone());
    if espeak.is_available() {
        info!(bin = %config.espeak_bin.display(), "Using espeak-ng for speech");
        Box::new(espeak)
    } else {
        warn!(
            bin = %config.espeak_bin.display(),
            "espeak-ng not found, speech will only be logged"
        );
        Box::new(LoggingSynthesizer::default())
    }
}
