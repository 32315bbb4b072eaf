use tracing::info;

use crate::error::Result;

use super::{SpeechSynthesizer, Utterance, Voice};

/// Synthesizer used when no speech engine is installed: every utterance is
/// written to the log instead of being played.
#[derive(Debug, Default)]
pub struct LoggingSynthesizer {
    spoken: usize,
}

impl LoggingSynthesizer {
    /// Number of utterances received so far.
    pub fn spoken(&self) -> usize {
        self.spoken
    }
}

impl SpeechSynthesizer for LoggingSynthesizer {
    fn name(&self) -> &str {
        "log"
    }

    fn voices(&mut self) -> Result<Vec<Voice>> {
        Ok(Vec::new())
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        self.spoken += 1;
        info!(
            text = %utterance.text,
            voice = ?utterance.voice.as_ref().map(|v| v.name.as_str()),
            volume = utterance.volume,
            "Speak"
        );
        Ok(())
    }
}
