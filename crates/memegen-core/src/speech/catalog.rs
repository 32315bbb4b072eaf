use tracing::debug;

use crate::consts::DEFAULT_VOICE_SUFFIX;

use super::Voice;

/// Entry for a voice picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceOption {
    pub label: String,
    pub name: String,
    pub lang: String,
    /// Position of the voice in the catalog.
    pub index: usize,
}

/// Observer notified whenever the catalog is (re)populated.
pub trait VoiceListener {
    fn voices_changed(&mut self, options: &[VoiceOption]);
}

/// Voice list with explicit readiness.
///
/// Starts empty and not ready. [`VoiceCatalog::populate`] installs the
/// engine's list and notifies listeners; it may be called again whenever
/// the engine reports a change.
#[derive(Default)]
pub struct VoiceCatalog {
    voices: Vec<Voice>,
    options: Vec<VoiceOption>,
    ready: bool,
    listeners: Vec<Box<dyn VoiceListener>>,
}

impl VoiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Box<dyn VoiceListener>) {
        self.listeners.push(listener);
    }

    pub fn populate(&mut self, voices: Vec<Voice>) {
        self.options = voices
            .iter()
            .enumerate()
            .map(|(index, voice)| option_for(index, voice))
            .collect();
        self.voices = voices;
        self.ready = true;
        debug!(count = self.voices.len(), "Voice catalog populated");

        for listener in &mut self.listeners {
            listener.voices_changed(&self.options);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn options(&self) -> &[VoiceOption] {
        &self.options
    }

    pub fn voice_for(&self, index: usize) -> Option<&Voice> {
        self.voices.get(index)
    }

    /// Index of the engine's default voice, if it reported one.
    pub fn default_index(&self) -> Option<usize> {
        self.voices.iter().position(|v| v.is_default)
    }
}

fn option_for(index: usize, voice: &Voice) -> VoiceOption {
    let mut label = voice.to_string();
    if voice.is_default {
        label.push_str(DEFAULT_VOICE_SUFFIX);
    }
    VoiceOption {
        label,
        name: voice.name.clone(),
        lang: voice.lang.clone(),
        index,
    }
}
