use tracing::{debug, info};

use crate::caption::Captions;
use crate::config::MemeConfig;
use crate::error::{MemeError, Result};
use crate::geometry::DrawRect;
use crate::io::LoadedImage;
use crate::render::{compose_background, draw_captions, Surface};
use crate::speech::{SpeechSynthesizer, Utterance, Voice, VoiceCatalog};
use crate::volume::{VolumeLevel, VolumeTier};
use crate::workflow::{ButtonGates, WorkflowEvent, WorkflowState};

/// All state behind the meme editor.
///
/// Created once at startup. Each handler below is the only writer of the
/// fields it touches; the drawing surface and speech engine are passed in
/// by the caller.
pub struct MemeSession {
    config: MemeConfig,
    state: WorkflowState,
    image: Option<LoadedImage>,
    captions: Captions,
    volume: VolumeLevel,
    voices: VoiceCatalog,
    selected_voice: Option<usize>,
}

impl MemeSession {
    pub fn new(config: MemeConfig) -> Result<Self> {
        config.validate()?;
        let volume = VolumeLevel::new(config.speech.default_volume)?;
        Ok(Self {
            config,
            state: WorkflowState::NoImage,
            image: None,
            captions: Captions::default(),
            volume,
            voices: VoiceCatalog::new(),
            selected_voice: None,
        })
    }

    pub fn config(&self) -> &MemeConfig {
        &self.config
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn gates(&self) -> ButtonGates {
        self.state.gates()
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    pub fn captions(&self) -> &Captions {
        &self.captions
    }

    pub fn volume(&self) -> VolumeLevel {
        self.volume
    }

    pub fn voices(&self) -> &VoiceCatalog {
        &self.voices
    }

    /// Mutable access for subscribing listeners.
    pub fn voices_mut(&mut self) -> &mut VoiceCatalog {
        &mut self.voices
    }

    pub fn selected_voice(&self) -> Option<usize> {
        self.selected_voice
    }

    /// A new image was decoded: draw it letterboxed on the background.
    pub fn load_image(&mut self, image: LoadedImage, surface: &mut dyn Surface) -> Result<DrawRect> {
        let next = self.state.apply(WorkflowEvent::Load)?;
        let rect = compose_background(surface, &image.image, self.config.canvas.background)?;

        info!(name = %image.name, "Image loaded");
        self.image = Some(image);
        self.state = next;
        Ok(rect)
    }

    /// Draw the captions over the loaded image.
    pub fn generate(&mut self, captions: Captions, surface: &mut dyn Surface) -> Result<()> {
        let next = self.state.apply(WorkflowEvent::Generate)?;
        let image = self.image.as_ref().ok_or(MemeError::NoImageLoaded)?;

        compose_background(surface, &image.image, self.config.canvas.background)?;
        draw_captions(surface, &captions, &self.config.caption);

        debug!(top = %captions.top, bottom = %captions.bottom, "Meme generated");
        self.captions = captions;
        self.state = next;
        Ok(())
    }

    /// Clear the canvas. The image stays loaded so the meme can be
    /// generated again.
    pub fn reset(&mut self, surface: &mut dyn Surface) -> Result<()> {
        let next = self.state.apply(WorkflowEvent::Reset)?;
        surface.clear();
        debug!("Canvas cleared");
        self.state = next;
        Ok(())
    }

    /// The utterance for `captions` with the selected voice and volume.
    pub fn utterance(&self, captions: &Captions) -> Utterance {
        Utterance {
            text: captions.utterance_text(),
            voice: self.current_voice().cloned(),
            volume: self.volume.scalar(),
        }
    }

    /// Speak `captions` as they read now, which may differ from the ones
    /// last drawn, with the selected voice and volume.
    pub fn read(&mut self, captions: &Captions, synth: &mut dyn SpeechSynthesizer) -> Result<Utterance> {
        self.state.apply(WorkflowEvent::Read)?;
        let utterance = self.utterance(captions);
        synth.speak(&utterance)?;
        info!(engine = synth.name(), volume = utterance.volume, "Reading captions");
        Ok(utterance)
    }

    /// Volume range moved. Returns the icon tier to display.
    pub fn set_volume(&mut self, value: u8) -> Result<VolumeTier> {
        self.volume = VolumeLevel::new(value)?;
        Ok(self.volume.tier())
    }

    /// The engine reported its voice list (possibly long after startup).
    pub fn voices_changed(&mut self, voices: Vec<Voice>) {
        let previous = self.current_voice().cloned();
        self.voices.populate(voices);

        self.selected_voice = previous
            .and_then(|v| self.voices.voices().iter().position(|other| *other == v))
            .or_else(|| self.voices.default_index())
            .or_else(|| (!self.voices.voices().is_empty()).then_some(0));
    }

    pub fn select_voice(&mut self, index: usize) -> Result<()> {
        if self.voices.voice_for(index).is_none() {
            return Err(MemeError::InvalidArgument(format!(
                "voice index {index} out of range ({} voices)",
                self.voices.voices().len()
            )));
        }
        self.selected_voice = Some(index);
        Ok(())
    }

    fn current_voice(&self) -> Option<&Voice> {
        self.selected_voice.and_then(|i| self.voices.voice_for(i))
    }
}
