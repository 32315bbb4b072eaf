use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread::JoinHandle;

use tracing::{debug, warn};

use crate::consts::ESPEAK_FULL_AMPLITUDE;
use crate::error::{MemeError, Result};

use super::{SpeechSynthesizer, Utterance, Voice};

/// Language of the voice espeak-ng uses when none is given.
const ESPEAK_DEFAULT_LANG: &str = "en";

/// Speech through the `espeak-ng` command-line engine.
pub struct EspeakSynthesizer {
    bin: PathBuf,
    playing: Vec<JoinHandle<()>>,
}

impl EspeakSynthesizer {
    pub fn new(bin: PathBuf) -> Self {
        Self {
            bin,
            playing: Vec::new(),
        }
    }

    /// True if the binary can be executed.
    pub fn is_available(&self) -> bool {
        Command::new(&self.bin)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn reap_finished(&mut self) {
        self.playing.retain(|handle| !handle.is_finished());
    }
}

/// Amplitude argument for a [0, 1] volume.
fn amplitude(volume: f32) -> u32 {
    (volume.clamp(0.0, 1.0) * ESPEAK_FULL_AMPLITUDE).round() as u32
}

impl SpeechSynthesizer for EspeakSynthesizer {
    fn name(&self) -> &str {
        "espeak-ng"
    }

    fn voices(&mut self) -> Result<Vec<Voice>> {
        let output = Command::new(&self.bin)
            .arg("--voices")
            .output()
            .map_err(|e| MemeError::Speech(format!("failed to run espeak-ng: {e}")))?;
        if !output.status.success() {
            return Err(MemeError::Speech(format!(
                "espeak-ng --voices exited with {}",
                output.status
            )));
        }
        let voices = parse_voice_table(&String::from_utf8_lossy(&output.stdout));
        debug!(count = voices.len(), "espeak-ng voices listed");
        Ok(voices)
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        self.reap_finished();

        let mut cmd = Command::new(&self.bin);
        cmd.arg("-a").arg(amplitude(utterance.volume).to_string());
        if let Some(ref voice) = utterance.voice {
            cmd.arg("-v").arg(&voice.identifier);
        }
        cmd.arg("--stdin")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let mut child = cmd
            .spawn()
            .map_err(|e| MemeError::Speech(format!("failed to start espeak-ng: {e}")))?;
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(utterance.text.as_bytes()) {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(MemeError::Speech(format!(
                    "failed to send text to espeak-ng: {e}"
                )));
            }
        }

        let handle = std::thread::Builder::new()
            .name("memegen-speech".into())
            .spawn(move || match child.wait() {
                Ok(status) if !status.success() => {
                    warn!(%status, "espeak-ng exited with an error");
                }
                Ok(_) => debug!("Utterance finished"),
                Err(e) => warn!("Failed to wait for espeak-ng: {e}"),
            })?;
        self.playing.push(handle);
        Ok(())
    }

    fn wait_idle(&mut self) {
        for handle in self.playing.drain(..) {
            if handle.join().is_err() {
                warn!("Speech playback thread panicked");
            }
        }
    }
}

/// Parse the table printed by `espeak-ng --voices`.
///
/// Columns: priority, language, age/gender, voice name, file, other
/// languages. Underscores in names stand for spaces. The first voice for
/// the engine's default language is flagged as default.
pub fn parse_voice_table(table: &str) -> Vec<Voice> {
    let mut voices = Vec::new();
    let mut default_seen = false;

    for line in table.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 5 || fields[0] == "Pty" {
            continue;
        }

        let lang = fields[1].to_string();
        let is_default = !default_seen && lang == ESPEAK_DEFAULT_LANG;
        default_seen |= is_default;

        voices.push(Voice {
            name: fields[3].replace('_', " "),
            lang,
            identifier: fields[4].to_string(),
            is_default,
        });
    }

    voices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amplitude_scales_and_clamps() {
        assert_eq!(amplitude(0.0), 0);
        assert_eq!(amplitude(0.5), 50);
        assert_eq!(amplitude(1.0), 100);
        assert_eq!(amplitude(3.0), 100);
        assert_eq!(amplitude(-1.0), 0);
    }

    #[test]
    fn test_wait_idle_survives_panicked_playback() {
        let mut synth = EspeakSynthesizer::new(PathBuf::from("espeak-ng"));
        synth.playing.push(std::thread::spawn(|| panic!("playback died")));
        synth.playing.push(std::thread::spawn(|| ()));
        synth.wait_idle();
        assert!(synth.playing.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_speak_reports_engine_that_closes_stdin() {
        // `true` exits without reading; a payload larger than the pipe
        // buffer makes the write fail.
        let mut synth = EspeakSynthesizer::new(PathBuf::from("true"));
        let utterance = Utterance {
            text: "meme ".repeat(200_000),
            voice: None,
            volume: 1.0,
        };
        assert!(matches!(synth.speak(&utterance), Err(MemeError::Speech(_))));
        assert!(synth.playing.is_empty());
    }
}
