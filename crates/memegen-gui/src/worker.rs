use std::path::Path;
use std::sync::mpsc;

use memegen_core::config::SpeechConfig;
use memegen_core::error::{MemeError, Result as CoreResult};
use memegen_core::image::RgbaImage;
use memegen_core::io::{load_image, save_png};
use memegen_core::speech::{detect_synthesizer, SpeechSynthesizer, Utterance, Voice};

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
///
/// The worker owns the speech engine; the UI only ever talks to it through
/// [`WorkerCommand`]s.
pub fn spawn_worker(
    speech: SpeechConfig,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("memegen-worker".into())
        .spawn(move || {
            worker_loop(speech, cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

/// Deliver a result and wake the UI so it is drained on the next frame.
pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    speech: SpeechConfig,
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let mut synth = detect_synthesizer(&speech);

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::DecodeImage { path } => {
                handle_decode_image(&path, &tx, &ctx);
            }
            WorkerCommand::LoadVoices => {
                handle_load_voices(synth.as_mut(), &tx, &ctx);
            }
            WorkerCommand::Speak { utterance } => {
                handle_speak(synth.as_mut(), &utterance, &tx, &ctx);
            }
            WorkerCommand::SaveImage { path, image } => {
                handle_save_image(&path, &image, &tx, &ctx);
            }
            WorkerCommand::Configure { speech } => {
                synth = detect_synthesizer(&speech);
                send_log(&tx, &ctx, format!("Speech engine: {}", synth.name()));
                handle_load_voices(synth.as_mut(), &tx, &ctx);
            }
        }
    }
}

fn handle_decode_image(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match load_image(path) {
        Ok(image) => send(tx, ctx, WorkerResult::ImageDecoded { image }),
        Err(e) => send_error(tx, ctx, format!("Failed to open {}: {e}", path.display())),
    }
}

fn handle_load_voices(
    synth: &mut dyn SpeechSynthesizer,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match synth.voices() {
        Ok(voices) => send(
            tx,
            ctx,
            WorkerResult::VoicesReady {
                engine: synth.name().to_string(),
                voices,
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Voice list unavailable: {e}")),
    }
}

fn handle_speak(
    synth: &mut dyn SpeechSynthesizer,
    utterance: &Utterance,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    if let Err(e) = synth.speak(utterance) {
        send_error(tx, ctx, format!("Speech failed: {e}"));
    }
}

fn handle_save_image(
    path: &Path,
    image: &RgbaImage,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match save_png(image, path) {
        Ok(()) => send(tx, ctx, WorkerResult::ImageSaved { path: path.to_path_buf() }),
        Err(e) => send_error(tx, ctx, format!("Failed to save {}: {e}", path.display())),
    }
}

/// Synthesizer handle for the UI thread: forwards utterances to the worker,
/// which owns the real engine.
pub struct WorkerSpeech {
    cmd_tx: mpsc::Sender<WorkerCommand>,
}

impl WorkerSpeech {
    pub fn new(cmd_tx: mpsc::Sender<WorkerCommand>) -> Self {
        Self { cmd_tx }
    }
}

impl SpeechSynthesizer for WorkerSpeech {
    fn name(&self) -> &str {
        "worker"
    }

    fn voices(&mut self) -> CoreResult<Vec<Voice>> {
        // Voices arrive asynchronously as `WorkerResult::VoicesReady`.
        Ok(Vec::new())
    }

    fn speak(&mut self, utterance: &Utterance) -> CoreResult<()> {
        self.cmd_tx
            .send(WorkerCommand::Speak {
                utterance: utterance.clone(),
            })
            .map_err(|_| MemeError::Speech("worker stopped".into()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_send_requests_repaint() {
        let ctx = egui::Context::default();
        let repainted = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&repainted);
        ctx.set_request_repaint_callback(move |_| flag.store(true, Ordering::SeqCst));

        let (tx, rx) = mpsc::channel();
        send(&tx, &ctx, WorkerResult::Log { message: "Config exported".into() });

        assert!(matches!(rx.try_recv(), Ok(WorkerResult::Log { .. })));
        assert!(repainted.load(Ordering::SeqCst));
    }

    #[test]
    fn test_worker_speech_forwards_utterance() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let mut speech = WorkerSpeech::new(cmd_tx);
        let utterance = Utterance {
            text: "TOP BOTTOM".into(),
            voice: None,
            volume: 0.5,
        };

        speech.speak(&utterance).unwrap();
        match cmd_rx.try_recv() {
            Ok(WorkerCommand::Speak { utterance: sent }) => assert_eq!(sent, utterance),
            _ => panic!("expected a Speak command"),
        }

        drop(cmd_rx);
        assert!(matches!(speech.speak(&utterance), Err(MemeError::Speech(_))));
    }
}
