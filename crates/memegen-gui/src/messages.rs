use std::path::PathBuf;

use memegen_core::config::{MemeConfig, SpeechConfig};
use memegen_core::image::RgbaImage;
use memegen_core::io::LoadedImage;
use memegen_core::speech::{Utterance, Voice};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image file picked in the file dialog.
    DecodeImage { path: PathBuf },

    /// Ask the speech engine for its voice list.
    LoadVoices,

    /// Start speaking. Returns immediately; playback continues in the background.
    Speak { utterance: Utterance },

    /// Write the canvas to disk as PNG.
    SaveImage { path: PathBuf, image: RgbaImage },

    /// Replace the speech engine after a config import.
    Configure { speech: SpeechConfig },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageDecoded {
        image: LoadedImage,
    },
    VoicesReady {
        engine: String,
        voices: Vec<Voice>,
    },
    ConfigImported {
        config: MemeConfig,
    },
    ImageSaved {
        path: PathBuf,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
