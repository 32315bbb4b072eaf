mod common;

use tempfile::TempDir;

use memegen_core::caption::Captions;
use memegen_core::config::MemeConfig;
use memegen_core::io::{load_image, save_png};
use memegen_core::render::RasterSurface;
use memegen_core::session::MemeSession;
use memegen_core::workflow::WorkflowState;

use common::{make_image, voice, RecordingSynthesizer};

const CONFIG: &str = r#"
[canvas]
width = 300
height = 150
background = [255, 255, 255, 255]

[speech]
default_volume = 40
"#;

/// Config file, image file, two generate/read cycles, saved output.
#[test]
fn test_full_session_from_files() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("memegen.toml");
    let input = dir.path().join("square.png");
    let output = dir.path().join("meme.png");
    std::fs::write(&config_path, CONFIG).unwrap();
    make_image(100, 100, [0, 128, 255, 255]).save(&input).unwrap();

    let config = MemeConfig::load(&config_path).unwrap();
    let mut surface = RasterSurface::new(config.canvas.width, config.canvas.height);
    let mut session = MemeSession::new(config).unwrap();
    let mut synth = RecordingSynthesizer {
        voices: vec![voice("english", "en", true), voice("german", "de", false)],
        ..Default::default()
    };

    session.voices_changed(synth.voices.clone());
    session.select_voice(1).unwrap();

    // Square image in a 2:1 canvas: height-driven, centered horizontally.
    let rect = session
        .load_image(load_image(&input).unwrap(), &mut surface)
        .unwrap();
    assert_eq!(rect.to_pixels().x, 75);
    assert_eq!(rect.to_pixels().width, 150);
    assert_eq!(session.state(), WorkflowState::ImageLoaded);

    session
        .generate(Captions::new("HI", "THERE"), &mut surface)
        .unwrap();
    let first = session
        .read(&Captions::new("HI", "THERE"), &mut synth)
        .unwrap();
    assert_eq!(first.text, "HI THERE");
    assert_eq!(first.voice.as_ref().map(|v| v.lang.as_str()), Some("de"));
    assert!((first.volume - 0.4).abs() < 1e-6);

    session.reset(&mut surface).unwrap();
    assert_eq!(surface.image().get_pixel(10, 75).0[3], 0);
    assert!(!session.gates().read);

    session
        .generate(Captions::new("", "AGAIN"), &mut surface)
        .unwrap();
    let second = session
        .read(&Captions::new("", "AGAIN"), &mut synth)
        .unwrap();
    assert_eq!(second.text, " AGAIN");
    assert_eq!(synth.spoken.len(), 2);

    save_png(surface.image(), &output).unwrap();
    let saved = image::open(&output).unwrap().to_rgba8();
    assert_eq!(saved.dimensions(), (300, 150));
    assert_eq!(saved.get_pixel(10, 75).0, [255, 255, 255, 255]);
    assert_eq!(saved.get_pixel(100, 75).0, [0, 128, 255, 255]);
}
