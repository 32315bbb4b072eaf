mod common;

use std::cell::RefCell;
use std::rc::Rc;

use memegen_core::speech::{
    parse_voice_table, LoggingSynthesizer, SpeechSynthesizer, Utterance, VoiceCatalog,
    VoiceListener, VoiceOption,
};

use common::voice;

const ESPEAK_VOICES: &str = "\
Pty Language       Age/Gender VoiceName          File                 Other Languages
 5  af              --/M      Afrikaans          gmw/af
 5  de              --/M      German             gmw/de
 2  en              --/M      English            gmw/en
 5  en-gb           --/M      English_(Great_Britain) gmw/en-GB-x-gbclan (en 2)
 5  en-us           --/M      English_(America)  gmw/en-US            (en 3)
";

struct Recorder(Rc<RefCell<Vec<Vec<String>>>>);

impl VoiceListener for Recorder {
    fn voices_changed(&mut self, options: &[VoiceOption]) {
        self.0
            .borrow_mut()
            .push(options.iter().map(|o| o.label.clone()).collect());
    }
}

// ---------------------------------------------------------------------------
// VoiceCatalog
// ---------------------------------------------------------------------------

#[test]
fn test_catalog_starts_empty_and_not_ready() {
    let catalog = VoiceCatalog::new();
    assert!(!catalog.is_ready());
    assert!(catalog.voices().is_empty());
    assert!(catalog.options().is_empty());
    assert_eq!(catalog.default_index(), None);
}

#[test]
fn test_catalog_option_labels() {
    let mut catalog = VoiceCatalog::new();
    catalog.populate(vec![
        voice("Alex", "en-US", true),
        voice("Amelie", "fr-CA", false),
    ]);

    assert!(catalog.is_ready());
    let labels: Vec<_> = catalog.options().iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Alex (en-US) -- DEFAULT", "Amelie (fr-CA)"]);
    assert_eq!(catalog.options()[1].index, 1);
    assert_eq!(catalog.options()[1].lang, "fr-CA");
    assert_eq!(catalog.options()[1].name, "Amelie");
    assert_eq!(catalog.default_index(), Some(0));
}

#[test]
fn test_catalog_voice_for_index() {
    let mut catalog = VoiceCatalog::new();
    catalog.populate(vec![voice("A", "en", false), voice("B", "de", false)]);
    assert_eq!(catalog.voice_for(1).unwrap().name, "B");
    assert!(catalog.voice_for(2).is_none());
}

#[test]
fn test_catalog_notifies_listeners_on_every_populate() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut catalog = VoiceCatalog::new();
    catalog.subscribe(Box::new(Recorder(seen.clone())));

    catalog.populate(Vec::new());
    catalog.populate(vec![voice("A", "en", false)]);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].is_empty());
    assert_eq!(seen[1], vec!["A (en)".to_string()]);
}

#[test]
fn test_empty_populate_still_marks_ready() {
    let mut catalog = VoiceCatalog::new();
    catalog.populate(Vec::new());
    assert!(catalog.is_ready());
}

// ---------------------------------------------------------------------------
// espeak-ng voice table
// ---------------------------------------------------------------------------

#[test]
fn test_parse_voice_table() {
    let voices = parse_voice_table(ESPEAK_VOICES);
    assert_eq!(voices.len(), 5);

    assert_eq!(voices[0].name, "Afrikaans");
    assert_eq!(voices[0].lang, "af");
    assert_eq!(voices[0].identifier, "gmw/af");

    assert_eq!(voices[3].name, "English (Great Britain)");
    assert_eq!(voices[3].identifier, "gmw/en-GB-x-gbclan");
}

#[test]
fn test_parse_voice_table_flags_single_default() {
    let voices = parse_voice_table(ESPEAK_VOICES);
    let defaults: Vec<_> = voices.iter().filter(|v| v.is_default).collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].lang, "en");
}

#[test]
fn test_parse_voice_table_ignores_garbage() {
    assert!(parse_voice_table("").is_empty());
    assert!(parse_voice_table("Pty Language Age/Gender VoiceName File\n").is_empty());
    assert!(parse_voice_table("too few fields\n").is_empty());
}

// ---------------------------------------------------------------------------
// LoggingSynthesizer
// ---------------------------------------------------------------------------

#[test]
fn test_logging_synthesizer_accepts_everything() {
    let mut synth = LoggingSynthesizer::default();
    assert_eq!(synth.name(), "log");
    assert!(synth.voices().unwrap().is_empty());

    let utterance = Utterance {
        text: "top bottom".into(),
        voice: None,
        volume: 0.5,
    };
    synth.speak(&utterance).unwrap();
    synth.speak(&utterance).unwrap();
    synth.wait_idle();
    assert_eq!(synth.spoken(), 2);
}

#[test]
fn test_voice_display() {
    assert_eq!(voice("Alex", "en-US", true).to_string(), "Alex (en-US)");
}
