use std::path::Path;

use console::Style;
use memegen_core::caption::Captions;
use memegen_core::config::MemeConfig;
use memegen_core::geometry::DrawRect;
use memegen_core::speech::Utterance;
use memegen_core::volume::VolumeLevel;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn caption_or_empty(s: &Styles, text: &str) -> String {
    if text.is_empty() {
        s.disabled.apply_to("(empty)").to_string()
    } else {
        s.value.apply_to(format!("\"{text}\"")).to_string()
    }
}

pub fn print_render_summary(
    input: &Path,
    output: &Path,
    config: &MemeConfig,
    image_size: (u32, u32),
    rect: &DrawRect,
    captions: &Captions,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Meme"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!("  {:<10}{}", s.label.apply_to("Input"), s.path.apply_to(input.display()));
    println!("  {:<10}{}", s.label.apply_to("Output"), s.path.apply_to(output.display()));
    println!(
        "  {:<10}{}",
        s.label.apply_to("Image"),
        s.value.apply_to(format!("{}x{}", image_size.0, image_size.1))
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Canvas"),
        s.value.apply_to(format!("{}x{}", config.canvas.width, config.canvas.height))
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Placed"),
        s.value.apply_to(format!(
            "{:.1}x{:.1} at ({:.1}, {:.1})",
            rect.width, rect.height, rect.offset_x, rect.offset_y
        ))
    );
    println!("  {:<10}{}", s.label.apply_to("Top"), caption_or_empty(&s, &captions.top));
    println!(
        "  {:<10}{}",
        s.label.apply_to("Bottom"),
        caption_or_empty(&s, &captions.bottom)
    );
    println!();
}

pub fn print_speech_summary(engine: &str, utterance: &Utterance, volume: VolumeLevel) {
    let s = Styles::new();

    let voice = utterance
        .voice
        .as_ref()
        .map(|v| s.value.apply_to(v.to_string()).to_string())
        .unwrap_or_else(|| s.disabled.apply_to("engine default").to_string());

    println!(
        "  {:<10}{}",
        s.label.apply_to("Engine"),
        s.value.apply_to(engine)
    );
    println!("  {:<10}{}", s.label.apply_to("Voice"), voice);
    println!(
        "  {:<10}{} {}",
        s.label.apply_to("Volume"),
        volume.tier().glyph(),
        s.value.apply_to(format!("{}% ({})", volume.value(), volume.tier()))
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Text"),
        caption_or_empty(&s, &utterance.text)
    );
}
