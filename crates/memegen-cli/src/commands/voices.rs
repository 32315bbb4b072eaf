use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use memegen_core::speech::{detect_synthesizer, VoiceCatalog};

#[derive(Args)]
pub struct VoicesArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &VoicesArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let mut synth = detect_synthesizer(&config.speech);

    let mut catalog = VoiceCatalog::new();
    catalog.populate(synth.voices()?);

    if catalog.options().is_empty() {
        println!("No voices available ({})", synth.name());
        return Ok(());
    }

    for option in catalog.options() {
        println!("{:>4}  {}", option.index, option.label);
    }

    Ok(())
}
