mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "memegen", about = "Caption images and read the captions aloud")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw captions over an image and save the result
    Render(commands::render::RenderArgs),
    /// Show where an image of a given size lands on the canvas
    Fit(commands::fit::FitArgs),
    /// List the speech voices available on this machine
    Voices(commands::voices::VoicesArgs),
    /// Read captions aloud
    Speak(commands::speak::SpeakArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Fit(args) => commands::fit::run(args),
        Commands::Voices(args) => commands::voices::run(args),
        Commands::Speak(args) => commands::speak::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
