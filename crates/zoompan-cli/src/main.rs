mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "zoompan", about = "Pan/zoom view transform toolkit")]
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
    /// Replay a recorded drag/wheel event script and print the final transform
    Replay(commands::replay::ReplayArgs),
    /// Print or save the default configuration as TOML
    Config(commands::config::ConfigArgs),
    /// Decode color codes and print them as #rrggbb
    Colors(commands::colors::ColorsArgs),
    /// Drive the linked scrollbar/spinner value
    Slider(commands::slider::SliderArgs),
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
        Commands::Replay(args) => commands::replay::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Colors(args) => commands::colors::run(args),
        Commands::Slider(args) => commands::slider::run(args),
    }
}
