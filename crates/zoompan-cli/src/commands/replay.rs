use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use zoompan_core::controller::ViewController;
use zoompan_core::event::EventScript;

use crate::summary;

#[derive(Args)]
pub struct ReplayArgs {
    /// Event script (TOML with a [viewport] table and [[events]] entries)
    pub script: PathBuf,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the transform after every event
    #[arg(long)]
    pub trace: bool,
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;

    let contents = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script: EventScript = toml::from_str(&contents).context("Invalid event script")?;

    let viewport = script.viewport.unwrap_or(config.viewport);
    viewport.validate()?;
    let bounds = viewport.bounds();

    let mut controller = ViewController::from_config(&config.view)?;
    let mut redraws = 0usize;

    for (i, event) in script.events.iter().enumerate() {
        let redraw = controller.handle(event, bounds);
        if redraw {
            redraws += 1;
        }
        if args.trace {
            summary::print_step(i + 1, event, redraw, &controller);
        }
    }

    info!(events = script.events.len(), redraws, "Replay complete");
    summary::print_replay_summary(&controller, &viewport, script.events.len(), redraws);

    Ok(())
}
