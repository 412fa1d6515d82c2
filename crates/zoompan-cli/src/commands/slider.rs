use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use zoompan_core::linked::LinkedValue;

use crate::summary;

#[derive(Args)]
pub struct SliderArgs {
    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Drag the scrollbar to this value
    #[arg(long, allow_hyphen_values = true)]
    pub scroll: Option<i32>,

    /// Type this value into the spinner
    #[arg(long, allow_hyphen_values = true)]
    pub spin: Option<i32>,

    /// Click the scrollbar arrows this many times (negative = left)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub unit: i32,

    /// Click the scrollbar track this many times (negative = left)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub block: i32,

    /// Press the spinner's up arrow this many times
    #[arg(long, default_value = "0")]
    pub next: u32,

    /// Press the spinner's down arrow this many times
    #[arg(long, default_value = "0")]
    pub previous: u32,
}

pub fn run(args: &SliderArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let mut linked = LinkedValue::from_config(&config.slider)?;
    let mut changes = 0usize;

    if let Some(v) = args.scroll {
        changes += usize::from(linked.set_from_scrollbar(v));
    }
    if let Some(v) = args.spin {
        changes += usize::from(linked.set_from_spinner(v));
    }
    for _ in 0..args.unit.unsigned_abs() {
        changes += usize::from(linked.scroll_unit(args.unit.signum()));
    }
    for _ in 0..args.block.unsigned_abs() {
        changes += usize::from(linked.scroll_block(args.block.signum()));
    }
    for _ in 0..args.next {
        changes += usize::from(linked.spin_next());
    }
    for _ in 0..args.previous {
        changes += usize::from(linked.spin_previous());
    }

    summary::print_linked_value(&linked, changes);
    Ok(())
}
