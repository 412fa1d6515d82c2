use anyhow::{Context, Result};
use clap::Args;
use zoompan_core::color::{demo_swatches, Rgb};

use crate::summary;

#[derive(Args)]
pub struct ColorsArgs {
    /// Color codes to decode (e.g. "#00FFFF", 0xFF0000, 255). Shows the demo set when empty.
    pub codes: Vec<String>,

    /// Treat codes as bare radix-16 digits instead of prefixed literals
    #[arg(long)]
    pub hex: bool,
}

pub fn run(args: &ColorsArgs) -> Result<()> {
    let entries: Vec<(String, Rgb)> = if args.codes.is_empty() {
        demo_swatches()
            .into_iter()
            .map(|s| (s.label.to_string(), s.color))
            .collect()
    } else {
        args.codes
            .iter()
            .map(|code| {
                let color = if args.hex {
                    Rgb::parse_hex(code)
                } else {
                    Rgb::decode(code)
                };
                color
                    .with_context(|| format!("Cannot decode {code:?}"))
                    .map(|c| (code.clone(), c))
            })
            .collect::<Result<_>>()?
    };

    summary::print_colors(&entries);
    Ok(())
}
