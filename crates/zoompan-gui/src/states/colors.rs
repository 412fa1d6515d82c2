use zoompan_core::color::{demo_swatches, Rgb, Swatch};

/// Demo swatches plus a free-form code entry.
pub struct ColorsState {
    pub swatches: Vec<Swatch>,
    pub input: String,
    pub parsed: Result<Rgb, String>,
}

impl Default for ColorsState {
    fn default() -> Self {
        let input = "#FF00FF".to_string();
        Self {
            swatches: demo_swatches(),
            parsed: parse(&input),
            input,
        }
    }
}

impl ColorsState {
    pub fn update_input(&mut self) {
        self.parsed = parse(&self.input);
    }
}

fn parse(input: &str) -> Result<Rgb, String> {
    Rgb::decode(input.trim()).map_err(|e| e.to_string())
}
