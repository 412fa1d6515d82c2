use std::path::Path;

use anyhow::{Context, Result};
use zoompan_core::color::Rgb;

/// Decode an image file into an egui ColorImage.
pub fn load_color_image(path: &Path) -> Result<egui::ColorImage> {
    let rgba = image::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Checkerboard with a color ramp, shown until an image is opened.
pub fn placeholder_image(width: usize, height: usize) -> egui::ColorImage {
    const CELL: usize = 20;
    let mut pixels = Vec::with_capacity(width * height);

    for row in 0..height {
        for col in 0..width {
            let r = (col * 255 / width.max(1)) as u8;
            let b = (row * 255 / height.max(1)) as u8;
            let dark = (row / CELL + col / CELL) % 2 == 0;
            let g = if dark { 60 } else { 160 };
            pixels.push(egui::Color32::from_rgb(r, g, b));
        }
    }

    egui::ColorImage {
        size: [width, height],
        pixels,
        source_size: Default::default(),
    }
}

pub fn rgb_to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}
