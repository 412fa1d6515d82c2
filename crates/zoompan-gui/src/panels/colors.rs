use crate::app::ZoompanApp;
use crate::convert::rgb_to_color32;

use super::section_header;

pub fn show(ctx: &egui::Context, app: &mut ZoompanApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            section_header(ui, "Swatches", Some("foreground set from each code"));
            for swatch in &app.colors.swatches {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.small(swatch.label);
                    ui.colored_label(
                        rgb_to_color32(swatch.color),
                        egui::RichText::new(swatch.color.to_string()).monospace().size(16.0),
                    );
                });
            }

            ui.add_space(12.0);
            section_header(ui, "Decode", Some("#rgb hex, 0x hex, 0 octal, decimal"));
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut app.colors.input)
                        .desired_width(160.0)
                        .font(egui::TextStyle::Monospace),
                );
                if response.changed() {
                    app.colors.update_input();
                }

                match &app.colors.parsed {
                    Ok(color) => {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(48.0, 20.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 2.0, rgb_to_color32(*color));
                        ui.monospace(color.to_string());
                    }
                    Err(message) => {
                        ui.colored_label(ui.visuals().error_fg_color, message);
                    }
                }
            });
        });
    });
}
