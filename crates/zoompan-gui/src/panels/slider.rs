use crate::app::ZoompanApp;

use super::section_header;

pub fn show(ctx: &egui::Context, app: &mut ZoompanApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let spinner = *app.linked.spinner();
        let scrollbar = *app.linked.scrollbar();

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            section_header(ui, "Spinner", Some(&format!("step {}", spinner.step())));
            ui.horizontal(|ui| {
                let mut value = spinner.value();
                let response = ui.add(
                    egui::DragValue::new(&mut value)
                        .range(spinner.min()..=spinner.max())
                        .speed(f64::from(spinner.step())),
                );
                if response.changed() {
                    app.linked.set_from_spinner(value);
                }
                if ui
                    .add_enabled(spinner.next_value().is_some(), egui::Button::new("\u{25B2}"))
                    .clicked()
                {
                    app.linked.spin_next();
                }
                if ui
                    .add_enabled(spinner.previous_value().is_some(), egui::Button::new("\u{25BC}"))
                    .clicked()
                {
                    app.linked.spin_previous();
                }
            });
        });

        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            let range = scrollbar.range();
            section_header(
                ui,
                "Scrollbar",
                Some(&format!("extent {}, unit {}", range.extent(), scrollbar.unit_increment())),
            );
            ui.horizontal(|ui| {
                if ui.button("\u{00AB}").clicked() {
                    app.linked.scroll_block(-1);
                }
                if ui.button("\u{25C0}").clicked() {
                    app.linked.scroll_unit(-1);
                }

                let mut value = scrollbar.value();
                ui.spacing_mut().slider_width = (ui.available_width() - 80.0).max(100.0);
                let response = ui.add(
                    egui::Slider::new(&mut value, range.min()..=range.upper_value())
                        .show_value(false),
                );
                if response.changed() {
                    app.linked.set_from_scrollbar(value);
                }

                if ui.button("\u{25B6}").clicked() {
                    app.linked.scroll_unit(1);
                }
                if ui.button("\u{00BB}").clicked() {
                    app.linked.scroll_block(1);
                }
            });
        });

        ui.add_space(8.0);
        ui.label(format!("Shared value: {}", app.linked.value()));
    });
}
