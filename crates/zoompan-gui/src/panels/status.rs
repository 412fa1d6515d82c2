use crate::app::ZoompanApp;

pub fn show(ctx: &egui::Context, app: &mut ZoompanApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            let controller = &app.viewer.controller;
            if let Some(ref size) = app.viewer.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            let (min, max) = controller.zoom_bounds();
            ui.label(format!("Zoom level: {} ({min}..={max})", controller.zoom_level()));
            ui.separator();
            ui.label(format!("Scale: {:.0}%", controller.scale() * 100.0));
            ui.separator();
            ui.label(format!("Linked value: {}", app.linked.value()));
        });

        ui.add_space(2.0);
    });
}
