use crate::app::ZoompanApp;
use crate::states::Tab;

pub fn show(ctx: &egui::Context, app: &mut ZoompanApp) {
    egui::SidePanel::left("tabs")
        .resizable(false)
        .default_width(170.0)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            for tab in Tab::ALL {
                ui.selectable_value(&mut app.ui_state.tab, tab, tab.to_string());
            }
        });
}
