use crate::app::ZoompanApp;
use crate::convert::load_color_image;
use crate::messages::AppMessage;
use zoompan_core::config::AppConfig;

pub fn show(ctx: &egui::Context, app: &mut ZoompanApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Image...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_image(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let reset_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Num0);
                if ui.add(egui::Button::new("Reset View").shortcut_text(ctx.format_shortcut(&reset_shortcut))).clicked() {
                    ui.close();
                    reset_view(app);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Defaults").clicked() {
                    ui.close();
                    app.apply_config(AppConfig::default(), "defaults");
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_image(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Num0))) {
            reset_view(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn reset_view(app: &mut ZoompanApp) {
    app.viewer.controller.reset();
    app.ui_state.add_log("View reset".into());
}

fn open_image(app: &mut ZoompanApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif", "webp"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let message = match load_color_image(&path) {
                Ok(image) => AppMessage::ImageLoaded { path, image },
                Err(e) => AppMessage::Error {
                    message: format!("{e:#}"),
                },
            };
            let _ = result_tx.send(message);
        }
    });
}

fn import_config(app: &mut ZoompanApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let message = match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| toml::from_str::<AppConfig>(&content).map_err(|e| e.to_string()))
        {
            Ok(config) => AppMessage::ConfigImported { path, config },
            Err(message) => AppMessage::Error { message },
        };
        let _ = result_tx.send(message);
    });
}

fn export_config(app: &mut ZoompanApp) {
    let config = app.config.clone();
    let result_tx = app.result_tx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("zoompan.toml")
            .save_file()
        {
            let written = toml::to_string_pretty(&config)
                .map_err(|e| e.to_string())
                .and_then(|content| std::fs::write(&path, content).map_err(|e| e.to_string()));
            let message = match written {
                Ok(()) => AppMessage::ConfigExported { path },
                Err(message) => AppMessage::Error { message },
            };
            let _ = result_tx.send(message);
        }
    });
}
