use std::sync::mpsc;

use tracing::{info, warn};
use zoompan_core::config::AppConfig;
use zoompan_core::linked::LinkedValue;

use crate::convert::placeholder_image;
use crate::messages::AppMessage;
use crate::panels;
use crate::states::{ColorsState, UIState, ViewerState};

pub struct ZoompanApp {
    pub result_tx: mpsc::Sender<AppMessage>,
    pub result_rx: mpsc::Receiver<AppMessage>,
    pub ui_state: UIState,
    pub viewer: ViewerState,
    pub colors: ColorsState,
    pub linked: LinkedValue,
    pub config: AppConfig,
    pub show_about: bool,
}

impl ZoompanApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let config = AppConfig::default();

        let mut app = Self {
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            viewer: ViewerState::default(),
            colors: ColorsState::default(),
            linked: LinkedValue::default(),
            config,
            show_about: false,
        };

        let placeholder = placeholder_image(
            app.config.viewport.width as usize,
            app.config.viewport.height as usize,
        );
        app.update_viewer_texture(ctx, placeholder, "Placeholder");
        app
    }

    /// Drain all pending results from dialog threads.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                AppMessage::ImageLoaded { path, image } => {
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{})",
                        path.display(),
                        image.size[0],
                        image.size[1]
                    ));
                    let label = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    self.update_viewer_texture(ctx, image, &label);
                }
                AppMessage::ConfigImported { path, config } => {
                    self.apply_config(config, &path.display().to_string());
                }
                AppMessage::ConfigExported { path } => {
                    self.ui_state
                        .add_log(format!("Config saved: {}", path.display()));
                }
                AppMessage::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    fn update_viewer_texture(&mut self, ctx: &egui::Context, image: egui::ColorImage, label: &str) {
        let texture = ctx.load_texture("viewer", image, egui::TextureOptions::LINEAR);
        self.viewer.set_texture(texture, label);
    }

    /// Validate and install a config; the previous one stays on failure.
    pub fn apply_config(&mut self, config: AppConfig, origin: &str) {
        let result = config.validate().and_then(|()| {
            let linked = LinkedValue::from_config(&config.slider)?;
            self.viewer.apply_config(&config.view)?;
            Ok(linked)
        });
        match result {
            Ok(linked) => {
                self.linked = linked;
                self.config = config;
                info!(origin, "Config applied");
                self.ui_state.add_log(format!("Config loaded from {origin}"));
            }
            Err(e) => {
                warn!(origin, error = %e, "Config rejected");
                self.ui_state.add_log(format!("ERROR: {origin}: {e}"));
            }
        }
    }
}

impl eframe::App for ZoompanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::tabs::show(ctx, self);
        match self.ui_state.tab {
            crate::states::Tab::Viewer => panels::viewer::show(ctx, self),
            crate::states::Tab::Colors => panels::colors::show(ctx, self),
            crate::states::Tab::Slider => panels::slider::show(ctx, self),
        }

        if self.show_about {
            egui::Window::new("About Zoompan")
                .collapsible(false)
                .resizable(false)
                .open(&mut self.show_about)
                .show(ctx, |ui| {
                    ui.label("Pan/zoom viewer with bounded zoom levels.");
                    ui.label("Drag to pan, scroll to zoom around the view center.");
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                });
        }
    }
}
