use std::path::PathBuf;

use zoompan_core::config::AppConfig;

/// Results sent back to the UI thread from file-dialog threads.
pub enum AppMessage {
    ImageLoaded {
        path: PathBuf,
        image: egui::ColorImage,
    },
    ConfigImported {
        path: PathBuf,
        config: AppConfig,
    },
    ConfigExported {
        path: PathBuf,
    },
    Error {
        message: String,
    },
}
