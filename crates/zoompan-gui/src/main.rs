mod app;
mod convert;
mod messages;
mod panels;
mod states;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Zoompan"),
        ..Default::default()
    };

    eframe::run_native(
        "Zoompan",
        options,
        Box::new(|cc| Ok(Box::new(app::ZoompanApp::new(&cc.egui_ctx)))),
    )
}
