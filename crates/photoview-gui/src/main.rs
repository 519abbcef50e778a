mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod surface;

use std::path::PathBuf;

use photoview_core::config::ViewerConfig;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Optional image to open on start
    let initial = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([320.0, 240.0])
            .with_title("PhotoView"),
        ..Default::default()
    };

    eframe::run_native(
        "PhotoView",
        options,
        Box::new(|cc| {
            let app = app::PhotoViewApp::new(&cc.egui_ctx, ViewerConfig::default(), initial)?;
            Ok(Box::new(app))
        }),
    )
}
