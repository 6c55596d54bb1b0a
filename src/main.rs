mod app;

use app::AppwriteUploader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "appwrite_uploader=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([600.0, 700.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    if let Err(error) = eframe::run_native(
        "Appwrite File Uploader",
        options,
        Box::new(|cc: &eframe::CreationContext| Box::new(AppwriteUploader::new(cc))),
    ) {
        tracing::error!(%error, "failed to start the application");
    }
}
