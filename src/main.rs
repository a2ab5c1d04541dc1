use eframe::egui;
use product_explorer::{
    core::Settings,
    gui::ExplorerApp,
};
use tracing::{
    error,
    info,
};
use tracing_subscriber::{
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_explorer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load();
    info!("Using catalog at {}", settings.catalog_base_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Product Explorer")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Product Explorer",
        options,
        Box::new(|cc| Ok(Box::new(ExplorerApp::new(cc, settings)?))),
    );

    if let Err(e) = result {
        error!("Product Explorer exited with an error: {}", e);
        std::process::exit(1);
    }
}
