//! Primer Design Tool - desktop front end
//!
//! Paste or load a DNA template, pick a search strategy and get a
//! forward/reverse primer pair.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;

use app::PrimerDesignApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 560.0])
            .with_min_inner_size([700.0, 450.0])
            .with_title("Primer Design Tool"),
        ..Default::default()
    };

    eframe::run_native(
        "Primer Design Tool",
        native_options,
        Box::new(|cc| Ok(Box::new(PrimerDesignApp::new(cc)))),
    )
}
