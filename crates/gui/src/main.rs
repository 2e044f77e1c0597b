mod app;
pub mod i18n;
mod ui;
mod viewport;

// Re-export library modules so that `crate::build`, `crate::state`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use jview_gui_lib::build;
pub use jview_gui_lib::ramp;
pub use jview_gui_lib::state;

use app::JviewApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jview_gui=info,jview_gui_lib=info".into()),
        )
        .init();

    // Parse --model <path> argument
    let initial_model = parse_model_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("jview - 3D Structure Viewer")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "jview-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(JviewApp::new(cc, initial_model)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_model_arg() -> Option<std::path::PathBuf> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--model" && i + 1 < args.len() {
            let path = std::path::PathBuf::from(&args[i + 1]);
            if path.is_file() {
                tracing::info!("Loading model from {}", path.display());
                return Some(path);
            }
            tracing::error!("Model file not found: {}", path.display());
            break;
        }
        i += 1;
    }
    None
}
