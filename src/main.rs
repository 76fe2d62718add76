#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based Payscope UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::sync::Arc;

use eframe::egui;
use payscope::config;
use payscope::egui_app::controller::AppController;
use payscope::egui_app::ui::{APP_TITLE, EguiApp, MIN_VIEWPORT_SIZE};
use payscope::logging;
use payscope::ml;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = config::load_or_default()?;
    let model = match ml::load_model(&settings.model.path) {
        Ok(model) => model,
        Err(err) => {
            tracing::error!(error = %err, "Unable to start without a model");
            return Err(err.into());
        }
    };
    let controller = AppController::new(Arc::new(model), &settings);

    let viewport = egui::ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_inner_size(egui::vec2(1100.0, 760.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_drag_and_drop(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(controller)))),
    )?;
    Ok(())
}
