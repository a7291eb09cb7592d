#![deny(missing_docs)]

//! Entry point for the egui prediction form.
use eframe::egui;
use predictform::config;
use predictform::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use predictform::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_or_default();
    let logging_settings = config
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    if let Err(err) = logging::init(&logging_settings) {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1200.0, 800.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Churn Predictor",
        native_options,
        Box::new(move |_cc| match EguiApp::new(config) {
            Ok(app) => Ok(Box::new(app)),
            Err(err) => {
                tracing::error!("{err}");
                Ok(Box::new(LaunchError { message: err }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
