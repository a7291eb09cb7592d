//! egui renderer for the prediction form.

mod form_panel;
mod raw_request_panel;
mod result_panel;
mod sidebar;
mod status_bar;
pub mod style;
mod top_bar;

use std::sync::Arc;
use std::time::Duration;

use crate::api::HttpBackend;
use crate::config::{AppConfig, ConfigError};
use crate::egui_app::controller::EguiController;
use crate::egui_app::state::ViewMode;
use eframe::egui::{self, Frame, Margin, RichText};

/// Smallest window that still fits the sidebar next to two field columns.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(900.0, 600.0);
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Build the app from loaded configuration and start the initial backend
    /// fetches. Configuration and backend URL errors are returned for the
    /// launch-error view instead of falling back to defaults.
    pub fn new(config: Result<AppConfig, ConfigError>) -> Result<Self, String> {
        let config = config.map_err(|err| format!("Failed to load config: {err}"))?;
        let backend = HttpBackend::new(&config.api)
            .map_err(|err| format!("Invalid backend settings: {err}"))?;
        tracing::info!("Using prediction backend at {}", backend.base_url());
        Ok(Self::with_controller(EguiController::new(
            Arc::new(backend),
            &config.ui,
        )))
    }

    /// Wrap an existing controller and start the initial backend fetches.
    pub fn with_controller(mut controller: EguiController) -> Self {
        controller.start();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    /// Blocking view shown when the field schema could not be loaded.
    fn render_fatal(&mut self, ctx: &egui::Context, message: &str) {
        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::same(24)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(48.0);
                    ui.label(
                        RichText::new("Prediction service unavailable")
                            .heading()
                            .color(palette.error),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(message).color(palette.text_primary));
                    ui.add_space(16.0);
                    if ui.button("Retry").clicked() {
                        self.controller.load_meta();
                        self.controller.check_health();
                    }
                });
            });
    }

    fn render_loading(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                ui.spinner();
                ui.label(
                    RichText::new(&self.controller.ui.status.text)
                        .color(style::palette().text_muted),
                );
            });
        });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.render_status(ctx);
        if let Some(error) = self.controller.ui.fatal_error.clone() {
            self.render_fatal(ctx, &error.to_string());
        } else {
            self.render_top_bar(ctx);
            match self.controller.ui.view {
                ViewMode::Form if !self.controller.form_ready() => self.render_loading(ctx),
                ViewMode::Form => {
                    self.render_sidebar(ctx);
                    self.render_form(ctx);
                }
                ViewMode::RawRequest => {
                    self.render_sidebar(ctx);
                    self.render_raw_request(ctx);
                }
            }
        }
        if self.controller.has_pending_jobs() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}
