use super::EguiApp;
use super::style;
use crate::egui_app::view_model::{self, ResultView};
use eframe::egui::{self, RichText};

impl EguiApp {
    pub(super) fn render_result_card(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.label(RichText::new("Result").strong());
        ui.add_space(4.0);
        if let Some(error) = &self.controller.ui.sample_error {
            ui.label(
                RichText::new(error.to_string())
                    .small()
                    .color(palette.warning),
            );
        }
        match view_model::result_view(&self.controller.ui.prediction) {
            ResultView::Idle => {
                ui.label(RichText::new("Run prediction to see results.").color(palette.text_muted));
            }
            ResultView::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Predicting...").color(palette.text_muted));
                });
            }
            ResultView::Error(message) => {
                egui::Frame::new()
                    .stroke(egui::Stroke::new(1.0, palette.error))
                    .inner_margin(egui::Margin::same(6))
                    .show(ui, |ui| {
                        ui.label(RichText::new(message).monospace().color(palette.error));
                    });
            }
            ResultView::Success(view) => {
                ui.horizontal(|ui| {
                    ui.label("Label");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(&view.label)
                                .strong()
                                .color(style::verdict_color(view.positive)),
                        );
                    });
                });
                ui.label("Churn probability");
                ui.add(
                    egui::ProgressBar::new(view.fraction)
                        .text(view.percent_text.as_str())
                        .fill(style::verdict_color(view.positive)),
                );
                ui.label(
                    RichText::new(format!("P(Yes) = {}", view.raw_text))
                        .small()
                        .color(palette.text_muted),
                );
            }
        }
    }

    pub(super) fn render_monitoring_card(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new(RichText::new("Monitoring").strong())
            .id_salt("monitoring_card")
            .default_open(true)
            .show(ui, |ui| {
                let loading = self.controller.ui.monitoring.loading;
                if ui.add_enabled(!loading, egui::Button::new("Refresh")).clicked() {
                    self.controller.refresh_monitoring();
                }
                self.render_monitoring_rows(ui);
            });
    }

    fn render_monitoring_rows(&self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let monitoring = &self.controller.ui.monitoring;
        if let Some(error) = &monitoring.last_error {
            ui.label(RichText::new(error).small().color(palette.warning));
        }
        let rows = monitoring
            .stats
            .as_ref()
            .map(view_model::monitoring_rows)
            .unwrap_or_default();
        if rows.is_empty() {
            ui.label(RichText::new("No predictions recorded yet.").color(palette.text_muted));
            return;
        }
        egui::Grid::new("monitoring_stats")
            .num_columns(2)
            .show(ui, |ui| {
                for (label, value) in rows {
                    ui.label(RichText::new(label).color(palette.text_muted));
                    ui.label(value);
                    ui.end_row();
                }
            });
    }
}
