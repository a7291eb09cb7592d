use super::EguiApp;
use super::style;
use crate::egui_app::state::ViewMode;
use crate::egui_app::view_model;
use eframe::egui::{self, Frame, Margin, RichText, StrokeKind};

impl EguiApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Churn Predictor")
                            .heading()
                            .color(palette.text_primary),
                    );
                    ui.add_space(12.0);
                    self.render_health_badge(ui);
                    ui.separator();
                    self.render_view_switch(ui);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.render_actions(ui);
                    });
                });
            });
    }

    fn render_health_badge(&mut self, ui: &mut egui::Ui) {
        let (label, tone, reason) = view_model::health_badge(&self.controller.ui.api_health);
        let (badge_rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(badge_rect, 0.0, style::status_badge_color(tone));
        ui.painter()
            .rect_stroke(badge_rect, 0.0, style::inner_border(), StrokeKind::Inside);
        let response = ui
            .add(
                egui::Label::new(RichText::new(label).color(style::palette().text_muted))
                    .sense(egui::Sense::click()),
            )
            .on_hover_text(reason.unwrap_or_else(|| "Click to re-check".to_string()));
        if response.clicked() {
            self.controller.check_health();
        }
    }

    fn render_view_switch(&mut self, ui: &mut egui::Ui) {
        let view = self.controller.ui.view;
        if ui.selectable_label(view == ViewMode::Form, "Form").clicked() {
            self.controller.set_view(ViewMode::Form);
        }
        if ui
            .selectable_label(view == ViewMode::RawRequest, "Raw JSON")
            .clicked()
        {
            self.controller.set_view(ViewMode::RawRequest);
        }
    }

    /// Laid out right to left, so the primary action comes first.
    fn render_actions(&mut self, ui: &mut egui::Ui) {
        let loading = self.controller.ui.prediction.loading;
        let label = if loading { "Predicting..." } else { "Predict" };
        match self.controller.ui.view {
            ViewMode::Form => {
                if ui
                    .add_enabled(self.controller.can_predict(), egui::Button::new(label))
                    .clicked()
                {
                    self.controller.predict();
                }
                let sample_enabled = !self.controller.is_sample_loading();
                if ui
                    .add_enabled(sample_enabled, egui::Button::new("Load sample"))
                    .clicked()
                {
                    self.controller.load_sample();
                }
            }
            ViewMode::RawRequest => {
                if ui
                    .add_enabled(!loading, egui::Button::new(label))
                    .clicked()
                {
                    self.controller.submit_raw_request();
                }
            }
        }
    }
}
