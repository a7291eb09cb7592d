use super::EguiApp;
use super::style;
use crate::egui_app::state::DEFAULT_RAW_REQUEST;
use eframe::egui::{self, Frame, Margin, RichText};

impl EguiApp {
    pub(super) fn render_raw_request(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::same(12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Request body").strong());
                    ui.label(
                        RichText::new("Sent to /predict exactly as written")
                            .color(palette.text_muted),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Reset").clicked() {
                            self.controller.ui.raw_request.text = DEFAULT_RAW_REQUEST.to_string();
                        }
                    });
                });
                ui.separator();
                egui::ScrollArea::vertical()
                    .id_salt("raw_request_scroll")
                    .show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::multiline(&mut self.controller.ui.raw_request.text)
                                .code_editor()
                                .desired_rows(24)
                                .desired_width(f32::INFINITY),
                        );
                    });
            });
    }
}
