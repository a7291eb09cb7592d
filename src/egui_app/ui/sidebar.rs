use super::EguiApp;
use super::style;
use crate::egui_app::state::ViewMode;
use crate::egui_app::view_model;
use eframe::egui::{self, Frame, Margin, RichText};

impl EguiApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::SidePanel::left("sidebar")
            .resizable(true)
            .default_width(260.0)
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::same(10)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_scroll")
                    .show(ui, |ui| {
                        if self.controller.ui.view == ViewMode::Form {
                            self.render_sections(ui);
                            ui.add_space(12.0);
                        }
                        self.render_result_card(ui);
                        ui.add_space(12.0);
                        self.render_monitoring_card(ui);
                    });
            });
    }

    fn render_sections(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let field_count = self
            .controller
            .meta()
            .map_or(0, |meta| meta.field_count());
        ui.horizontal(|ui| {
            ui.label(RichText::new("Sections").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("{field_count} fields")).color(palette.text_muted));
            });
        });
        ui.add_space(4.0);
        let rows = view_model::group_rows(
            self.controller.groups(),
            self.controller.ui.form.active_group,
        );
        for row in rows {
            let text = format!("{}  ({})", row.label, row.count);
            let button = egui::Button::new(text).selected(row.selected);
            if ui.add_sized([ui.available_width(), 24.0], button).clicked() {
                self.controller.select_group(row.group);
            }
        }
        ui.add_space(8.0);
        ui.label(RichText::new("Search field").color(palette.text_muted));
        let mut term = self.controller.ui.form.search_term.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut term)
                .hint_text("e.g. Contract, Charges...")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.controller.set_search_term(term);
        }
    }
}
