use super::EguiApp;
use super::style;
use crate::egui_app::view_model::{self, FieldControl};
use crate::features::FeatureValue;
use eframe::egui::{self, Frame, Margin, RichText};

const FIELD_COLUMNS: usize = 2;

impl EguiApp {
    pub(super) fn render_form(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let Some(meta) = self.controller.meta() else {
            return;
        };
        let controls: Vec<(String, FieldControl)> = self
            .controller
            .visible_fields()
            .into_iter()
            .map(|field| {
                let control = view_model::field_control(meta, self.controller.features(), field);
                (field.to_string(), control)
            })
            .collect();
        let active_group = self.controller.ui.form.active_group;
        let mut edits: Vec<(String, FeatureValue)> = Vec::new();

        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::same(12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("Inputs: {active_group}")).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new("Auto-filled defaults").color(palette.text_muted));
                    });
                });
                ui.separator();
                if controls.is_empty() {
                    ui.label(RichText::new("No fields match the search.").color(palette.text_muted));
                    return;
                }
                egui::ScrollArea::vertical()
                    .id_salt("form_fields_scroll")
                    .show(ui, |ui| {
                        egui::Grid::new("form_fields")
                            .num_columns(FIELD_COLUMNS)
                            .spacing([16.0, 10.0])
                            .show(ui, |ui| {
                                for row in controls.chunks(FIELD_COLUMNS) {
                                    for (field, control) in row {
                                        ui.vertical(|ui| {
                                            if let Some(value) = field_cell(ui, field, control) {
                                                edits.push((field.clone(), value));
                                            }
                                        });
                                    }
                                    ui.end_row();
                                }
                            });
                    });
            });

        for (field, value) in edits {
            self.controller.set_field(&field, value);
        }
    }
}

/// Draw one labelled control; returns the new value when the user changed it.
fn field_cell(ui: &mut egui::Ui, field: &str, control: &FieldControl) -> Option<FeatureValue> {
    let palette = style::palette();
    ui.label(RichText::new(field).color(palette.text_muted).small());
    match control {
        FieldControl::Choice { options, selected } => {
            let mut picked = None;
            egui::ComboBox::from_id_salt(("field_choice", field))
                .selected_text(selected.as_str())
                .width(220.0)
                .show_ui(ui, |ui| {
                    for option in options {
                        if ui.selectable_label(option == selected, option).clicked() {
                            picked = Some(FeatureValue::text(option.as_str()));
                        }
                    }
                });
            picked
        }
        FieldControl::Text { value, placeholder } => {
            let mut text = value.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .hint_text(placeholder.as_str())
                    .desired_width(220.0),
            );
            response.changed().then(|| FeatureValue::text(text))
        }
    }
}
