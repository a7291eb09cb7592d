use super::*;
use crate::egui_app::state::ViewMode;
use crate::features::FeatureValue;
use crate::schema::{FieldGroup, visible_fields};

impl EguiController {
    /// Switch the sidebar selection. Groups absent from the schema are ignored.
    pub fn select_group(&mut self, group: FieldGroup) {
        if self.groups.contains(group) {
            self.ui.form.active_group = group;
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.ui.form.search_term = term.into();
    }

    /// Fields of the active group matching the search term, in schema order.
    pub fn visible_fields(&self) -> Vec<&str> {
        if self.meta.is_none() {
            return Vec::new();
        }
        visible_fields(
            &self.groups,
            self.ui.form.active_group,
            &self.ui.form.search_term,
        )
    }

    /// Replace one feature value; every other key is left as it was.
    pub fn set_field(&mut self, name: &str, value: FeatureValue) {
        self.features = self.features.with_field(name, value);
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.ui.view = view;
    }
}
