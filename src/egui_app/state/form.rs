use crate::schema::FieldGroup;

/// Group selection and field search for the schema form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    /// Group whose fields are listed.
    pub active_group: FieldGroup,
    /// Raw search input; trimmed when filtering.
    pub search_term: String,
}
