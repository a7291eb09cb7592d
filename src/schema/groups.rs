//! Group index over the backend field list and the search filter on top of it.

use super::classifier::{FieldGroup, classify};

/// Fields partitioned by group, in first-seen group order.
///
/// Every input field appears in exactly one group and keeps its relative order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupIndex {
    groups: Vec<(FieldGroup, Vec<String>)>,
}

impl GroupIndex {
    /// Groups in display order.
    pub fn groups(&self) -> impl Iterator<Item = FieldGroup> + '_ {
        self.groups.iter().map(|(group, _)| *group)
    }

    /// Fields belonging to `group`, or `None` when the group is absent.
    pub fn fields(&self, group: FieldGroup) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(candidate, _)| *candidate == group)
            .map(|(_, fields)| fields.as_slice())
    }

    pub fn contains(&self, group: FieldGroup) -> bool {
        self.fields(group).is_some()
    }

    /// Group shown first in the sidebar.
    pub fn first_group(&self) -> Option<FieldGroup> {
        self.groups.first().map(|(group, _)| *group)
    }

    /// Number of fields in `group`; zero when absent.
    pub fn count(&self, group: FieldGroup) -> usize {
        self.fields(group).map_or(0, <[String]>::len)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Partition `field_names` into groups using [`classify`].
pub fn build_groups<I, S>(field_names: I) -> GroupIndex
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups: Vec<(FieldGroup, Vec<String>)> = Vec::new();
    for name in field_names {
        let name = name.as_ref();
        let group = classify(name);
        // At most six groups, so a linear probe beats hashing.
        match groups.iter_mut().find(|(candidate, _)| *candidate == group) {
            Some((_, fields)) => fields.push(name.to_string()),
            None => groups.push((group, vec![name.to_string()])),
        }
    }
    GroupIndex { groups }
}

/// Fields of `active` narrowed by a case-insensitive substring search.
///
/// A blank term returns the whole group. An absent group yields nothing.
pub fn visible_fields<'a>(
    groups: &'a GroupIndex,
    active: FieldGroup,
    search_term: &str,
) -> Vec<&'a str> {
    let Some(fields) = groups.fields(active) else {
        return Vec::new();
    };
    let needle = search_term.trim().to_lowercase();
    fields
        .iter()
        .map(String::as_str)
        .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
        .collect()
}
