//! Working copy of the group catalog for the list screen.

use super::group::Group;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupListState {
    groups: Vec<Group>,
    selected_index: Option<usize>,
}

impl GroupListState {
    pub fn new(groups: Vec<Group>) -> Self {
        let selected_index = if groups.is_empty() { None } else { Some(0) };

        Self {
            groups,
            selected_index,
        }
    }

    /// Current working copy, in catalog order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_group(&self) -> Option<&Group> {
        self.selected_index.and_then(|index| self.groups.get(index))
    }

    /// Flips membership of the matching group and returns the new value.
    /// Returns `None` without touching anything if no group has this id.
    pub fn toggle_join(&mut self, group_id: &str) -> Option<bool> {
        let group = self.groups.iter_mut().find(|group| group.id == group_id)?;
        group.is_joined = !group.is_joined;
        Some(group.is_joined)
    }

    pub fn select_next(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        let last_index = self.groups.len().saturating_sub(1);
        self.selected_index = Some(std::cmp::min(index.saturating_add(1), last_index));
    }

    pub fn select_previous(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        self.selected_index = Some(index.saturating_sub(1));
    }
}
