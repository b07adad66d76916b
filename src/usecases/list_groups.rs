use crate::domain::group_list_state::GroupListState;

use super::contracts::GroupStore;

/// Builds the list screen's working copy from the store's catalog.
pub fn list_groups(store: &dyn GroupStore) -> GroupListState {
    let groups = store.list_groups();
    tracing::debug!(group_count = groups.len(), "group list initialized");

    GroupListState::new(groups)
}

/// Outcome of a join/leave request against the working copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Joined,
    Left,
    GroupNotFound,
}

pub fn toggle_membership(state: &mut GroupListState, group_id: &str) -> ToggleOutcome {
    match state.toggle_join(group_id) {
        Some(true) => {
            tracing::info!(group_id, "joined group");
            ToggleOutcome::Joined
        }
        Some(false) => {
            tracing::info!(group_id, "left group");
            ToggleOutcome::Left
        }
        None => {
            tracing::warn!(group_id, "toggle requested for unknown group");
            ToggleOutcome::GroupNotFound
        }
    }
}
