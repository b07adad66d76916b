use crate::domain::conversation_state::ConversationState;

use super::contracts::GroupStore;

/// Builds a conversation view-model for `group_id`.
///
/// An unknown id yields the terminal not-found state rather than an error.
pub fn open_conversation(store: &dyn GroupStore, group_id: &str) -> ConversationState {
    let Some(group) = store.find_group_by_id(group_id) else {
        tracing::warn!(group_id, "conversation requested for unknown group");
        return ConversationState::not_found(group_id);
    };

    let messages = store.list_messages(group_id);
    tracing::debug!(
        group_id,
        message_count = messages.len(),
        "conversation opened"
    );

    ConversationState::open(group, messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::conversation_state::ConversationUiState,
        test_support::{fixture_store, group, StubStore},
        usecases::contracts::GroupStore,
    };

    #[test]
    fn loads_group_and_seeded_history() {
        let store = fixture_store();

        let state = open_conversation(&store, "1");

        assert_eq!(state.ui_state(), ConversationUiState::Ready);
        assert_eq!(state.group(), store.find_group_by_id("1").as_ref());
        assert_eq!(state.messages(), store.list_messages("1").as_slice());
    }

    #[test]
    fn unknown_group_enters_not_found_state() {
        let store = fixture_store();

        let state = open_conversation(&store, "404");

        assert_eq!(state.ui_state(), ConversationUiState::NotFound);
        assert_eq!(state.group_id(), "404");
        assert!(state.messages().is_empty());
    }

    #[test]
    fn group_without_history_opens_empty() {
        let store = StubStore::with_groups(vec![group("5", "Quiet", false)]);

        let state = open_conversation(&store, "5");

        assert_eq!(state.ui_state(), ConversationUiState::Ready);
        assert!(state.messages().is_empty());
    }

    #[test]
    fn appended_messages_stay_local_to_the_view_model() {
        let store = fixture_store();
        let mut state = open_conversation(&store, "1");
        state.compose_draft("local only");
        state.submit_draft(0);

        assert_eq!(
            state.messages().len(),
            store.list_messages("1").len() + 1
        );
        assert_eq!(
            open_conversation(&store, "1").messages(),
            store.list_messages("1").as_slice()
        );
    }
}
