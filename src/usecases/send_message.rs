//! Submitting the conversation draft.

use crate::domain::conversation_state::ConversationState;

use super::contracts::Clock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The draft was appended under this message id.
    Sent { message_id: String },
    /// Empty or whitespace-only draft; nothing happened.
    IgnoredEmpty,
    /// The conversation is in its not-found state.
    GroupNotFound,
}

/// Appends the current draft to the conversation, stamped with the clock's
/// current time.
pub fn send_draft(conversation: &mut ConversationState, clock: &dyn Clock) -> SendOutcome {
    if conversation.group().is_none() {
        return SendOutcome::GroupNotFound;
    }

    let now_ms = clock.now_unix_ms();
    let message_id = conversation
        .submit_draft(now_ms)
        .map(|message| message.id.clone());

    match message_id {
        Some(message_id) => {
            tracing::info!(
                group_id = conversation.group_id(),
                message_id = %message_id,
                "message appended"
            );
            SendOutcome::Sent { message_id }
        }
        None => {
            tracing::debug!(group_id = conversation.group_id(), "ignored empty draft");
            SendOutcome::IgnoredEmpty
        }
    }
}

/// Replaces the draft with `text` and sends it, the non-interactive path.
pub fn send_text(
    conversation: &mut ConversationState,
    clock: &dyn Clock,
    text: &str,
) -> SendOutcome {
    conversation.compose_draft(text);
    send_draft(conversation, clock)
}
