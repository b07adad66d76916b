use super::{conversation_state::ConversationState, group_list_state::GroupListState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    GroupList,
    Conversation,
}

/// Session state for the terminal shell.
///
/// The group list lives for the whole session. A conversation exists only
/// while its screen is shown and is dropped on the way back, so its appended
/// messages and draft do not survive navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    group_list: GroupListState,
    conversation: Option<ConversationState>,
    now_ms: i64,
}

impl ShellState {
    pub fn new(group_list: GroupListState, now_ms: i64) -> Self {
        Self {
            running: true,
            group_list,
            conversation: None,
            now_ms,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn screen(&self) -> Screen {
        if self.conversation.is_some() {
            Screen::Conversation
        } else {
            Screen::GroupList
        }
    }

    pub fn group_list(&self) -> &GroupListState {
        &self.group_list
    }

    pub fn group_list_mut(&mut self) -> &mut GroupListState {
        &mut self.group_list
    }

    pub fn conversation(&self) -> Option<&ConversationState> {
        self.conversation.as_ref()
    }

    pub fn conversation_mut(&mut self) -> Option<&mut ConversationState> {
        self.conversation.as_mut()
    }

    pub fn open_conversation(&mut self, conversation: ConversationState) {
        self.conversation = Some(conversation);
    }

    /// Returns to the group list, discarding the open conversation.
    pub fn close_conversation(&mut self) -> Option<ConversationState> {
        self.conversation.take()
    }

    /// Reference time for relative ages, refreshed on every tick.
    pub fn now_ms(&self) -> i64 {
        self.now_ms
    }

    pub fn set_now_ms(&mut self, now_ms: i64) {
        self.now_ms = now_ms;
    }
}
