//! Working copy of one group's history plus the outgoing draft.

use super::{group::Group, message::Message, message_input_state::MessageInputState};

const LOCAL_ID_PREFIX: &str = "local-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationUiState {
    Ready,
    /// Terminal: the requested group does not exist.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationState {
    group_id: String,
    view: ConversationView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConversationView {
    NotFound,
    Open(OpenConversation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenConversation {
    group: Group,
    messages: Vec<Message>,
    draft: MessageInputState,
    next_local_id: u64,
}

impl OpenConversation {
    /// Next `local-N` id that is not already used in this history.
    fn allocate_message_id(&mut self) -> String {
        loop {
            self.next_local_id += 1;
            let candidate = format!("{LOCAL_ID_PREFIX}{}", self.next_local_id);
            if !self.messages.iter().any(|message| message.id == candidate) {
                return candidate;
            }
        }
    }
}

impl ConversationState {
    pub fn open(group: Group, messages: Vec<Message>) -> Self {
        Self {
            group_id: group.id.clone(),
            view: ConversationView::Open(OpenConversation {
                group,
                messages,
                draft: MessageInputState::default(),
                next_local_id: 0,
            }),
        }
    }

    pub fn not_found(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            view: ConversationView::NotFound,
        }
    }

    /// The id this conversation was opened with, found or not.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn ui_state(&self) -> ConversationUiState {
        match self.view {
            ConversationView::NotFound => ConversationUiState::NotFound,
            ConversationView::Open(_) => ConversationUiState::Ready,
        }
    }

    pub fn group(&self) -> Option<&Group> {
        match &self.view {
            ConversationView::Open(open) => Some(&open.group),
            ConversationView::NotFound => None,
        }
    }

    /// Current working copy of the history, oldest first.
    pub fn messages(&self) -> &[Message] {
        match &self.view {
            ConversationView::Open(open) => &open.messages,
            ConversationView::NotFound => &[],
        }
    }

    pub fn draft(&self) -> Option<&MessageInputState> {
        match &self.view {
            ConversationView::Open(open) => Some(&open.draft),
            ConversationView::NotFound => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut MessageInputState> {
        match &mut self.view {
            ConversationView::Open(open) => Some(&mut open.draft),
            ConversationView::NotFound => None,
        }
    }

    pub fn compose_draft(&mut self, text: &str) {
        if let Some(draft) = self.draft_mut() {
            draft.set_text(text);
        }
    }

    pub fn can_submit(&self) -> bool {
        self.draft().is_some_and(|draft| !draft.trimmed().is_empty())
    }

    /// Appends the trimmed draft as an own message stamped `now_ms` and clears
    /// the draft. Whitespace-only drafts are ignored and yield `None`.
    pub fn submit_draft(&mut self, now_ms: i64) -> Option<&Message> {
        let ConversationView::Open(open) = &mut self.view else {
            return None;
        };

        let text = open.draft.trimmed();
        if text.is_empty() {
            return None;
        }
        let text = text.to_owned();

        let id = open.allocate_message_id();
        open.messages.push(Message::own(id, text, now_ms));
        open.draft.clear();

        open.messages.last()
    }
}
