use anyhow::Result;

use crate::domain::{
    conversation_state::{ConversationState, ConversationUiState},
    events::{AppEvent, KeyInput},
    shell_state::{Screen, ShellState},
};

use super::{
    contracts::{Clock, GroupStore, ShellOrchestrator},
    list_groups::{list_groups, toggle_membership},
    open_conversation::open_conversation,
    send_message::send_draft,
};

pub struct DefaultShellOrchestrator<S, C>
where
    S: GroupStore,
    C: Clock,
{
    state: ShellState,
    store: S,
    clock: C,
}

impl<S, C> DefaultShellOrchestrator<S, C>
where
    S: GroupStore,
    C: Clock,
{
    pub fn new(store: S, clock: C) -> Self {
        let state = ShellState::new(list_groups(&store), clock.now_unix_ms());

        Self {
            state,
            store,
            clock,
        }
    }

    fn selected_group_id(&self) -> Option<String> {
        self.state
            .group_list()
            .selected_group()
            .map(|group| group.id.clone())
    }

    fn handle_group_list_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "q" => self.state.stop(),
            "j" | "down" => self.state.group_list_mut().select_next(),
            "k" | "up" => self.state.group_list_mut().select_previous(),
            "enter" => {
                let Some(group_id) = self.selected_group_id() else {
                    return;
                };
                let conversation = open_conversation(&self.store, &group_id);
                self.state.set_now_ms(self.clock.now_unix_ms());
                self.state.open_conversation(conversation);
            }
            " " | "t" => {
                let Some(group_id) = self.selected_group_id() else {
                    return;
                };
                toggle_membership(self.state.group_list_mut(), &group_id);
            }
            _ => {}
        }
    }

    fn handle_conversation_key(&mut self, key: &KeyInput) {
        if key.key == "esc" {
            if let Some(closed) = self.state.close_conversation() {
                tracing::debug!(group_id = closed.group_id(), "conversation closed");
            }
            return;
        }

        let Some(conversation) = self.state.conversation_mut() else {
            return;
        };

        if conversation.ui_state() == ConversationUiState::NotFound {
            if key.key == "q" {
                self.state.close_conversation();
            }
            return;
        }

        if key.key == "enter" {
            send_draft(conversation, &self.clock);
            self.state.set_now_ms(self.clock.now_unix_ms());
            return;
        }

        edit_draft(conversation, key);
    }
}

fn edit_draft(conversation: &mut ConversationState, key: &KeyInput) {
    let Some(draft) = conversation.draft_mut() else {
        return;
    };

    match key.key.as_str() {
        "backspace" => draft.delete_char_before(),
        "delete" => draft.delete_char_at(),
        "left" => draft.move_cursor_left(),
        "right" => draft.move_cursor_right(),
        "home" => draft.move_cursor_home(),
        "end" => draft.move_cursor_end(),
        _ => {
            if let Some(ch) = key.as_char() {
                if !draft.insert_char(ch) {
                    tracing::debug!("draft length limit reached");
                }
            }
        }
    }
}

impl<S, C> ShellOrchestrator for DefaultShellOrchestrator<S, C>
where
    S: GroupStore,
    C: Clock,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => self.state.set_now_ms(self.clock.now_unix_ms()),
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => match self.state.screen() {
                Screen::GroupList => self.handle_group_list_key(&key),
                Screen::Conversation => self.handle_conversation_key(&key),
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        infra::store::InMemoryGroupStore,
        test_support::{fixture_store, FixedClock},
    };

    const NOW_MS: i64 = 1_700_000_000_000;

    fn orchestrator() -> DefaultShellOrchestrator<InMemoryGroupStore, FixedClock> {
        DefaultShellOrchestrator::new(fixture_store(), FixedClock(NOW_MS))
    }

    fn press(orchestrator: &mut impl ShellOrchestrator, key: &str) {
        orchestrator
            .handle_event(AppEvent::InputKey(KeyInput::new(key, false)))
            .expect("key must be handled");
    }

    fn type_text(orchestrator: &mut impl ShellOrchestrator, text: &str) {
        for ch in text.chars() {
            press(orchestrator, &ch.to_string());
        }
    }

    #[test]
    fn starts_on_group_list_with_catalog_loaded() {
        let orchestrator = orchestrator();

        assert_eq!(orchestrator.state().screen(), Screen::GroupList);
        assert_eq!(orchestrator.state().group_list().groups().len(), 3);
        assert_eq!(orchestrator.state().now_ms(), NOW_MS);
    }

    #[test]
    fn stops_on_quit_event() {
        let mut orchestrator = orchestrator();

        orchestrator
            .handle_event(AppEvent::QuitRequested)
            .expect("event must be handled");

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn q_quits_from_group_list() {
        let mut orchestrator = orchestrator();

        press(&mut orchestrator, "q");

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn navigates_group_list_with_vim_and_arrow_keys() {
        let mut orchestrator = orchestrator();

        press(&mut orchestrator, "j");
        press(&mut orchestrator, "down");
        assert_eq!(orchestrator.state().group_list().selected_index(), Some(2));

        press(&mut orchestrator, "k");
        press(&mut orchestrator, "up");
        assert_eq!(orchestrator.state().group_list().selected_index(), Some(0));
    }

    #[test]
    fn space_toggles_membership_of_selected_group() {
        let mut orchestrator = orchestrator();

        press(&mut orchestrator, " ");
        assert!(orchestrator.state().group_list().groups()[0].is_joined);

        press(&mut orchestrator, "t");
        assert!(!orchestrator.state().group_list().groups()[0].is_joined);
    }

    #[test]
    fn enter_opens_selected_conversation() {
        let mut orchestrator = orchestrator();

        press(&mut orchestrator, "enter");

        let conversation = orchestrator.state().conversation().expect("open");
        assert_eq!(orchestrator.state().screen(), Screen::Conversation);
        assert_eq!(conversation.group_id(), "1");
        assert_eq!(conversation.messages().len(), 2);
    }

    #[test]
    fn typing_and_enter_appends_own_message() {
        let mut orchestrator = orchestrator();
        press(&mut orchestrator, "enter");

        type_text(&mut orchestrator, "  hi  ");
        press(&mut orchestrator, "enter");

        let conversation = orchestrator.state().conversation().expect("open");
        let last = conversation.messages().last().expect("message");
        assert_eq!(conversation.messages().len(), 3);
        assert_eq!(last.text, "hi");
        assert!(last.is_own());
        assert_eq!(last.timestamp_ms, NOW_MS);
    }

    #[test]
    fn q_is_typed_into_the_draft_inside_a_conversation() {
        let mut orchestrator = orchestrator();
        press(&mut orchestrator, "enter");

        press(&mut orchestrator, "q");

        assert!(orchestrator.state().is_running());
        let draft = orchestrator
            .state()
            .conversation()
            .and_then(|c| c.draft())
            .map(|d| d.text().to_owned());
        assert_eq!(draft, Some("q".to_owned()));
    }

    #[test]
    fn enter_with_blank_draft_appends_nothing() {
        let mut orchestrator = orchestrator();
        press(&mut orchestrator, "enter");

        type_text(&mut orchestrator, "   ");
        press(&mut orchestrator, "enter");

        let conversation = orchestrator.state().conversation().expect("open");
        assert_eq!(conversation.messages().len(), 2);
    }

    #[test]
    fn draft_editing_keys_are_applied() {
        let mut orchestrator = orchestrator();
        press(&mut orchestrator, "enter");

        type_text(&mut orchestrator, "abc");
        press(&mut orchestrator, "left");
        press(&mut orchestrator, "backspace");
        press(&mut orchestrator, "home");
        press(&mut orchestrator, "delete");

        let draft = orchestrator
            .state()
            .conversation()
            .and_then(|c| c.draft())
            .map(|d| d.text().to_owned());
        assert_eq!(draft, Some("c".to_owned()));
    }

    #[test]
    fn esc_returns_to_list_and_drops_local_messages() {
        let mut orchestrator = orchestrator();
        press(&mut orchestrator, "enter");
        type_text(&mut orchestrator, "temp");
        press(&mut orchestrator, "enter");

        press(&mut orchestrator, "esc");
        assert_eq!(orchestrator.state().screen(), Screen::GroupList);

        press(&mut orchestrator, "enter");
        let conversation = orchestrator.state().conversation().expect("open");
        assert_eq!(conversation.messages().len(), 2);
    }

    #[test]
    fn list_toggles_survive_a_conversation_round_trip() {
        let mut orchestrator = orchestrator();
        press(&mut orchestrator, " ");

        press(&mut orchestrator, "enter");
        press(&mut orchestrator, "esc");

        assert!(orchestrator.state().group_list().groups()[0].is_joined);
    }

    #[test]
    fn not_found_conversation_only_accepts_back_navigation() {
        let mut orchestrator = orchestrator();
        orchestrator
            .state
            .open_conversation(ConversationState::not_found("404"));

        press(&mut orchestrator, "x");
        press(&mut orchestrator, "enter");
        assert_eq!(orchestrator.state().screen(), Screen::Conversation);

        press(&mut orchestrator, "q");
        assert_eq!(orchestrator.state().screen(), Screen::GroupList);
        assert!(orchestrator.state().is_running());
    }

    #[test]
    fn tick_refreshes_reference_time() {
        let mut orchestrator = orchestrator();
        orchestrator.state.set_now_ms(0);

        orchestrator
            .handle_event(AppEvent::Tick)
            .expect("tick must be handled");

        assert_eq!(orchestrator.state().now_ms(), NOW_MS);
    }
}
