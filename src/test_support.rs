//! Fixtures shared by unit tests.

use std::collections::HashMap;

use crate::{
    domain::{color::HexColor, group::Group, message::Message},
    infra::store::{CatalogEntry, InMemoryGroupStore},
    usecases::contracts::{Clock, GroupStore},
};

pub const FIXTURE_MESSAGE_MS: i64 = 1_699_999_000_000;

pub fn group(id: &str, title: &str, is_joined: bool) -> Group {
    Group {
        id: id.to_owned(),
        title: title.to_owned(),
        description: format!("About {title}"),
        member_count: 100,
        is_joined,
        color: HexColor::new(0x45, 0xB7, 0xD1),
    }
}

pub fn incoming(id: &str, sender: &str, text: &str) -> Message {
    Message::from_sender(id, sender, text, FIXTURE_MESSAGE_MS)
}

/// Three groups; "1" has a two-message history, "2" has none.
pub fn fixture_store() -> InMemoryGroupStore {
    InMemoryGroupStore::from_entries(vec![
        CatalogEntry {
            group: group("1", "Productivity Masters", false),
            messages: vec![
                incoming("1", "Sarah Chen", "What tools do you use?"),
                incoming("2", "You", "Notion and Forest"),
            ],
        },
        CatalogEntry {
            group: group("2", "Creative Coders", true),
            messages: vec![],
        },
        CatalogEntry {
            group: group("3", "Mindful Developers", false),
            messages: vec![incoming("1", "David Kim", "Balance?")],
        },
    ])
    .expect("fixture catalog is valid")
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_unix_ms(&self) -> i64 {
        self.0
    }
}

/// Store double that answers straight from its fields.
#[derive(Debug, Default)]
pub struct StubStore {
    groups: Vec<Group>,
    histories: HashMap<String, Vec<Message>>,
}

impl StubStore {
    pub fn with_groups(groups: Vec<Group>) -> Self {
        Self {
            groups,
            histories: HashMap::new(),
        }
    }
}

impl GroupStore for StubStore {
    fn list_groups(&self) -> Vec<Group> {
        self.groups.clone()
    }

    fn find_group_by_id(&self, group_id: &str) -> Option<Group> {
        self.groups.iter().find(|group| group.id == group_id).cloned()
    }

    fn list_messages(&self, group_id: &str) -> Vec<Message> {
        self.histories.get(group_id).cloned().unwrap_or_default()
    }
}
