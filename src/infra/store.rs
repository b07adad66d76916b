//! In-memory group store.

use std::collections::{HashMap, HashSet};

use crate::{
    domain::{group::Group, message::Message},
    infra::error::CatalogError,
    usecases::contracts::GroupStore,
};

/// One group together with its seeded history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub group: Group,
    pub messages: Vec<Message>,
}

/// Immutable catalog of groups and their seeded histories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryGroupStore {
    groups: Vec<Group>,
    index: HashMap<String, usize>,
    histories: HashMap<String, Vec<Message>>,
}

impl InMemoryGroupStore {
    /// Builds a store, validating id uniqueness and that every history
    /// belongs to a known group.
    pub fn new(
        groups: Vec<Group>,
        histories: HashMap<String, Vec<Message>>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(groups.len());
        for (position, group) in groups.iter().enumerate() {
            if index.insert(group.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateGroupId(group.id.clone()));
            }
        }

        for (group_id, messages) in &histories {
            if !index.contains_key(group_id) {
                return Err(CatalogError::OrphanHistory(group_id.clone()));
            }

            let mut seen = HashSet::with_capacity(messages.len());
            for message in messages {
                if !seen.insert(message.id.as_str()) {
                    return Err(CatalogError::DuplicateMessageId {
                        group_id: group_id.clone(),
                        message_id: message.id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            groups,
            index,
            histories,
        })
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut groups = Vec::with_capacity(entries.len());
        let mut histories = HashMap::with_capacity(entries.len());

        for CatalogEntry { group, messages } in entries {
            if histories.contains_key(&group.id) {
                return Err(CatalogError::DuplicateGroupId(group.id));
            }
            histories.insert(group.id.clone(), messages);
            groups.push(group);
        }

        Self::new(groups, histories)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl GroupStore for InMemoryGroupStore {
    fn list_groups(&self) -> Vec<Group> {
        self.groups.clone()
    }

    fn find_group_by_id(&self, group_id: &str) -> Option<Group> {
        self.index
            .get(group_id)
            .and_then(|&position| self.groups.get(position))
            .cloned()
    }

    fn list_messages(&self, group_id: &str) -> Vec<Message> {
        self.histories.get(group_id).cloned().unwrap_or_default()
    }
}
