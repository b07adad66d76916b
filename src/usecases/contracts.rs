use anyhow::Result;

use crate::domain::{events::AppEvent, group::Group, message::Message, shell_state::ShellState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Read-only access to the group catalog and seeded histories.
///
/// Missing ids are an expected case: lookups answer with `None` or an empty
/// history instead of an error.
pub trait GroupStore {
    /// All groups in catalog order.
    fn list_groups(&self) -> Vec<Group>;
    fn find_group_by_id(&self, group_id: &str) -> Option<Group>;
    /// Seeded history for a group, oldest first; empty for unknown ids.
    fn list_messages(&self, group_id: &str) -> Vec<Message>;
}

impl<T> GroupStore for &T
where
    T: GroupStore + ?Sized,
{
    fn list_groups(&self) -> Vec<Group> {
        (*self).list_groups()
    }

    fn find_group_by_id(&self, group_id: &str) -> Option<Group> {
        (*self).find_group_by_id(group_id)
    }

    fn list_messages(&self, group_id: &str) -> Vec<Message> {
        (*self).list_messages(group_id)
    }
}

pub trait Clock {
    fn now_unix_ms(&self) -> i64;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_unix_ms(&self) -> i64 {
        (*self).now_unix_ms()
    }
}
