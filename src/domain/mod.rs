//! Domain layer: core entities and view-model state.

pub mod color;
pub mod conversation_state;
pub mod events;
pub mod group;
pub mod group_list_state;
pub mod message;
pub mod message_input_state;
pub mod shell_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
