//! Plain-text snapshots of the two screens for the non-interactive commands.

use crate::domain::{
    conversation_state::ConversationState,
    group::format_member_count,
    group_list_state::GroupListState,
    message::relative_age,
};

use super::view::{NOT_FOUND_TITLE, SCREEN_SUBTITLE, SCREEN_TITLE};

pub fn group_list_report(group_list: &GroupListState) -> Vec<String> {
    let mut lines = vec![SCREEN_TITLE.to_owned(), SCREEN_SUBTITLE.to_owned(), String::new()];

    if group_list.is_empty() {
        lines.push("No groups available.".to_owned());
        return lines;
    }

    for group in group_list.groups() {
        let marker = if group.is_joined { "*" } else { " " };
        lines.push(format!(
            "{marker} [{}] {} ({} members) {} - {}",
            group.id,
            group.title,
            format_member_count(group.member_count),
            group.color,
            group.membership_action_label(),
        ));
        lines.push(format!("      {}", group.description));
    }

    lines
}

pub fn conversation_report(conversation: &ConversationState, now_ms: i64) -> Vec<String> {
    let Some(group) = conversation.group() else {
        return vec![
            NOT_FOUND_TITLE.to_owned(),
            format!("No group with id {:?}.", conversation.group_id()),
        ];
    };

    let mut lines = vec![
        format!(
            "{} ({} members)",
            group.title,
            format_member_count(group.member_count)
        ),
        group.description.clone(),
        String::new(),
    ];

    if conversation.messages().is_empty() {
        lines.push("No messages yet.".to_owned());
    }

    for message in conversation.messages() {
        lines.push(format!(
            "{} ({})",
            message.sender,
            relative_age(message.timestamp_ms, now_ms)
        ));
        for text_line in message.text.lines() {
            lines.push(format!("  {text_line}"));
        }
    }

    lines
}
