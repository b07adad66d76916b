//! Message list rendering logic.
//!
//! Each message becomes a bubble:
//! - sender name above incoming messages
//! - text wrapped to three quarters of the panel width
//! - relative age ("5m ago") under the text
//! - own messages aligned to the right edge

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::ListItem,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::message::{relative_age, Message};

use super::styles;

/// Visual representation of one message, independent of ratatui types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBubble {
    pub sender: Option<String>,
    pub lines: Vec<String>,
    pub age: String,
    pub is_own: bool,
}

pub fn build_message_bubbles(
    messages: &[Message],
    now_ms: i64,
    width: usize,
) -> Vec<MessageBubble> {
    let bubble_width = bubble_width(width);

    messages
        .iter()
        .map(|message| MessageBubble {
            sender: (!message.is_own()).then(|| message.sender.clone()),
            lines: wrap_text(&message.text, bubble_width),
            age: relative_age(message.timestamp_ms, now_ms),
            is_own: message.is_own(),
        })
        .collect()
}

pub fn bubble_to_list_item(bubble: &MessageBubble) -> ListItem<'static> {
    ListItem::new(bubble_lines(bubble))
}

fn bubble_lines(bubble: &MessageBubble) -> Vec<Line<'static>> {
    let alignment = if bubble.is_own {
        Alignment::Right
    } else {
        Alignment::Left
    };
    let text_style = if bubble.is_own {
        styles::own_message_style()
    } else {
        styles::other_message_style()
    };

    let mut lines = Vec::with_capacity(bubble.lines.len() + 3);

    if let Some(sender) = &bubble.sender {
        lines.push(Line::from(Span::styled(
            sender.clone(),
            styles::message_sender_style(),
        )));
    }

    for text in &bubble.lines {
        lines.push(
            Line::from(Span::styled(format!(" {text} "), text_style)).alignment(alignment),
        );
    }

    lines.push(
        Line::from(Span::styled(bubble.age.clone(), styles::message_age_style()))
            .alignment(alignment),
    );
    lines.push(Line::default());

    lines
}

fn bubble_width(panel_width: usize) -> usize {
    // Two columns of padding around the text inside the bubble.
    (panel_width * 3 / 4).saturating_sub(2).max(1)
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if current_width > 0 && current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width && current_width > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
