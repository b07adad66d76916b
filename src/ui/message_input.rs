//! Message input field rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::domain::message_input_state::MessageInputState;

use super::styles;

/// Placeholder text shown while the draft is empty.
const PLACEHOLDER_TEXT: &str = "Type a message...";

/// Prompt symbol shown before the input text.
const PROMPT_SYMBOL: &str = "> ";

const SEND_HINT: &str = " Enter: Send ";

/// Renders the draft field with its send hint. The hint is dimmed while
/// `can_submit` is false.
pub fn render_message_input(
    frame: &mut Frame<'_>,
    area: Rect,
    input_state: &MessageInputState,
    can_submit: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::active_panel_border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hint_width = SEND_HINT.chars().count() as u16;
    let [text_area, hint_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(hint_width)])
        .areas(inner);

    let prompt_width = PROMPT_SYMBOL.len();
    let field_width = (text_area.width as usize).saturating_sub(prompt_width);
    let (visible, cursor_offset) = visible_window(input_state, field_width);

    frame.render_widget(Paragraph::new(build_input_line(input_state, visible)), text_area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            SEND_HINT,
            styles::send_hint_style(can_submit),
        ))),
        hint_area,
    );

    let cursor_x = text_area
        .x
        .saturating_add(prompt_width as u16)
        .saturating_add(cursor_offset.min(u16::MAX as usize) as u16);
    frame.set_cursor_position((cursor_x, text_area.y));
}

/// Builds the line content for the input field.
fn build_input_line(input_state: &MessageInputState, visible: String) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if input_state.is_empty() {
        Line::from(vec![
            prompt,
            Span::styled(
                PLACEHOLDER_TEXT.to_owned(),
                styles::input_placeholder_style(),
            ),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(visible, styles::input_text_style()),
        ])
    }
}

/// Returns the slice of the draft that fits in `width` columns while keeping
/// the cursor visible, plus the cursor column inside that slice.
fn visible_window(input_state: &MessageInputState, width: usize) -> (String, usize) {
    let chars: Vec<char> = input_state.text().chars().collect();
    let cursor = input_state.cursor_position().min(chars.len());
    let column_of = |ch: &char| ch.width().unwrap_or(0);

    // Drop leading characters until the cursor column fits.
    let mut start = 0;
    let mut cursor_column: usize = chars[..cursor].iter().map(column_of).sum();
    while start < cursor && cursor_column >= width.max(1) {
        cursor_column -= column_of(&chars[start]);
        start += 1;
    }

    let mut visible = String::new();
    let mut used = 0;
    for ch in &chars[start..] {
        let ch_width = column_of(ch);
        if used + ch_width > width {
            break;
        }
        visible.push(*ch);
        used += ch_width;
    }

    (visible, cursor_column)
}
