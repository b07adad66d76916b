use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{
    conversation_state::{ConversationState, ConversationUiState},
    group::{format_member_count, Group},
    group_list_state::GroupListState,
    shell_state::{Screen, ShellState},
};

use super::message_input::render_message_input;
use super::message_rendering::{build_message_bubbles, bubble_to_list_item};
use super::styles;

pub const SCREEN_TITLE: &str = "Focus Groups";
pub const SCREEN_SUBTITLE: &str = "Join communities that matter to you";
pub const NOT_FOUND_TITLE: &str = "Group not found";

const COLOR_BAR: &str = "▌ ";

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    match state.conversation() {
        None => render_group_list(frame, content_area, state.group_list()),
        Some(conversation) => match conversation.ui_state() {
            ConversationUiState::Ready => {
                render_conversation(frame, content_area, conversation, state.now_ms())
            }
            ConversationUiState::NotFound => render_not_found(frame, content_area),
        },
    }

    let status = Paragraph::new(status_line(state)).style(styles::status_bar_style());
    frame.render_widget(status, status_area);
}

// =============================================================================
// Group list screen
// =============================================================================

fn render_group_list(frame: &mut Frame<'_>, area: Rect, group_list: &GroupListState) {
    let [title_area, list_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .areas(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(SCREEN_TITLE, styles::screen_title_style())),
        Line::from(Span::styled(SCREEN_SUBTITLE, styles::screen_subtitle_style())),
    ]);
    frame.render_widget(title, title_area);

    if group_list.is_empty() {
        frame.render_widget(
            Paragraph::new("No groups available.").style(styles::not_found_style()),
            list_area,
        );
        return;
    }

    // Room for the highlight symbol.
    let card_width = list_area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem<'static>> = group_list
        .groups()
        .iter()
        .map(|group| group_card(group, card_width))
        .collect();

    let list = List::new(items)
        .highlight_symbol("› ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let mut list_state = ListState::default();
    list_state.select(group_list.selected_index());
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

fn group_card(group: &Group, width: usize) -> ListItem<'static> {
    ListItem::new(group_card_lines(group, width))
}

fn group_card_lines(group: &Group, width: usize) -> Vec<Line<'static>> {
    let bar = || Span::styled(COLOR_BAR, styles::color_bar_style(group.color));
    let content_width = width.saturating_sub(COLOR_BAR.width());

    let badge = format!(" {} members ", format_member_count(group.member_count));
    let title_width = content_width.saturating_sub(badge.width() + 1);

    vec![
        Line::from(vec![
            bar(),
            Span::styled(
                truncate_to_width(&group.title, title_width),
                styles::group_title_style(),
            ),
            Span::raw(" "),
            Span::styled(badge, styles::member_badge_style(group.color)),
        ]),
        Line::from(vec![
            bar(),
            Span::styled(
                truncate_to_width(&group.description, content_width),
                styles::group_description_style(),
            ),
        ]),
        Line::from(vec![
            bar(),
            Span::styled(
                format!("[ {} ]", group.membership_action_label()),
                styles::membership_action_style(group.is_joined),
            ),
        ]),
        Line::default(),
    ]
}

// =============================================================================
// Conversation screen
// =============================================================================

fn render_conversation(
    frame: &mut Frame<'_>,
    area: Rect,
    conversation: &ConversationState,
    now_ms: i64,
) {
    let Some(group) = conversation.group() else {
        return;
    };

    let [header_area, messages_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .areas(area);

    let header = Paragraph::new(conversation_header_lines(group))
        .style(styles::header_style(group.color))
        .wrap(Wrap { trim: false });
    frame.render_widget(header, header_area);

    let messages = conversation.messages();
    if messages.is_empty() {
        frame.render_widget(
            Paragraph::new("No messages yet. Say hello!")
                .alignment(Alignment::Center)
                .style(styles::not_found_style()),
            messages_area,
        );
    } else {
        let bubbles = build_message_bubbles(messages, now_ms, messages_area.width as usize);
        let items: Vec<ListItem<'static>> = bubbles.iter().map(bubble_to_list_item).collect();

        // Selecting the newest bubble keeps the list scrolled to the bottom.
        let mut list_state = ListState::default();
        list_state.select(items.len().checked_sub(1));
        frame.render_stateful_widget(List::new(items), messages_area, &mut list_state);
    }

    if let Some(draft) = conversation.draft() {
        render_message_input(frame, input_area, draft, conversation.can_submit());
    }
}

fn conversation_header_lines(group: &Group) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!(" {}", group.title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            " {} members",
            format_member_count(group.member_count)
        )),
        Line::from(format!(" {}", group.description)),
    ]
}

fn render_not_found(frame: &mut Frame<'_>, area: Rect) {
    let [_, body_area, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

    let body = Paragraph::new(vec![
        Line::from(Span::styled(NOT_FOUND_TITLE, styles::screen_title_style())),
        Line::default(),
        Line::from(Span::styled(
            "Press Esc to go back",
            styles::not_found_style(),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(body, body_area);
}

fn status_line(state: &ShellState) -> String {
    match state.screen() {
        Screen::GroupList => {
            "j/k: navigate | Enter: open | Space/t: join/leave | q: quit".to_owned()
        }
        Screen::Conversation => {
            let not_found = state
                .conversation()
                .is_some_and(|c| c.ui_state() == ConversationUiState::NotFound);
            if not_found {
                "Esc/q: back | Ctrl+C: quit".to_owned()
            } else {
                "Enter: send | Esc: back to groups | Ctrl+C: quit".to_owned()
            }
        }
    }
}

/// Cuts `text` to `width` display columns, marking the cut with an ellipsis.
fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_owned();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > width {
            break;
        }
        result.push(ch);
        used += ch_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        domain::{conversation_state::ConversationState, message::Message},
        test_support::{group, incoming},
    };

    const NOW_MS: i64 = 1_700_000_000_000;

    fn line_to_string(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn render_to_string(state: &ShellState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal
            .draw(|frame| render(frame, state))
            .expect("render must succeed");

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn list_state() -> ShellState {
        let mut big = group("1", "Productivity Masters", false);
        big.member_count = 1247;
        ShellState::new(
            GroupListState::new(vec![big, group("2", "Creative Coders", true)]),
            NOW_MS,
        )
    }

    #[test]
    fn group_card_shows_title_badge_description_and_action() {
        let mut group = group("1", "Productivity Masters", false);
        group.member_count = 1247;

        let lines = group_card_lines(&group, 80);

        assert_eq!(lines.len(), 4);
        assert!(line_to_string(&lines[0]).contains("Productivity Masters"));
        assert!(line_to_string(&lines[0]).contains("1.2k members"));
        assert!(line_to_string(&lines[1]).contains("About Productivity Masters"));
        assert!(line_to_string(&lines[2]).contains("Join Group"));
    }

    #[test]
    fn joined_group_card_offers_leave_action() {
        let lines = group_card_lines(&group("2", "Creative Coders", true), 80);

        assert!(line_to_string(&lines[2]).contains("Leave Group"));
    }

    #[test]
    fn group_card_truncates_long_descriptions() {
        let mut group = group("1", "Short", false);
        group.description = "a very long description that does not fit".to_owned();

        let lines = group_card_lines(&group, 20);

        assert!(line_to_string(&lines[1]).ends_with('…'));
        assert!(line_to_string(&lines[1]).width() <= 20);
    }

    #[test]
    fn truncate_to_width_keeps_short_text() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 4), "hel…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn renders_group_list_screen() {
        let screen = render_to_string(&list_state(), 80, 20);

        assert!(screen.contains(SCREEN_TITLE));
        assert!(screen.contains(SCREEN_SUBTITLE));
        assert!(screen.contains("Productivity Masters"));
        assert!(screen.contains("Creative Coders"));
        assert!(screen.contains("Leave Group"));
        assert!(screen.contains("q: quit"));
    }

    #[test]
    fn renders_empty_catalog_placeholder() {
        let state = ShellState::new(GroupListState::new(vec![]), NOW_MS);

        assert!(render_to_string(&state, 60, 10).contains("No groups available."));
    }

    #[test]
    fn renders_conversation_with_header_messages_and_input() {
        let mut state = list_state();
        let mut first = incoming("1", "Sarah Chen", "What tools do you use?");
        first.timestamp_ms = NOW_MS - 3_600_000;
        let mut conversation =
            ConversationState::open(group("1", "Productivity Masters", false), vec![first]);
        conversation.compose_draft("Notion");
        conversation.submit_draft(NOW_MS);
        state.open_conversation(conversation);

        let screen = render_to_string(&state, 80, 24);

        assert!(screen.contains("Productivity Masters"));
        assert!(screen.contains("100 members"));
        assert!(screen.contains("Sarah Chen"));
        assert!(screen.contains("What tools do you use?"));
        assert!(screen.contains("1h ago"));
        assert!(screen.contains("Notion"));
        assert!(screen.contains("Type a message..."));
        assert!(screen.contains("Enter: Send"));
    }

    #[test]
    fn renders_empty_history_placeholder() {
        let mut state = list_state();
        state.open_conversation(ConversationState::open(
            group("2", "Creative Coders", true),
            Vec::<Message>::new(),
        ));

        assert!(render_to_string(&state, 80, 20).contains("No messages yet"));
    }

    #[test]
    fn renders_not_found_screen() {
        let mut state = list_state();
        state.open_conversation(ConversationState::not_found("404"));

        let screen = render_to_string(&state, 60, 16);

        assert!(screen.contains(NOT_FOUND_TITLE));
        assert!(screen.contains("Press Esc to go back"));
        assert!(!screen.contains("Type a message"));
    }

    #[test]
    fn status_line_follows_the_screen() {
        let mut state = list_state();
        assert!(status_line(&state).contains("Space/t: join/leave"));

        state.open_conversation(ConversationState::open(
            group("1", "Productivity Masters", false),
            vec![],
        ));
        assert!(status_line(&state).contains("Enter: send"));
    }
}
