//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::color::{badge_tone, header_text_tone, BackgroundTone, HexColor};

const ACCENT: Color = Color::Rgb(0x66, 0x7E, 0xEA);
const INK: Color = Color::Rgb(0x2D, 0x37, 0x48);
const MUTED: Color = Color::Rgb(0x71, 0x80, 0x96);
const FAINT: Color = Color::Rgb(0xA0, 0xAE, 0xC0);
const LEAVE: Color = Color::Rgb(0xED, 0x64, 0xA6);
const HEADER_DARK_TEXT: Color = Color::Rgb(0x1A, 0x20, 0x2C);
const DISABLED: Color = Color::Rgb(0xCB, 0xD5, 0xE0);

pub fn to_color(color: HexColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

// =============================================================================
// Group list styles
// =============================================================================

pub fn screen_title_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn screen_subtitle_style() -> Style {
    Style::default().fg(FAINT)
}

pub fn group_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn group_description_style() -> Style {
    Style::default().fg(MUTED)
}

/// Color bar at the start of a group card.
pub fn color_bar_style(color: HexColor) -> Style {
    Style::default().fg(to_color(color))
}

/// Member count badge; light group colors get the dark-ink variant.
pub fn member_badge_style(color: HexColor) -> Style {
    match badge_tone(color) {
        BackgroundTone::Light => Style::default()
            .fg(INK)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD),
        BackgroundTone::Dark => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    }
}

pub fn membership_action_style(is_joined: bool) -> Style {
    if is_joined {
        Style::default().fg(LEAVE)
    } else {
        Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    }
}

// =============================================================================
// Conversation styles
// =============================================================================

/// Header text on top of the group color.
pub fn header_style(color: HexColor) -> Style {
    let fg = match header_text_tone(color) {
        BackgroundTone::Light => HEADER_DARK_TEXT,
        BackgroundTone::Dark => Color::White,
    };
    Style::default().fg(fg).bg(to_color(color))
}

pub fn message_sender_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn own_message_style() -> Style {
    Style::default().fg(Color::White).bg(ACCENT)
}

pub fn other_message_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn message_age_style() -> Style {
    Style::default().fg(FAINT)
}

pub fn not_found_style() -> Style {
    Style::default().fg(MUTED)
}

// =============================================================================
// Input styles
// =============================================================================

pub fn input_prompt_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(FAINT)
}

pub fn send_hint_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DISABLED)
    }
}

pub fn active_panel_border_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn status_bar_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
