use super::color::HexColor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Informational only; joining or leaving does not change it.
    pub member_count: u32,
    pub is_joined: bool,
    pub color: HexColor,
}

impl Group {
    /// Label for the join/leave action on a group card.
    pub fn membership_action_label(&self) -> &'static str {
        if self.is_joined {
            "Leave Group"
        } else {
            "Join Group"
        }
    }
}

/// Formats a member count for the card badge: `1247` -> `1.2k`.
pub fn format_member_count(count: u32) -> String {
    if count >= 1000 {
        format!("{:.1}k", f64::from(count) / 1000.0)
    } else {
        count.to_string()
    }
}
