/// Sender label reserved for messages written by the person running the app.
pub const LOCAL_USER_SENDER: &str = "You";

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: String,
    pub timestamp_ms: i64,
    is_own: bool,
}

impl Message {
    /// Builds a message whose ownership follows from the sender label.
    pub fn from_sender(
        id: impl Into<String>,
        sender: impl Into<String>,
        text: impl Into<String>,
        timestamp_ms: i64,
    ) -> Self {
        let sender = sender.into();
        let is_own = sender == LOCAL_USER_SENDER;

        Self {
            id: id.into(),
            text: text.into(),
            sender,
            timestamp_ms,
            is_own,
        }
    }

    /// Builds a message authored by the local user.
    pub fn own(id: impl Into<String>, text: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            sender: LOCAL_USER_SENDER.to_owned(),
            timestamp_ms,
            is_own: true,
        }
    }

    pub fn is_own(&self) -> bool {
        self.is_own
    }
}

/// Coarse "time ago" label. Each bucket floors, so 59.9 minutes is `59m ago`.
pub fn relative_age(timestamp_ms: i64, now_ms: i64) -> String {
    let elapsed_ms = now_ms.saturating_sub(timestamp_ms);

    // Future timestamps only happen with clock skew; treat them as fresh.
    if elapsed_ms < MS_PER_MINUTE {
        return "now".to_owned();
    }

    if elapsed_ms < MS_PER_HOUR {
        return format!("{}m ago", elapsed_ms / MS_PER_MINUTE);
    }

    if elapsed_ms < MS_PER_DAY {
        return format!("{}h ago", elapsed_ms / MS_PER_HOUR);
    }

    format!("{}d ago", elapsed_ms / MS_PER_DAY)
}
