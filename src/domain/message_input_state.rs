//! Draft editing state for the conversation input field.

/// Maximum draft length in characters.
pub const MAX_DRAFT_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageInputState {
    text: String,
    /// Character index, not byte index.
    cursor_position: usize,
}

impl MessageInputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The draft as it would be submitted.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Replaces the whole draft and moves the cursor to its end.
    /// Input beyond [`MAX_DRAFT_LENGTH`] characters is cut off.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().take(MAX_DRAFT_LENGTH).collect();
        self.cursor_position = self.char_count();
    }

    /// Returns false when the draft is already at the length limit.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.char_count() >= MAX_DRAFT_LENGTH {
            return false;
        }
        let byte_idx = self.char_to_byte_index(self.cursor_position);
        self.text.insert(byte_idx, ch);
        self.cursor_position += 1;
        true
    }

    /// Backspace.
    pub fn delete_char_before(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        self.remove_char_at_cursor();
    }

    /// Delete key.
    pub fn delete_char_at(&mut self) {
        if self.cursor_position < self.char_count() {
            self.remove_char_at_cursor();
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn remove_char_at_cursor(&mut self) {
        let start = self.char_to_byte_index(self.cursor_position);
        let end = self.char_to_byte_index(self.cursor_position + 1);
        self.text.drain(start..end);
    }

    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.text.len())
    }
}
