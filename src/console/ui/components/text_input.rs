use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Single-line editable text with an emacs-style keymap.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor_position: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_text(text.into());
        input
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Replace the text and move the cursor to the end.
    ///
    /// A no-op when the text is unchanged so that re-syncing from state on
    /// every frame does not move the cursor.
    pub fn set_text(&mut self, text: String) {
        if text == self.text {
            return;
        }
        self.cursor_position = text.chars().count();
        self.text = text;
    }

    pub fn set_cursor_position(&mut self, position: usize) {
        self.cursor_position = position.min(self.len());
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }

        pos
    }

    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;
        let len = chars.len();

        while pos < len && chars.get(pos).is_some_and(|c| !c.is_whitespace()) {
            pos += 1;
        }
        while pos < len && chars.get(pos).is_some_and(|c| c.is_whitespace()) {
            pos += 1;
        }

        pos
    }

    /// Delete the chars in `start..end` and return whether the text changed
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.len() {
            return false;
        }

        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.text.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn backspace(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        self.delete_range(self.cursor_position - 1, self.cursor_position)
    }

    fn delete_under_cursor(&mut self) -> bool {
        self.delete_range(self.cursor_position, self.cursor_position + 1)
    }

    /// Render the text with a block cursor. Unfocused inputs render plain.
    pub fn render_cursor_spans(&self, focused: bool) -> Vec<Span<'_>> {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);

        if !focused {
            return vec![Span::raw(self.text.as_str())];
        }

        if self.cursor_position >= self.len() {
            return vec![
                Span::raw(self.text.as_str()),
                Span::styled(" ", cursor_style),
            ];
        }

        let split = self.byte_offset(self.cursor_position);
        let (before, rest) = self.text.split_at(split);
        let mut chars = rest.chars();
        let under = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after = chars.as_str();

        let mut spans = Vec::new();
        if !before.is_empty() {
            spans.push(Span::raw(before));
        }
        spans.push(Span::styled(under, cursor_style));
        if !after.is_empty() {
            spans.push(Span::raw(after));
        }
        spans
    }

    /// Handle a key event and return true if the text changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    false
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.len();
                    false
                }
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    false
                }
                KeyCode::Char('f') => {
                    self.cursor_position = (self.cursor_position + 1).min(self.len());
                    false
                }
                KeyCode::Char('h') => self.backspace(),
                KeyCode::Char('d') => self.delete_under_cursor(),
                KeyCode::Char('w') => {
                    let start = self.find_prev_word_boundary(self.cursor_position);
                    self.delete_range(start, self.cursor_position)
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
                KeyCode::Char('k') => self.delete_range(self.cursor_position, self.len()),
                _ => false,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                }
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                }
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_offset(self.cursor_position);
                self.text.insert(byte_pos, c);
                self.cursor_position += 1;
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete_under_cursor(),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.len());
                false
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                false
            }
            KeyCode::End => {
                self.cursor_position = self.len();
                false
            }
            _ => false,
        }
    }
}
