use crate::console::domain::models::Focus;
use crate::console::ui::components::{Component, text_input::TextInput, view_layout::Styles};
use crate::console::ui::events::Message;
use crate::schemas::SearchMode;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const MODE_SELECTOR_WIDTH: u16 = 26;

/// Query input plus the search-mode selector.
pub struct SearchBar {
    input: TextInput,
    mode: SearchMode,
    is_loading: bool,
    focus: Focus,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
            mode: SearchMode::Text,
            is_loading: false,
            focus: Focus::Query,
        }
    }

    pub fn set_query(&mut self, query: String) {
        self.input.set_text(query);
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn query(&self) -> &str {
        self.input.text()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    fn handle_mode_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Left | KeyCode::Up => {
                self.mode = self.mode.prev();
                Some(Message::SearchModeChanged(self.mode))
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                self.mode = self.mode.next();
                Some(Message::SearchModeChanged(self.mode))
            }
            KeyCode::Enter => Some(Message::SearchRequested),
            _ => None,
        }
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(MODE_SELECTOR_WIDTH)])
            .split(area);

        let mut title = "Search".to_string();
        if self.is_loading {
            title.push_str(" - Searching...");
        }

        let query_focused = self.focus == Focus::Query;
        let input = Paragraph::new(Line::from(self.input.render_cursor_spans(query_focused)))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Styles::focused_border(query_focused)),
            )
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(input, chunks[0]);

        let mode_focused = self.focus == Focus::SearchMode;
        let selector = Paragraph::new(Line::from(vec![
            Span::styled("◀ ", Styles::dimmed()),
            Span::styled(self.mode.label(), Styles::normal()),
            Span::styled(" ▶", Styles::dimmed()),
        ]))
        .block(
            Block::default()
                .title("Mode")
                .borders(Borders::ALL)
                .border_style(Styles::focused_border(mode_focused)),
        );
        f.render_widget(selector, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match self.focus {
            Focus::SearchMode => self.handle_mode_key(key),
            _ => {
                if key.code == KeyCode::Enter {
                    return Some(Message::SearchRequested);
                }
                if self.input.handle_key(key) {
                    Some(Message::QueryChanged(self.input.text().to_string()))
                } else {
                    None
                }
            }
        }
    }
}
