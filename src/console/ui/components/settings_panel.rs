use crate::console::constants::{SETTINGS_PANEL_HEIGHT, SETTINGS_PANEL_WIDTH};
use crate::console::domain::request::{LIMIT_HINT, limit_within_hint};
use crate::console::ui::components::{
    Component, centered_rect, text_input::TextInput, view_layout::Styles,
};
use crate::console::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SettingsField {
    #[default]
    Limit,
    Import,
}

/// Overlay with the result-count limit and the import action.
#[derive(Default)]
pub struct SettingsPanel {
    limit: TextInput,
    limit_value: Option<i64>,
    import_source: String,
    is_loading: bool,
    field: SettingsField,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_limit(&mut self, text: String, value: Option<i64>) {
        self.limit.set_text(text);
        self.limit_value = value;
    }

    pub fn set_import_source(&mut self, source: String) {
        self.import_source = source;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn field(&self) -> SettingsField {
        self.field
    }

    fn toggle_field(&mut self) {
        self.field = match self.field {
            SettingsField::Limit => SettingsField::Import,
            SettingsField::Import => SettingsField::Limit,
        };
    }

    fn import_button(&self) -> Line<'static> {
        let focused = self.field == SettingsField::Import;
        let label = if self.is_loading {
            " Importing... ".to_string()
        } else {
            " Import Data ".to_string()
        };
        let style = if self.is_loading {
            Styles::dimmed()
        } else if focused {
            Styles::selected().add_modifier(Modifier::REVERSED)
        } else {
            Styles::label()
        };
        Line::from(vec![Span::raw("  "), Span::styled(format!("[{label}]"), style)])
    }
}

impl Component for SettingsPanel {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let dialog_area = centered_rect(area, SETTINGS_PANEL_WIDTH, SETTINGS_PANEL_HEIGHT);
        f.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_style(Styles::focused_border(true));
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Limit input
                Constraint::Length(1), // Hint
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Import source
                Constraint::Min(1),    // Import button
            ])
            .split(inner);

        let limit_focused = self.field == SettingsField::Limit;
        let limit = Paragraph::new(Line::from(self.limit.render_cursor_spans(limit_focused))).block(
            Block::default()
                .title("Results per search")
                .borders(Borders::ALL)
                .border_style(Styles::focused_border(limit_focused)),
        );
        f.render_widget(limit, chunks[0]);

        let hint_style = if limit_within_hint(self.limit_value) {
            Styles::dimmed()
        } else {
            Styles::label()
        };
        let hint = Paragraph::new(format!(
            "Suggested {}-{}, empty = service default",
            LIMIT_HINT.start(),
            LIMIT_HINT.end()
        ))
        .style(hint_style);
        f.render_widget(hint, chunks[1]);

        let source = Paragraph::new(Line::from(vec![
            Span::styled("Source: ", Styles::label()),
            Span::styled(self.import_source.clone(), Styles::normal()),
        ]));
        f.render_widget(source, chunks[3]);

        f.render_widget(Paragraph::new(self.import_button()), chunks[4]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc | KeyCode::F(2) => Some(Message::CloseSettings),
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_field();
                None
            }
            KeyCode::Up | KeyCode::Down => {
                self.toggle_field();
                None
            }
            _ => match self.field {
                SettingsField::Import => match key.code {
                    KeyCode::Enter | KeyCode::Char(' ') if !self.is_loading => {
                        Some(Message::ImportRequested)
                    }
                    _ => None,
                },
                SettingsField::Limit => {
                    if key.code == KeyCode::Enter {
                        return Some(Message::CloseSettings);
                    }
                    if self.limit.handle_key(key) {
                        Some(Message::LimitInputChanged(self.limit.text().to_string()))
                    } else {
                        None
                    }
                }
            },
        }
    }
}
