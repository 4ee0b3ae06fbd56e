use crate::console::domain::filter::{FilterField, FilterForm};
use crate::console::domain::models::Focus;
use crate::console::ui::components::{Component, text_input::TextInput, view_layout::Styles};
use crate::console::ui::events::Message;
use crate::schemas::StatusType;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const TEXT_FIELDS: [FilterField; 3] = [
    FilterField::MinReactions,
    FilterField::DateFrom,
    FilterField::DateTo,
];

/// Post type selector plus the minimum-reactions and date range inputs.
pub struct FilterPanel {
    status_type: String,
    min_reactions: TextInput,
    date_from: TextInput,
    date_to: TextInput,
    focus: Focus,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPanel {
    pub fn new() -> Self {
        Self {
            status_type: String::new(),
            min_reactions: TextInput::new(),
            date_from: TextInput::new(),
            date_to: TextInput::new(),
            focus: Focus::Query,
        }
    }

    pub fn set_form(&mut self, form: &FilterForm) {
        self.status_type = form.status_type.clone();
        self.min_reactions.set_text(form.min_reactions.clone());
        self.date_from.set_text(form.date_from.clone());
        self.date_to.set_text(form.date_to.clone());
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    fn input_mut(&mut self, field: FilterField) -> Option<&mut TextInput> {
        match field {
            FilterField::MinReactions => Some(&mut self.min_reactions),
            FilterField::DateFrom => Some(&mut self.date_from),
            FilterField::DateTo => Some(&mut self.date_to),
            FilterField::StatusType => None,
        }
    }

    fn input(&self, field: FilterField) -> Option<&TextInput> {
        match field {
            FilterField::MinReactions => Some(&self.min_reactions),
            FilterField::DateFrom => Some(&self.date_from),
            FilterField::DateTo => Some(&self.date_to),
            FilterField::StatusType => None,
        }
    }

    /// Steps through "all types" followed by each post type.
    fn cycle_status_type(&mut self, forward: bool) -> Message {
        let options: Vec<&str> = std::iter::once("")
            .chain(StatusType::ALL.iter().map(|t| t.as_str()))
            .collect();
        let current = options
            .iter()
            .position(|o| *o == self.status_type)
            .unwrap_or(0);
        let len = options.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.status_type = options[next].to_string();
        Message::FilterChanged(FilterField::StatusType, self.status_type.clone())
    }

    fn status_type_label(&self) -> &str {
        if self.status_type.is_empty() {
            "All Types"
        } else {
            &self.status_type
        }
    }

    fn field_block(field: FilterField, focused: bool) -> Block<'static> {
        Block::default()
            .title(field.label())
            .borders(Borders::ALL)
            .border_style(Styles::focused_border(focused))
    }
}

impl Component for FilterPanel {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        let type_focused = self.focus == Focus::Filter(FilterField::StatusType);
        let selector = Paragraph::new(Line::from(vec![
            Span::styled("◀ ", Styles::dimmed()),
            Span::styled(self.status_type_label().to_string(), Styles::normal()),
            Span::styled(" ▶", Styles::dimmed()),
        ]))
        .block(Self::field_block(FilterField::StatusType, type_focused));
        f.render_widget(selector, chunks[0]);

        for (field, chunk) in TEXT_FIELDS.into_iter().zip(chunks.iter().skip(1)) {
            let focused = self.focus == Focus::Filter(field);
            if let Some(input) = self.input(field) {
                let widget = Paragraph::new(Line::from(input.render_cursor_spans(focused)))
                    .block(Self::field_block(field, focused));
                f.render_widget(widget, *chunk);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let Focus::Filter(field) = self.focus else {
            return None;
        };

        if key.code == KeyCode::Enter {
            return Some(Message::SearchRequested);
        }

        if field == FilterField::StatusType {
            return match key.code {
                KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                    Some(self.cycle_status_type(true))
                }
                KeyCode::Left | KeyCode::Up => Some(self.cycle_status_type(false)),
                _ => None,
            };
        }

        let input = self.input_mut(field)?;
        if input.handle_key(key) {
            Some(Message::FilterChanged(field, input.text().to_string()))
        } else {
            None
        }
    }
}
