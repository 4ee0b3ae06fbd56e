use crate::console::domain::presentation::{Preview, group_thousands};
use crate::console::ui::components::{Component, view_layout, view_layout::Styles};
use crate::console::ui::events::Message;
use crate::schemas::{ReactionKind, Record};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const HINTS: &str = "↑/↓: Scroll | PgUp/PgDn: Page | Esc/Backspace/q: Close";

/// Full view of a single post.
#[derive(Default)]
pub struct RecordDetail {
    record: Option<Record>,
    scroll_offset: usize,
}

impl RecordDetail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `record`, resetting the scroll position when it is a different post.
    pub fn set_record(&mut self, record: Record) {
        if self.record.as_ref().map(|r| &r.id) != Some(&record.id) {
            self.scroll_offset = 0;
        }
        self.record = Some(record);
    }

    pub fn clear(&mut self) {
        self.record = None;
        self.scroll_offset = 0;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn section(title: &str) -> Line<'static> {
        Line::from(Span::styled(title.to_string(), Styles::title()))
    }

    fn field(label: &str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<12}"), Styles::label()),
            Span::styled(value, Styles::normal()),
        ])
    }

    pub fn build_lines(record: &Record) -> Vec<Line<'static>> {
        let mut lines = vec![
            Self::field("ID", record.id.clone()),
            Line::from(""),
            Self::section("Content"),
        ];

        match record.status_message.as_deref().filter(|m| !m.is_empty()) {
            Some(message) => lines.extend(message.lines().map(|l| Line::from(l.to_string()))),
            None => lines.push(Line::from(Span::styled(Preview::EMPTY_TEXT, Styles::dimmed()))),
        }

        lines.push(Line::from(""));
        lines.push(Self::field("Type", record.type_label().to_string()));
        lines.push(Self::field("Date", record.published().to_string()));
        if let Some(link) = record.status_link.as_deref().filter(|l| !l.is_empty()) {
            lines.push(Self::field("Link", link.to_string()));
        }

        lines.push(Line::from(""));
        lines.push(Self::section("Reaction Statistics"));
        lines.push(Self::field("Reactions", group_thousands(record.reactions())));
        lines.push(Self::field("Comments", group_thousands(record.comments())));
        lines.push(Self::field("Shares", group_thousands(record.shares())));
        lines.push(Line::from(""));
        for kind in ReactionKind::ALL {
            lines.push(Self::field(kind.label(), group_thousands(record.reaction(kind))));
        }

        lines
    }
}

impl Component for RecordDetail {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(record) = &self.record else {
            return;
        };

        let lines = Self::build_lines(record);
        let scroll = self.scroll_offset.min(lines.len().saturating_sub(1));
        self.scroll_offset = scroll;

        f.render_widget(Clear, area);
        view_layout::render_with_hints(f, area, HINTS, |f, area| {
            let paragraph = Paragraph::new(lines)
                .block(
                    Block::default()
                        .title(" Full Post ")
                        .borders(Borders::ALL)
                        .border_style(Styles::focused_border(true)),
                )
                .wrap(Wrap { trim: false })
                .scroll((scroll as u16, 0));
            f.render_widget(paragraph, area);
        });
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset += 1;
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset += 10;
                None
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => Some(Message::CloseDetail),
            _ => None,
        }
    }
}
