use crate::console::constants::{DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::console::ui::components::{Component, centered_rect, view_layout::Styles};
use crate::console::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn heading(text: &'static str) -> Line<'static> {
        Line::from(vec![Span::styled(text, Styles::label())])
    }

    pub fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled("TrASH Console", Styles::title())]),
            Line::from(""),
            Self::heading("Search Form:"),
            Line::from("  Tab/Shift+Tab - Move focus (query, mode, filters, results)"),
            Line::from("  Enter         - Search with the current query and filters"),
            Line::from("  ←/→           - Change search mode or post type"),
            Line::from("  Ctrl+R        - Reset query, filters and results"),
            Line::from(""),
            Self::heading("Results:"),
            Line::from("  ↑/↓, Ctrl+P/N - Navigate"),
            Line::from("  Enter or v    - View full post"),
            Line::from("  s             - Find similar posts"),
            Line::from("  d or Delete   - Delete post"),
            Line::from(""),
            Self::heading("Search Modes:"),
            Line::from("  Text          - Ranked full-text match"),
            Line::from("  Phrase        - Exact phrase"),
            Line::from("  Boolean       - trade AND (china OR mexico) NOT wall"),
            Line::from(""),
            Self::heading("General:"),
            Line::from("  F2            - Settings (result limit, import)"),
            Line::from("  F1            - Show this help"),
            Line::from("  Esc, Ctrl+C×2 - Quit"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(DIALOG_MARGIN));
        let height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(DIALOG_MARGIN));
        let dialog_area = centered_rect(area, width, height);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Styles::focused_border(true)),
            )
            .style(Styles::normal())
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}
