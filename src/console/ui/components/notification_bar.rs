use crate::console::domain::models::{Notification, Severity};
use crate::console::ui::components::{is_exit_prompt, list_item::truncate_message, view_layout::Styles};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// One-line strip showing the current notification, if any.
#[derive(Default)]
pub struct NotificationBar {
    current: Option<(String, Severity)>,
}

impl NotificationBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_notification(&mut self, notification: Option<&Notification>) {
        self.current = notification.map(|n| (n.message.clone(), n.severity));
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let Some((message, severity)) = &self.current else {
            f.render_widget(Paragraph::new(""), area);
            return;
        };

        let style = if is_exit_prompt(Some(message.as_str())) {
            Styles::label()
        } else {
            Styles::severity(*severity)
        };
        let marker = match severity {
            Severity::Success => "✓ ",
            Severity::Error => "✗ ",
            Severity::Info => "• ",
        };
        let text = truncate_message(message, (area.width as usize).saturating_sub(2));

        let line = Line::from(vec![Span::styled(marker, style), Span::styled(text, style)]);
        f.render_widget(Paragraph::new(line), area);
    }
}
