use crate::console::domain::models::Severity;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

// Helper struct for consistent color scheme
pub struct ColorScheme;

impl ColorScheme {
    pub const PRIMARY: Color = Color::Cyan;
    pub const SECONDARY: Color = Color::Yellow;
    pub const ACCENT: Color = Color::Magenta;
    pub const TEXT: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const SELECTION: Color = Color::DarkGray;
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Blue;
}

// Helper struct for consistent styling
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(ColorScheme::SELECTION)
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(ColorScheme::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    /// Emphasised query terms inside highlighted snippets
    pub fn highlight() -> Style {
        Style::default()
            .fg(ColorScheme::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Border of the widget that currently has keyboard focus
    pub fn focused_border(focused: bool) -> Style {
        if focused {
            Style::default().fg(ColorScheme::PRIMARY)
        } else {
            Style::default().fg(ColorScheme::TEXT_DIM)
        }
    }

    pub fn severity(severity: Severity) -> Style {
        let color = match severity {
            Severity::Success => ColorScheme::SUCCESS,
            Severity::Error => ColorScheme::ERROR,
            Severity::Info => ColorScheme::INFO,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

/// Splits `area` into content and a one-line centered hint bar.
pub fn render_with_hints<F>(f: &mut Frame, area: Rect, hints: &str, render_content: F)
where
    F: FnOnce(&mut Frame, Rect),
{
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    render_content(f, chunks[0]);

    let status_bar = Paragraph::new(hints)
        .style(Styles::dimmed())
        .alignment(Alignment::Center);
    f.render_widget(status_bar, chunks[1]);
}
