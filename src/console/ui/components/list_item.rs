use crate::console::domain::presentation::{Preview, group_thousands, preview};
use crate::console::ui::components::highlight::preview_spans;
use crate::console::ui::components::view_layout::{ColorScheme, Styles};
use crate::schemas::Record;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Width of the rank/type/date gutter that continuation lines are indented by.
const INDENT: usize = 2;

/// Trait for items that can be displayed in a generic list viewer
pub trait ListItem: Clone {
    /// Short category tag shown next to the rank
    fn get_tag(&self) -> &str;

    fn get_timestamp(&self) -> &str;

    fn get_preview(&self) -> Preview;

    /// Labelled counters shown under the body
    fn get_counters(&self) -> Vec<(&'static str, i64)>;

    fn create_header_line(&self, rank: usize) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("#{rank:<4}"), Styles::title()),
            Span::styled(format!("[{}] ", self.get_tag()), Styles::label()),
            Span::styled(self.get_timestamp().to_string(), Styles::dimmed()),
        ])
    }

    fn create_counter_line(&self) -> Line<'static> {
        let colors = [ColorScheme::INFO, ColorScheme::SUCCESS, ColorScheme::ACCENT];
        let mut spans = vec![Span::raw(" ".repeat(INDENT))];
        for (i, (label, value)) in self.get_counters().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Styles::dimmed()));
            }
            spans.push(Span::styled(format!("{label}: "), Styles::dimmed()));
            spans.push(Span::styled(
                group_thousands(value),
                Style::default().fg(colors[i % colors.len()]),
            ));
        }
        Line::from(spans)
    }

    /// Header, one clipped body line and the counters.
    fn create_truncated_lines(&self, rank: usize, max_width: usize) -> Vec<Line<'static>> {
        let body_width = max_width.saturating_sub(INDENT);
        let mut body = vec![Span::raw(" ".repeat(INDENT))];
        body.extend(clip_spans(preview_spans(&self.get_preview()), body_width));

        vec![
            self.create_header_line(rank),
            Line::from(body),
            self.create_counter_line(),
        ]
    }

    /// Header, the full body word-wrapped to `max_width` and the counters.
    fn create_full_lines(&self, rank: usize, max_width: usize) -> Vec<Line<'static>> {
        let body_width = max_width.saturating_sub(INDENT);
        let mut lines = vec![self.create_header_line(rank)];
        for line in wrap_spans(preview_spans(&self.get_preview()), body_width) {
            let mut spans = vec![Span::raw(" ".repeat(INDENT))];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }
        lines.push(self.create_counter_line());
        lines
    }
}

impl ListItem for Record {
    fn get_tag(&self) -> &str {
        self.type_label()
    }

    fn get_timestamp(&self) -> &str {
        self.published()
    }

    fn get_preview(&self) -> Preview {
        preview(self)
    }

    fn get_counters(&self) -> Vec<(&'static str, i64)> {
        vec![
            ("Reactions", self.reactions()),
            ("Comments", self.comments()),
            ("Shares", self.shares()),
        ]
    }
}

pub fn truncate_message(text: &str, max_width: usize) -> String {
    let text = text.replace('\n', " ");
    let chars: Vec<char> = text.chars().collect();

    if chars.len() <= max_width {
        text
    } else {
        let truncated: String = chars.into_iter().take(max_width.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Clips styled spans to `max_width` characters, ending in `...` when cut.
pub fn clip_spans(spans: Vec<Span<'static>>, max_width: usize) -> Vec<Span<'static>> {
    let total: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    if total <= max_width {
        return spans;
    }

    let mut budget = max_width.saturating_sub(3);
    let mut clipped = Vec::new();
    for span in spans {
        if budget == 0 {
            break;
        }
        let len = span.content.chars().count();
        if len <= budget {
            budget -= len;
            clipped.push(span);
        } else {
            let text: String = span.content.chars().take(budget).collect();
            clipped.push(Span::styled(text, span.style));
            budget = 0;
        }
    }
    clipped.push(Span::styled("...", Styles::dimmed()));
    clipped
}

/// Greedy word wrap that keeps each word's style.
pub fn wrap_spans(spans: Vec<Span<'static>>, max_width: usize) -> Vec<Line<'static>> {
    if max_width == 0 {
        return vec![];
    }

    let words: Vec<(String, Style)> = spans
        .iter()
        .flat_map(|span| {
            span.content
                .split_whitespace()
                .map(move |word| (word.to_string(), span.style))
        })
        .collect();

    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0;

    for (word, style) in words {
        let word_width = word.chars().count();
        if current_width > 0 && current_width + 1 + word_width > max_width {
            lines.push(Line::from(std::mem::take(&mut current)));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(Span::raw(" "));
            current_width += 1;
        }
        current.push(Span::styled(word, style));
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    if lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines
}
