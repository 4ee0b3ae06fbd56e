use crate::console::domain::presentation::group_thousands;
use crate::console::ui::components::view_layout::Styles;
use crate::schemas::Stats;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Collection totals shown above the search form.
#[derive(Default)]
pub struct StatsBar {
    stats: Option<Stats>,
}

impl StatsBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_stats(&mut self, stats: Option<Stats>) {
        self.stats = stats;
    }

    pub fn build_line(stats: Option<&Stats>) -> Line<'static> {
        let Some(stats) = stats else {
            return Line::from(Span::styled("Loading statistics...", Styles::dimmed()));
        };

        let mut spans = vec![
            Span::styled("Total Posts: ", Styles::label()),
            Span::styled(group_thousands(stats.total), Styles::normal()),
            Span::styled("  Total Reactions: ", Styles::label()),
            Span::styled(group_thousands(stats.total_reactions), Styles::normal()),
            Span::styled("  Avg Reactions: ", Styles::label()),
            Span::styled(format!("{:.2}", stats.avg_reactions), Styles::normal()),
        ];

        if !stats.types.is_empty() {
            spans.push(Span::styled("  Types: ", Styles::label()));
            let types = stats
                .types
                .iter()
                .map(|(name, count)| format!("{name} {}", group_thousands(*count)))
                .collect::<Vec<_>>()
                .join(", ");
            spans.push(Span::styled(types, Styles::dimmed()));
        }

        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(Self::build_line(self.stats.as_ref())).block(
            Block::default()
                .title(" TrASH Console ")
                .title_style(Styles::title())
                .borders(Borders::ALL),
        );
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_placeholder_before_first_refresh() {
        assert_eq!(line_text(&StatsBar::build_line(None)), "Loading statistics...");
    }

    #[test]
    fn test_stats_line() {
        let stats = Stats {
            total: 5800,
            total_reactions: 1_234_567,
            avg_reactions: 212.857,
            types: BTreeMap::from([("photo".to_string(), 3000), ("video".to_string(), 12)]),
        };

        let text = line_text(&StatsBar::build_line(Some(&stats)));
        assert!(text.contains("Total Posts: 5,800"));
        assert!(text.contains("Total Reactions: 1,234,567"));
        assert!(text.contains("Avg Reactions: 212.86"));
        assert!(text.contains("photo 3,000, video 12"));
    }
}
