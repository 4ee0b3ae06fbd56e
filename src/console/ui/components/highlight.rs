use crate::console::domain::presentation::{Preview, Segment};
use crate::console::ui::components::view_layout::Styles;
use ratatui::text::Span;

/// Turns highlight segments into spans, emphasising matched terms.
pub fn highlight_spans(segments: &[Segment]) -> Vec<Span<'static>> {
    segments
        .iter()
        .map(|segment| {
            let style = if segment.emphasized {
                Styles::highlight()
            } else {
                Styles::normal()
            };
            Span::styled(segment.text.replace('\n', " "), style)
        })
        .collect()
}

pub fn preview_spans(preview: &Preview) -> Vec<Span<'static>> {
    match preview {
        Preview::Highlight(segments) => highlight_spans(segments),
        Preview::Message(text) => vec![Span::styled(text.replace('\n', " "), Styles::normal())],
        Preview::Empty => vec![Span::styled(Preview::EMPTY_TEXT, Styles::dimmed())],
    }
}
