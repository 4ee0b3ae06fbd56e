//! Display rules shared by the console and the one-shot formatter.

use regex::Regex;
use std::sync::LazyLock;

use crate::console::constants::CONTENT_PREVIEW_CHARS;
use crate::schemas::Record;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<\s*(/?)\s*([A-Za-z][A-Za-z0-9]*)[^>]*>").expect("tag pattern is a valid regex")
});

/// A run of snippet text, emphasised when it sat inside `<em>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

/// What a result row shows as its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Highlight(Vec<Segment>),
    Message(String),
    Empty,
}

/// Splits a service highlight snippet into plain and emphasised runs.
///
/// `<em>` and `</em>` toggle emphasis; every other tag is dropped.
pub fn parse_highlight(snippet: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut last = 0;

    for caps in TAG_RE.captures_iter(snippet) {
        let Some(whole) = caps.get(0) else { continue };
        push_segment(&mut segments, &snippet[last..whole.start()], depth > 0);
        last = whole.end();

        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let is_em = caps
            .get(2)
            .is_some_and(|m| m.as_str().eq_ignore_ascii_case("em"));
        if is_em {
            if closing {
                depth = depth.saturating_sub(1);
            } else {
                depth += 1;
            }
        }
    }
    push_segment(&mut segments, &snippet[last..], depth > 0);

    segments
}

fn push_segment(segments: &mut Vec<Segment>, text: &str, emphasized: bool) {
    if text.is_empty() {
        return;
    }
    match segments.last_mut() {
        Some(prev) if prev.emphasized == emphasized => prev.text.push_str(text),
        _ => segments.push(Segment {
            text: text.to_string(),
            emphasized,
        }),
    }
}

/// Keeps the first `max_chars` characters and appends `...` when anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Highlight if the service sent one, else the leading message text, else nothing.
pub fn preview(record: &Record) -> Preview {
    if let Some(highlight) = record.highlight.as_deref().filter(|h| !h.is_empty()) {
        return Preview::Highlight(parse_highlight(highlight));
    }
    match record.status_message.as_deref().filter(|m| !m.is_empty()) {
        Some(message) => Preview::Message(truncate_chars(message, CONTENT_PREVIEW_CHARS)),
        None => Preview::Empty,
    }
}

impl Preview {
    pub const EMPTY_TEXT: &'static str = "No content";

    /// The preview with emphasis flattened away.
    pub fn plain_text(&self) -> String {
        match self {
            Preview::Highlight(segments) => segments.iter().map(|s| s.text.as_str()).collect(),
            Preview::Message(text) => text.clone(),
            Preview::Empty => Self::EMPTY_TEXT.to_string(),
        }
    }
}

/// Formats a counter with comma thousands separators.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
