//! Plain-terminal formatting for the one-shot commands.

use chrono::{DateTime, NaiveDateTime};
use colored::Colorize;

use crate::console::domain::presentation::{Preview, group_thousands, preview};
use crate::schemas::{Health, ReactionKind, Record, Stats};

/// Normalises the publication timestamp to `YYYY-MM-DD HH:MM:SS` when it parses.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    } else if raw.is_empty() {
        "N/A".to_string()
    } else {
        raw.to_string()
    }
}

fn body_text(record: &Record, use_color: bool, full_text: bool) -> String {
    if full_text {
        return record
            .status_message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| Preview::EMPTY_TEXT.to_string());
    }

    match preview(record) {
        Preview::Highlight(segments) if use_color => segments
            .iter()
            .map(|s| {
                if s.emphasized {
                    s.text.bold().bright_magenta().to_string()
                } else {
                    s.text.clone()
                }
            })
            .collect(),
        other => other.plain_text(),
    }
}

/// One result as printed by the search and similar commands.
pub fn format_record(rank: usize, record: &Record, use_color: bool, full_text: bool) -> String {
    let timestamp = format_timestamp(record.published());
    let body = body_text(record, use_color, full_text);
    let counters = format!(
        "Reactions: {}  Comments: {}  Shares: {}",
        group_thousands(record.reactions()),
        group_thousands(record.comments()),
        group_thousands(record.shares())
    );

    if use_color {
        format!(
            "{} {} {} {}\n  {}\n  {}",
            format!("#{rank}").bright_cyan().bold(),
            format!("[{}]", record.type_label()).bright_yellow(),
            timestamp.bright_blue(),
            record.id.dimmed(),
            body,
            counters.dimmed()
        )
    } else {
        format!(
            "#{rank} [{}] {} {}\n  {}\n  {}",
            record.type_label(),
            timestamp,
            record.id,
            body,
            counters
        )
    }
}

/// Full view of one record for `--show`.
pub fn format_record_detail(record: &Record, use_color: bool) -> String {
    let label = |text: &str| {
        let padded = format!("{text:<12}");
        if use_color {
            padded.bright_yellow().to_string()
        } else {
            padded
        }
    };

    let mut lines = vec![
        format!("{}{}", label("ID"), record.id),
        format!("{}{}", label("Type"), record.type_label()),
        format!("{}{}", label("Date"), format_timestamp(record.published())),
    ];
    if let Some(link) = record.status_link.as_deref().filter(|l| !l.is_empty()) {
        lines.push(format!("{}{}", label("Link"), link));
    }
    lines.push(String::new());
    lines.push(
        record
            .status_message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| Preview::EMPTY_TEXT.to_string()),
    );
    lines.push(String::new());
    lines.push(format!("{}{}", label("Reactions"), group_thousands(record.reactions())));
    lines.push(format!("{}{}", label("Comments"), group_thousands(record.comments())));
    lines.push(format!("{}{}", label("Shares"), group_thousands(record.shares())));
    for kind in ReactionKind::ALL {
        lines.push(format!(
            "{}{}",
            label(kind.label()),
            group_thousands(record.reaction(kind))
        ));
    }

    lines.join("\n")
}

pub fn format_stats(stats: &Stats, use_color: bool) -> String {
    let heading = if use_color {
        "Collection statistics".bright_cyan().bold().to_string()
    } else {
        "Collection statistics".to_string()
    };

    let mut lines = vec![
        heading,
        format!("  Total posts:      {}", group_thousands(stats.total)),
        format!("  Total reactions:  {}", group_thousands(stats.total_reactions)),
        format!("  Avg reactions:    {:.2}", stats.avg_reactions),
    ];
    if !stats.types.is_empty() {
        lines.push("  By type:".to_string());
        for (name, count) in &stats.types {
            lines.push(format!("    {name:<10} {}", group_thousands(*count)));
        }
    }
    lines.join("\n")
}

pub fn format_health(health: &Health, use_color: bool) -> String {
    let search = if health.elasticsearch { "up" } else { "down" };
    let line = format!("status: {}  search index: {search}", health.status);
    if !use_color {
        return line;
    }
    if health.elasticsearch {
        line.green().to_string()
    } else {
        line.red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample() -> Record {
        Record {
            id: "p1".to_string(),
            status_message: Some("Make America great again".to_string()),
            status_published: Some("2016-11-08 23:59:00".to_string()),
            status_type: Some("video".to_string()),
            highlight: Some("Make <em>America</em> great again".to_string()),
            num_reactions: Some(1500),
            num_likes: Some(1400),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2016-11-08 23:59:00"), "2016-11-08 23:59:00");
        assert_eq!(
            format_timestamp("2016-11-08T23:59:00+00:00"),
            "2016-11-08 23:59:00"
        );
        assert_eq!(format_timestamp("11/8/2016"), "11/8/2016");
        assert_eq!(format_timestamp(""), "N/A");
    }

    #[test]
    fn test_format_record_plain() {
        let out = format_record(1, &sample(), false, false);
        assert_eq!(
            out,
            "#1 [video] 2016-11-08 23:59:00 p1\n  Make America great again\n  Reactions: 1,500  Comments: 0  Shares: 0"
        );
    }

    #[test]
    fn test_format_record_full_text_ignores_highlight() {
        let mut record = sample();
        record.status_message = Some("x".repeat(400));
        let out = format_record(2, &record, false, true);
        assert!(out.contains(&"x".repeat(400)));
    }

    #[test]
    fn test_format_record_without_content() {
        let record = Record {
            id: "e".to_string(),
            ..Default::default()
        };
        let out = format_record(3, &record, false, false);
        assert!(out.starts_with("#3 [N/A] N/A e"));
        assert!(out.contains("No content"));
    }

    #[test]
    fn test_format_record_detail() {
        let out = format_record_detail(&sample(), false);
        assert!(out.contains("ID          p1"));
        assert!(out.contains("Likes       1,400"));
        assert!(out.contains("Angrys      0"));
        assert!(!out.contains("Link"));
    }

    #[test]
    fn test_format_stats() {
        let stats = Stats {
            total: 5800,
            total_reactions: 2_000_000,
            avg_reactions: 344.827,
            types: BTreeMap::from([("photo".to_string(), 2500)]),
        };
        let out = format_stats(&stats, false);
        assert!(out.contains("Total posts:      5,800"));
        assert!(out.contains("Avg reactions:    344.83"));
        assert!(out.contains("photo      2,500"));
    }

    #[test]
    fn test_format_health() {
        let health = Health {
            status: "healthy".to_string(),
            elasticsearch: false,
        };
        assert_eq!(
            format_health(&health, false),
            "status: healthy  search index: down"
        );
    }
}
