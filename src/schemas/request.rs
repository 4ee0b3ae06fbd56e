use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Ranked full-text match
    #[default]
    Text,
    /// Exact phrase match
    Phrase,
    /// Explicit AND/OR/NOT operators
    Boolean,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::Text, SearchMode::Phrase, SearchMode::Boolean];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Text => "text",
            SearchMode::Phrase => "phrase",
            SearchMode::Boolean => "boolean",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Text => "Text (Vector Space)",
            SearchMode::Phrase => "Phrase",
            SearchMode::Boolean => "Boolean (AND/OR/NOT)",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SearchMode::Text => SearchMode::Phrase,
            SearchMode::Phrase => SearchMode::Boolean,
            SearchMode::Boolean => SearchMode::Text,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            SearchMode::Text => SearchMode::Boolean,
            SearchMode::Phrase => SearchMode::Text,
            SearchMode::Boolean => SearchMode::Phrase,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type tags a post can be filtered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
    Photo,
    Video,
    Link,
    Status,
}

impl StatusType {
    pub const ALL: [StatusType; 4] = [
        StatusType::Photo,
        StatusType::Video,
        StatusType::Link,
        StatusType::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusType::Photo => "photo",
            StatusType::Video => "video",
            StatusType::Link => "link",
            StatusType::Status => "status",
        }
    }
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Absent keys mean "unconstrained". Values are forwarded without validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_reactions: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl FilterCriteria {
    pub fn is_unconstrained(&self) -> bool {
        self.status_type.is_none()
            && self.min_reactions.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub search_type: SearchMode,
    /// Omitted when the user cleared the limit; the service then uses its default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(default)]
    pub filters: FilterCriteria,
}
