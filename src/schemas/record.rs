use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ConsoleError, ConsoleResult};

// One indexed post as returned by the search service.
// Counters stay optional: absent means "not reported", never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_published: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_name: Option<String>,
    /// Matched snippet markup, already sanitized by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_reactions: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_comments: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_shares: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_likes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_loves: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_wows: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_hahas: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_sads: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_angrys: Option<i64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionKind {
    Likes,
    Loves,
    Wows,
    Hahas,
    Sads,
    Angrys,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 6] = [
        ReactionKind::Likes,
        ReactionKind::Loves,
        ReactionKind::Wows,
        ReactionKind::Hahas,
        ReactionKind::Sads,
        ReactionKind::Angrys,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReactionKind::Likes => "Likes",
            ReactionKind::Loves => "Loves",
            ReactionKind::Wows => "Wows",
            ReactionKind::Hahas => "Hahas",
            ReactionKind::Sads => "Sads",
            ReactionKind::Angrys => "Angrys",
        }
    }
}

impl Record {
    pub fn reactions(&self) -> i64 {
        self.num_reactions.unwrap_or(0)
    }

    pub fn comments(&self) -> i64 {
        self.num_comments.unwrap_or(0)
    }

    pub fn shares(&self) -> i64 {
        self.num_shares.unwrap_or(0)
    }

    pub fn reaction(&self, kind: ReactionKind) -> i64 {
        let value = match kind {
            ReactionKind::Likes => self.num_likes,
            ReactionKind::Loves => self.num_loves,
            ReactionKind::Wows => self.num_wows,
            ReactionKind::Hahas => self.num_hahas,
            ReactionKind::Sads => self.num_sads,
            ReactionKind::Angrys => self.num_angrys,
        };
        value.unwrap_or(0)
    }

    pub fn type_label(&self) -> &str {
        self.status_type.as_deref().unwrap_or("N/A")
    }

    pub fn published(&self) -> &str {
        self.status_published.as_deref().unwrap_or("")
    }
}

/// Aggregate snapshot of the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub total_reactions: i64,
    #[serde(default)]
    pub avg_reactions: f64,
    #[serde(default)]
    pub types: BTreeMap<String, i64>,
}

// `{success, count?, error?}` envelope returned by delete and import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MutationOutcome {
    /// Turns a reported failure into a service error carrying its message verbatim.
    pub fn into_result(self) -> ConsoleResult<Option<i64>> {
        if self.success {
            Ok(self.count)
        } else {
            Err(ConsoleError::Service(
                self.error
                    .unwrap_or_else(|| "operation reported failure".to_string()),
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub elasticsearch: bool,
}
