use std::time::Instant;

use super::filter::FilterField;
use crate::error::ConsoleResult;
use crate::schemas::{Record, SearchRequest, Stats};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Search,
    Help,
}

/// Which input on the search screen receives keystrokes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Query,
    SearchMode,
    Filter(FilterField),
    Results,
}

impl Focus {
    const RING: [Focus; 7] = [
        Focus::Query,
        Focus::SearchMode,
        Focus::Filter(FilterField::StatusType),
        Focus::Filter(FilterField::MinReactions),
        Focus::Filter(FilterField::DateFrom),
        Focus::Filter(FilterField::DateTo),
        Focus::Results,
    ];

    fn position(&self) -> usize {
        Self::RING.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::RING[(self.position() + 1) % Self::RING.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::RING.len();
        Self::RING[(self.position() + len - 1) % len]
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Success,
    Error,
    Info,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
}

/// A unit of work sent to the service.
#[derive(Clone, PartialEq, Debug)]
pub enum Operation {
    Search(SearchRequest),
    Similar { record_id: String, limit: Option<i64> },
    View(String),
    Delete(String),
    Import(String),
    RefreshStats,
}

impl Operation {
    /// Search, similar and import drive the loading indicator.
    pub fn shows_loading(&self) -> bool {
        matches!(
            self,
            Operation::Search(_) | Operation::Similar { .. } | Operation::Import(_)
        )
    }

    /// Operations whose response replaces the whole result list.
    pub fn replaces_results(&self) -> bool {
        matches!(self, Operation::Search(_) | Operation::Similar { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Search(_) => "search",
            Operation::Similar { .. } => "similar",
            Operation::View(_) => "view",
            Operation::Delete(_) => "delete",
            Operation::Import(_) => "import",
            Operation::RefreshStats => "stats",
        }
    }
}

// Request and response for the worker threads
#[derive(Clone, PartialEq, Debug)]
pub struct WorkerRequest {
    pub id: u64,
    pub operation: Operation,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Completion {
    Search {
        id: u64,
        result: ConsoleResult<Vec<Record>>,
    },
    Similar {
        id: u64,
        result: ConsoleResult<Vec<Record>>,
    },
    View {
        id: u64,
        result: ConsoleResult<Record>,
    },
    Delete {
        id: u64,
        record_id: String,
        result: ConsoleResult<()>,
    },
    Import {
        id: u64,
        result: ConsoleResult<Option<i64>>,
    },
    Stats {
        id: u64,
        result: ConsoleResult<Stats>,
    },
}

impl Completion {
    pub fn id(&self) -> u64 {
        match self {
            Completion::Search { id, .. }
            | Completion::Similar { id, .. }
            | Completion::View { id, .. }
            | Completion::Delete { id, .. }
            | Completion::Import { id, .. }
            | Completion::Stats { id, .. } => *id,
        }
    }
}
