use crate::console::domain::filter::FilterField;
use crate::console::domain::models::{Completion, Severity};
use crate::schemas::SearchMode;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Search form
    QueryChanged(String),
    SearchModeChanged(SearchMode),
    FilterChanged(FilterField, String),
    FocusNext,
    FocusPrev,
    SearchRequested,
    ResetFilters,

    // Result list
    SelectResult(usize),
    ViewRequested(String),
    FindSimilarRequested(String),
    DeleteRequested(String),
    CloseDetail,

    // Settings panel
    ToggleSettings,
    CloseSettings,
    LimitInputChanged(String),
    ImportRequested,

    // Mode changes
    ShowHelp,
    CloseHelp,

    // Async events
    Completed(Completion),
    RefreshStats,

    // UI events
    Notify(String, Severity),

    // Terminal events
    Quit,
}
