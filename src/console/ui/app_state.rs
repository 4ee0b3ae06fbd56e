use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::console::application::notification::NotificationScheduler;
use crate::console::constants::DEFAULT_IMPORT_SOURCE;
use crate::console::domain::dedup::dedup_records;
use crate::console::domain::filter::{FilterBuilder, FilterForm};
use crate::console::domain::models::{Completion, Focus, Operation, Severity, WorkerRequest};
use crate::console::domain::request::{DEFAULT_LIMIT, compose_request};
use crate::console::ui::commands::Command;
use crate::console::ui::events::Message;
use crate::error::ConsoleResult;
use crate::schemas::{Record, SearchMode, Stats};

// Re-export Mode
pub use crate::console::domain::models::Mode;

/// Aggregate state of one console session.
///
/// All mutation goes through [`AppState::update`]; service calls leave as
/// [`Command::Dispatch`] and come back as [`Message::Completed`].
pub struct AppState {
    pub mode: Mode,
    pub search: SearchState,
    pub session: SessionState,
    pub ui: UiState,
    next_request_id: u64,
}

/// The search form.
pub struct SearchState {
    pub query: String,
    pub mode: SearchMode,
    pub filters: FilterForm,
    pub focus: Focus,
}

/// What the service has told us.
pub struct SessionState {
    /// Rank is the position in this list.
    pub results: Vec<Record>,
    pub selected_index: usize,
    /// Record shown in the detail view.
    pub selected_record: Option<Record>,
    pub stats: Option<Stats>,
    /// Outstanding search/similar/import request ids.
    pub in_flight: BTreeSet<u64>,
    /// Id of the latest request allowed to replace `results`.
    pub listing_generation: u64,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn selected(&self) -> Option<&Record> {
        self.results.get(self.selected_index)
    }
}

pub struct UiState {
    pub notifications: NotificationScheduler,
    pub settings_visible: bool,
    /// `None` when the limit field is empty; the service then applies its default.
    pub limit: Option<i64>,
    pub limit_input: String,
    pub import_source: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Some(DEFAULT_LIMIT), DEFAULT_IMPORT_SOURCE.to_string())
    }

    pub fn with_settings(limit: Option<i64>, import_source: String) -> Self {
        Self {
            mode: Mode::Search,
            search: SearchState {
                query: String::new(),
                mode: SearchMode::Text,
                filters: FilterForm::default(),
                focus: Focus::Query,
            },
            session: SessionState {
                results: Vec::new(),
                selected_index: 0,
                selected_record: None,
                stats: None,
                in_flight: BTreeSet::new(),
                listing_generation: 0,
            },
            ui: UiState {
                notifications: NotificationScheduler::default(),
                settings_visible: false,
                limit,
                limit_input: limit.map(|l| l.to_string()).unwrap_or_default(),
                import_source,
            },
            next_request_id: 0,
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.query = q;
                Command::None
            }
            Message::SearchModeChanged(mode) => {
                self.search.mode = mode;
                Command::None
            }
            Message::FilterChanged(field, value) => {
                self.search.filters.set(field, value);
                Command::None
            }
            Message::FocusNext => {
                self.search.focus = self.search.focus.next();
                Command::None
            }
            Message::FocusPrev => {
                self.search.focus = self.search.focus.prev();
                Command::None
            }
            Message::SearchRequested => {
                // No in-flight guard: a newer search supersedes an older one.
                let filters = FilterBuilder::build(&self.search.filters);
                let request =
                    compose_request(&self.search.query, self.search.mode, self.ui.limit, &filters);
                self.dispatch(Operation::Search(request))
            }
            Message::ResetFilters => {
                self.search.query.clear();
                self.search.filters.clear();
                self.session.results.clear();
                self.session.selected_index = 0;
                self.notify("Filters reset", Severity::Info);
                Command::None
            }
            Message::SelectResult(index) => {
                if index < self.session.results.len() {
                    self.session.selected_index = index;
                }
                Command::None
            }
            Message::ViewRequested(record_id) => self.dispatch(Operation::View(record_id)),
            Message::FindSimilarRequested(record_id) => self.dispatch(Operation::Similar {
                record_id,
                limit: self.ui.limit,
            }),
            Message::DeleteRequested(record_id) => self.dispatch(Operation::Delete(record_id)),
            Message::CloseDetail => {
                self.session.selected_record = None;
                Command::None
            }
            Message::ToggleSettings => {
                self.ui.settings_visible = !self.ui.settings_visible;
                Command::None
            }
            Message::CloseSettings => {
                self.ui.settings_visible = false;
                Command::None
            }
            Message::LimitInputChanged(text) => {
                self.apply_limit_input(text);
                Command::None
            }
            Message::ImportRequested => {
                let source = self.ui.import_source.clone();
                self.dispatch(Operation::Import(source))
            }
            Message::ShowHelp => {
                self.mode = Mode::Help;
                Command::None
            }
            Message::CloseHelp => {
                self.mode = Mode::Search;
                Command::None
            }
            Message::Completed(completion) => self.apply_completion(completion),
            Message::RefreshStats => self.dispatch(Operation::RefreshStats),
            Message::Notify(text, severity) => {
                self.notify(text, severity);
                Command::None
            }
            Message::Quit => {
                Command::None // Handle in main loop
            }
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.ui.notifications.post(message, severity);
    }

    /// Allocates a request id and registers the operation as outstanding.
    fn dispatch(&mut self, operation: Operation) -> Command {
        self.next_request_id += 1;
        let id = self.next_request_id;

        if operation.shows_loading() {
            self.session.in_flight.insert(id);
        }
        if operation.replaces_results() {
            self.session.listing_generation = id;
        }

        debug!(id, operation = operation.name(), "dispatch");
        Command::Dispatch(WorkerRequest { id, operation })
    }

    // Empty clears the limit, a parseable integer replaces it, anything else is
    // rejected and the previous value stays.
    fn apply_limit_input(&mut self, text: String) {
        if text.trim().is_empty() {
            self.ui.limit = None;
            self.ui.limit_input = String::new();
        } else if let Ok(value) = text.trim().parse::<i64>() {
            self.ui.limit = Some(value);
            self.ui.limit_input = text;
        }
    }

    /// True when `id` is not the latest listing request. Stale responses are dropped.
    fn is_stale_listing(&self, id: u64) -> bool {
        id != self.session.listing_generation
    }

    fn apply_completion(&mut self, completion: Completion) -> Command {
        let id = completion.id();
        self.session.in_flight.remove(&id);

        match completion {
            Completion::Search { id, result } => {
                if self.is_stale_listing(id) {
                    debug!(id, "discarding stale search response");
                    return Command::None;
                }
                match result {
                    Ok(records) => {
                        // Report what the service returned, before dedup.
                        let count = records.len();
                        self.replace_results(dedup_records(&records));
                        self.notify(format!("Found {count} results"), Severity::Success);
                    }
                    Err(err) => self.notify_error(&err, "Search error"),
                }
                Command::None
            }
            Completion::Similar { id, result } => {
                if self.is_stale_listing(id) {
                    debug!(id, "discarding stale similar response");
                    return Command::None;
                }
                match result {
                    Ok(records) => {
                        let count = records.len();
                        self.replace_results(records);
                        self.notify(format!("Found {count} similar posts"), Severity::Success);
                    }
                    Err(err) => self.notify_error(&err, "Error finding similar posts"),
                }
                Command::None
            }
            Completion::View { result, .. } => {
                match result {
                    Ok(record) => self.session.selected_record = Some(record),
                    Err(err) => self.notify_error(&err, "Error loading post"),
                }
                Command::None
            }
            Completion::Delete {
                record_id, result, ..
            } => match result {
                Ok(()) => {
                    self.remove_result(&record_id);
                    self.notify("Post deleted", Severity::Success);
                    self.dispatch(Operation::RefreshStats)
                }
                Err(err) => {
                    self.notify_error(&err, "Delete error");
                    Command::None
                }
            },
            Completion::Import { result, .. } => match result {
                Ok(count) => {
                    let count = count.unwrap_or(0);
                    self.notify(
                        format!("Successfully imported {count} posts!"),
                        Severity::Success,
                    );
                    self.dispatch(Operation::RefreshStats)
                }
                Err(err) => {
                    self.notify_error(&err, "Import error");
                    Command::None
                }
            },
            Completion::Stats { result, .. } => {
                self.apply_stats(result);
                Command::None
            }
        }
    }

    // Stats are advisory: a failed refresh keeps the previous snapshot.
    fn apply_stats(&mut self, result: ConsoleResult<Stats>) {
        match result {
            Ok(stats) => self.session.stats = Some(stats),
            Err(err) => warn!(error = %err, "failed to refresh stats"),
        }
    }

    fn notify_error(&mut self, err: &crate::error::ConsoleError, generic: &str) {
        self.notify(err.notification_text(generic), Severity::Error);
    }

    fn replace_results(&mut self, records: Vec<Record>) {
        self.session.results = records;
        self.session.selected_index = 0;
    }

    fn remove_result(&mut self, record_id: &str) {
        self.session.results.retain(|r| r.id != record_id);
        let len = self.session.results.len();
        if self.session.selected_index >= len {
            self.session.selected_index = len.saturating_sub(1);
        }
    }
}
