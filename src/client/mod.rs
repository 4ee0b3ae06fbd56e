//! Boundary to the remote search service.
//!
//! The console only ever talks to a [`SearchBackend`]; the HTTP client is the
//! production implementation, tests substitute an in-memory one.

pub mod http;


pub use http::HttpBackend;

use crate::error::ConsoleResult;
use crate::schemas::{Health, Record, SearchRequest, Stats};

/// Logical operations exposed by the search service.
///
/// Calls block the calling thread until the service answers; the console
/// runs them off the UI thread.
pub trait SearchBackend: Send + Sync {
    fn search(&self, request: &SearchRequest) -> ConsoleResult<Vec<Record>>;

    fn similar(&self, id: &str, limit: Option<i64>) -> ConsoleResult<Vec<Record>>;

    fn get_record(&self, id: &str) -> ConsoleResult<Record>;

    fn delete_record(&self, id: &str) -> ConsoleResult<()>;

    /// Returns the number of imported records when the service reports one.
    fn import_source(&self, name: &str) -> ConsoleResult<Option<i64>>;

    fn get_stats(&self) -> ConsoleResult<Stats>;

    fn health(&self) -> ConsoleResult<Health>;
}
