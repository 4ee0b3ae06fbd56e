use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

use crate::client::SearchBackend;
use crate::console::domain::models::{Completion, Operation, WorkerRequest};

/// Runs one request against the backend and packages the outcome.
///
/// Every request is attempted exactly once; retries are left to the user.
pub struct SearchService {
    backend: Arc<dyn SearchBackend>,
}

impl SearchService {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    pub fn execute(&self, request: WorkerRequest) -> Completion {
        let WorkerRequest { id, operation } = request;
        let name = operation.name();
        let started = Instant::now();

        let completion = match operation {
            Operation::Search(search) => Completion::Search {
                id,
                result: self.backend.search(&search),
            },
            Operation::Similar { record_id, limit } => Completion::Similar {
                id,
                result: self.backend.similar(&record_id, limit),
            },
            Operation::View(record_id) => Completion::View {
                id,
                result: self.backend.get_record(&record_id),
            },
            Operation::Delete(record_id) => {
                let result = self.backend.delete_record(&record_id);
                Completion::Delete {
                    id,
                    record_id,
                    result,
                }
            }
            Operation::Import(source) => Completion::Import {
                id,
                result: self.backend.import_source(&source),
            },
            Operation::RefreshStats => Completion::Stats {
                id,
                result: self.backend.get_stats(),
            },
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        if let Some(err) = failure(&completion) {
            warn!(id, operation = name, elapsed_ms, error = %err, "operation failed");
        } else {
            debug!(id, operation = name, elapsed_ms, "operation finished");
        }

        completion
    }
}

fn failure(completion: &Completion) -> Option<&crate::error::ConsoleError> {
    match completion {
        Completion::Search { result, .. } | Completion::Similar { result, .. } => {
            result.as_ref().err()
        }
        Completion::View { result, .. } => result.as_ref().err(),
        Completion::Delete { result, .. } => result.as_ref().err(),
        Completion::Import { result, .. } => result.as_ref().err(),
        Completion::Stats { result, .. } => result.as_ref().err(),
    }
}
