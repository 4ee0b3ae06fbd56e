#[cfg(test)]
mod tests {
    use super::super::fake_backend::FakeBackend;
    use super::super::search_service::*;
    use crate::console::domain::models::{Completion, Operation, WorkerRequest};
    use crate::error::ConsoleError;
    use crate::schemas::{FilterCriteria, Record, SearchMode, SearchRequest, Stats};
    use std::sync::Arc;

    fn record(id: &str) -> Record {
        Record {
            id: id.to_string(),
            status_message: Some(format!("message {id}")),
            ..Default::default()
        }
    }

    fn service(backend: Arc<FakeBackend>) -> SearchService {
        SearchService::new(backend)
    }

    #[test]
    fn test_search_request_id_propagation() {
        let backend = Arc::new(FakeBackend::default().with_search_result(vec![record("1")]));
        let service = service(backend.clone());

        for id in [1, 42, 999] {
            let completion = service.execute(WorkerRequest {
                id,
                operation: Operation::Search(SearchRequest {
                    query: "rally".to_string(),
                    search_type: SearchMode::Text,
                    size: Some(10),
                    filters: FilterCriteria::default(),
                }),
            });

            assert_eq!(completion.id(), id);
            assert!(matches!(completion, Completion::Search { result: Ok(ref r), .. } if r.len() == 1));
        }
        assert_eq!(backend.search_requests.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_similar_forwards_limit() {
        let backend = Arc::new(FakeBackend::default());
        let service = service(backend.clone());

        service.execute(WorkerRequest {
            id: 1,
            operation: Operation::Similar {
                record_id: "abc".to_string(),
                limit: Some(25),
            },
        });

        assert_eq!(backend.calls(), vec!["similar:abc:Some(25)"]);
    }

    #[test]
    fn test_delete_keeps_record_id() {
        let backend = Arc::new(FakeBackend::default());
        *backend.delete_result.lock().unwrap() =
            Err(ConsoleError::Service("not_found".to_string()));
        let service = service(backend);

        let completion = service.execute(WorkerRequest {
            id: 3,
            operation: Operation::Delete("gone".to_string()),
        });

        assert_eq!(
            completion,
            Completion::Delete {
                id: 3,
                record_id: "gone".to_string(),
                result: Err(ConsoleError::Service("not_found".to_string())),
            }
        );
    }

    #[test]
    fn test_view_missing_record_is_service_error() {
        let service = service(Arc::new(FakeBackend::default()));

        let completion = service.execute(WorkerRequest {
            id: 5,
            operation: Operation::View("missing".to_string()),
        });

        assert!(matches!(
            completion,
            Completion::View { id: 5, result: Err(ConsoleError::Service(_)) }
        ));
    }

    #[test]
    fn test_import_and_stats() {
        let backend = Arc::new(FakeBackend::default());
        *backend.import_result.lock().unwrap() = Ok(Some(6000));
        *backend.stats_result.lock().unwrap() = Ok(Stats {
            total: 6000,
            ..Default::default()
        });
        let service = service(backend.clone());

        let import = service.execute(WorkerRequest {
            id: 1,
            operation: Operation::Import("posts.csv".to_string()),
        });
        let stats = service.execute(WorkerRequest {
            id: 2,
            operation: Operation::RefreshStats,
        });

        assert!(matches!(import, Completion::Import { result: Ok(Some(6000)), .. }));
        assert!(matches!(stats, Completion::Stats { result: Ok(ref s), .. } if s.total == 6000));
        assert_eq!(backend.calls(), vec!["import:posts.csv", "stats"]);
    }
}
