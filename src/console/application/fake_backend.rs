use std::collections::HashMap;
use std::sync::Mutex;

use crate::client::SearchBackend;
use crate::error::{ConsoleError, ConsoleResult};
use crate::schemas::{Health, Record, SearchRequest, Stats};

/// Scripted in-memory backend. Every call is recorded in `calls`.
pub struct FakeBackend {
    pub search_result: Mutex<ConsoleResult<Vec<Record>>>,
    pub similar_result: Mutex<ConsoleResult<Vec<Record>>>,
    pub records: Mutex<HashMap<String, Record>>,
    pub delete_result: Mutex<ConsoleResult<()>>,
    pub import_result: Mutex<ConsoleResult<Option<i64>>>,
    pub stats_result: Mutex<ConsoleResult<Stats>>,
    pub search_requests: Mutex<Vec<SearchRequest>>,
    pub calls: Mutex<Vec<String>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            search_result: Mutex::new(Ok(Vec::new())),
            similar_result: Mutex::new(Ok(Vec::new())),
            records: Mutex::new(HashMap::new()),
            delete_result: Mutex::new(Ok(())),
            import_result: Mutex::new(Ok(Some(0))),
            stats_result: Mutex::new(Ok(Stats::default())),
            search_requests: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub fn with_search_result(self, records: Vec<Record>) -> Self {
        *self.search_result.lock().unwrap() = Ok(records);
        self
    }

    pub fn with_record(self, record: Record) -> Self {
        self.records
            .lock()
            .unwrap()
            .insert(record.id.clone(), record);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record_call(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl SearchBackend for FakeBackend {
    fn search(&self, request: &SearchRequest) -> ConsoleResult<Vec<Record>> {
        self.record_call(format!("search:{}", request.query));
        self.search_requests.lock().unwrap().push(request.clone());
        self.search_result.lock().unwrap().clone()
    }

    fn similar(&self, id: &str, limit: Option<i64>) -> ConsoleResult<Vec<Record>> {
        self.record_call(format!("similar:{id}:{limit:?}"));
        self.similar_result.lock().unwrap().clone()
    }

    fn get_record(&self, id: &str) -> ConsoleResult<Record> {
        self.record_call(format!("get:{id}"));
        self.records
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| ConsoleError::Service("Post not found".to_string()))
    }

    fn delete_record(&self, id: &str) -> ConsoleResult<()> {
        self.record_call(format!("delete:{id}"));
        self.delete_result.lock().unwrap().clone()
    }

    fn import_source(&self, name: &str) -> ConsoleResult<Option<i64>> {
        self.record_call(format!("import:{name}"));
        self.import_result.lock().unwrap().clone()
    }

    fn get_stats(&self) -> ConsoleResult<Stats> {
        self.record_call("stats".to_string());
        self.stats_result.lock().unwrap().clone()
    }

    fn health(&self) -> ConsoleResult<Health> {
        self.record_call("health".to_string());
        Ok(Health {
            status: "ok".to_string(),
            elasticsearch: true,
        })
    }
}
