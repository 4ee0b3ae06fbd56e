use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

use super::SearchBackend;
use crate::error::{ConsoleError, ConsoleResult};
use crate::schemas::{Health, MutationOutcome, Record, SearchRequest, Stats};

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error body the service sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Blocking JSON client for the search service's `/api` routes.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> ConsoleResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConsoleError::Transport(format!("invalid API base '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ConsoleError::Transport(format!(
                "API base '{base_url}' cannot carry a path"
            )));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the API base, escaping each one.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn read_json<T: DeserializeOwned>(response: Response) -> ConsoleResult<T> {
        let status = response.status();
        if status.is_success() {
            return response.json::<T>().map_err(ConsoleError::from);
        }

        let body = response.text().unwrap_or_default();
        warn!(%status, "service request failed");
        Err(classify_failure(status, &body))
    }
}

/// Maps a non-2xx answer to a service error when the body explains itself.
pub(crate) fn classify_failure(status: StatusCode, body: &str) -> ConsoleError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => ConsoleError::Service(parsed.error),
        Err(_) => ConsoleError::Transport(format!("HTTP {status}")),
    }
}

impl SearchBackend for HttpBackend {
    fn search(&self, request: &SearchRequest) -> ConsoleResult<Vec<Record>> {
        let url = self.endpoint(&["search"]);
        debug!(%url, query = %request.query, mode = %request.search_type, "search");
        let response = self.client.post(url).json(request).send()?;
        Self::read_json(response)
    }

    fn similar(&self, id: &str, limit: Option<i64>) -> ConsoleResult<Vec<Record>> {
        let url = self.endpoint(&["similar", id]);
        debug!(%url, "similar");
        let mut builder = self.client.get(url);
        if let Some(size) = limit {
            builder = builder.query(&[("size", size)]);
        }
        Self::read_json(builder.send()?)
    }

    fn get_record(&self, id: &str) -> ConsoleResult<Record> {
        let url = self.endpoint(&["post", id]);
        debug!(%url, "get record");
        Self::read_json(self.client.get(url).send()?)
    }

    fn delete_record(&self, id: &str) -> ConsoleResult<()> {
        let url = self.endpoint(&["post", id]);
        debug!(%url, "delete record");
        let outcome: MutationOutcome = Self::read_json(self.client.delete(url).send()?)?;
        outcome.into_result().map(|_| ())
    }

    fn import_source(&self, name: &str) -> ConsoleResult<Option<i64>> {
        let url = self.endpoint(&["import"]);
        debug!(%url, source = name, "import");
        let response = self
            .client
            .post(url)
            .json(&json!({ "filename": name }))
            .send()?;
        let outcome: MutationOutcome = Self::read_json(response)?;
        outcome.into_result()
    }

    fn get_stats(&self) -> ConsoleResult<Stats> {
        let url = self.endpoint(&["stats"]);
        Self::read_json(self.client.get(url).send()?)
    }

    fn health(&self) -> ConsoleResult<Health> {
        let url = self.endpoint(&["health"]);
        Self::read_json(self.client.get(url).send()?)
    }
}
