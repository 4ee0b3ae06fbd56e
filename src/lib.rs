pub mod client;
pub mod console;
pub mod error;
pub mod logging;
pub mod output;
pub mod schemas;

pub use client::{HttpBackend, SearchBackend};
pub use console::domain::dedup::dedup_records;
pub use console::domain::filter::{FilterBuilder, FilterForm};
pub use console::domain::request::compose_request;
pub use console::{ConsoleConfig, InteractiveConsole};
pub use error::{ConsoleError, ConsoleResult};
pub use schemas::{FilterCriteria, Record, SearchMode, SearchRequest, Stats};
