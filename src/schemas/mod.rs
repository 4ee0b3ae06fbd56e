pub mod record;
pub mod request;

pub use record::{Health, MutationOutcome, ReactionKind, Record, Stats};
pub use request::{FilterCriteria, SearchMode, SearchRequest, StatusType};
