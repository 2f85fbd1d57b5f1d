//! Search bar behavior: query validation, suggestions and simulated latency

pub mod pending;
pub mod query;
pub mod suggestions;

pub use pending::{CancellationToken, PendingSearch, SEARCH_LATENCY, SearchPoll};
pub use query::{MAX_QUERY_LEN, validate_query};
pub use suggestions::{SUGGESTION_VOCABULARY, suggestions};
