//! Shared curation domain model for the scientometric clients.
//!
//! This crate owns the typed article record, curation status derivation,
//! list filtering/sorting/pagination, search parameter types, and user
//! account types consumed by both the `client` SPA and the `cli` tool.
//! The backend stores records as loosely-typed spreadsheet rows; this
//! crate normalizes that shape once, at the deserialization boundary, so
//! UI code never re-parses stringly-typed flags.

pub mod filter;
pub mod logs;
pub mod record;
pub mod search;
pub mod status;
pub mod users;

pub(crate) mod wire;

pub use filter::{RecordFilter, SortOrder, StatusFilter, Summary, paginate};
pub use logs::LlmLogEntry;
pub use record::ArticleRecord;
pub use search::{SearchHit, SearchParams, SortOption};
pub use status::{CurationStatus, StatusInfo};
pub use users::{Role, UserAccount};
