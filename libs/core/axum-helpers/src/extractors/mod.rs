//! Validating extractors.
//!
//! Each one rejects bad input with the shared `400 Validation error` envelope
//! before the handler runs.

pub mod page_query;
pub mod uuid_path;
pub mod validated_json;

pub use page_query::PageQuery;
pub use uuid_path::UuidPath;
pub use validated_json::{ValidatedJson, non_null};
