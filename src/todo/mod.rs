//! todo.txt task engine
//!
//! This module turns plain-text note lines into structured task items.
//! It is split into submodules for better organization:
//! - `item`: The `TodoItem` record and its due-date data
//! - `due`: Due-date urgency classification and thresholds
//! - `parser`: Line parser (explicit token state machine)
//! - `batch`: Multi-line / multi-note parsing with per-line failure capture
//! - `sort`: Display ordering of parsed items
//! - `serialize`: Canonical line reconstruction
//! - `tags`: Project/context tag vocabulary
//!
//! Nothing in here performs I/O or reads the clock on its own; the reference
//! instant is carried by `ParseContext`.

mod batch;
mod due;
mod error;
mod item;
mod parser;
mod serialize;
mod sort;
mod tags;

// Re-export all public types
pub use batch::{Batch, LineFailure, NoteSource, parse_note, parse_notes, todos_from_note, todos_from_notes};
pub use due::{Due, DueStatus, DueThresholds, ParseContext, classify, local_now};
pub use error::{ParseError, ThresholdError};
pub use item::{TodoItem, content_hash};
pub use parser::{is_date_token, parse_date_token, parse_line};
pub use serialize::{serialize, serialize_all};
pub use sort::{SortBucket, sort};
pub use tags::{TagKind, extract_tags};
