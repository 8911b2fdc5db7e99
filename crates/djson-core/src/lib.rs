//! # djson-core
//!
//! A dynamically-typed JSON document model for Rust.
//!
//! A [`Document`] holds one value of any JSON type and lets callers read it
//! through forgiving, coercing getters, mutate it in place by key, index or
//! bracket path, sort homogeneous arrays, and render it back to text. Nested
//! objects and arrays handed out by accessors are live views into the parent
//! tree; `clone()` produces an independent deep copy.
//!
//! ## Quick start
//!
//! ```rust
//! use djson_core::{Document, SortOrder};
//!
//! let doc = Document::parse(r#"{"name":"Ann","scores":[3,1,2]}"#).unwrap();
//! assert_eq!(doc.string("name"), "Ann");
//!
//! doc.sort_path(r#"["scores"]"#, SortOrder::Ascending, None).unwrap();
//! doc.update_path(r#"["scores"][3]"#, 4).unwrap();
//! assert_eq!(doc.to_string(), r#"{"name":"Ann","scores":[1,2,3,4]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`document`]: the [`Document`] façade
//! - [`value`]: the seven-variant [`Value`] node and [`Kind`]
//! - [`mapping`] / [`sequence`]: shared-storage object and array handles
//! - [`coerce`]: lenient and strict scalar conversions
//! - [`path`]: bracket-path tokenizer and the traversal engine
//! - [`sort`]: in-place sorting of homogeneous sequences
//! - [`json`]: conversion to and from `serde_json` trees
//! - [`error`]: error types for parse, path and sort failures
//!
//! Documents are single-threaded: the container handles are `Rc`-based and
//! neither `Send` nor `Sync`.

pub mod coerce;
pub mod document;
pub mod error;
pub mod json;
pub mod mapping;
pub mod path;
pub mod sequence;
pub mod sort;
pub mod value;

pub use document::Document;
pub use error::{DocError, Result};
pub use mapping::Mapping;
pub use path::{walk, Path, Selector};
pub use sequence::Sequence;
pub use sort::SortOrder;
pub use value::{Kind, Value};
