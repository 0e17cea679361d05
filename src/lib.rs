//! # docwire
//!
//! Convert between statically-typed records, a schemaless document value
//! model, and a canonical JSON dialect of that model.
//!
//! ## What is the document value model?
//!
//! The kind of value tree schemaless document databases store: maps, lists,
//! strings, 64-bit integers, booleans, UTC timestamps, and null. This crate
//! is the conversion engine around that model — it walks record graphs and
//! produces or consumes document values and text deterministically. It does
//! not talk to any database; callers hand the resulting values to whatever
//! client persists them.
//!
//! ## Key Features
//!
//! - **Closed value model**: [`DocValue`] is a finite set of variants;
//!   there is no silent fallback for unsupported field types — they simply
//!   do not compile
//! - **Per-path renames**: a [`RenameTable`] keyed by dotted field paths
//!   (`user.created_at`) overrides output names, and the same table works
//!   for both document building and text encoding
//! - **Pluggable timestamps**: [`TimestampFormat`] renders instants as UTC
//!   `...Z` text by default, with a built-in `+09:00` alternate and a custom
//!   escape hatch, configured per call rather than as shared mutable state
//! - **Deterministic output**: maps preserve insertion order, records
//!   enumerate fields in declaration order
//!
//! ## Quick Start
//!
//! ```rust
//! use docwire::{document_record, to_document, to_json, RenameTable};
//!
//! struct User {
//!     id: i64,
//!     name: String,
//!     active: bool,
//! }
//!
//! document_record!(User { id, name, active });
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! // Record -> document value
//! let doc = to_document(&user);
//!
//! // Document value -> canonical JSON text
//! let json = to_json(&doc).unwrap();
//! assert_eq!(json, "{\"id\": 123,\n\"name\": \"Alice\",\n\"active\": true}");
//! ```
//!
//! ## Renaming fields at depth
//!
//! ```rust
//! use docwire::{doc, to_json_with, EncodeOptions, RenameTable};
//!
//! let doc = doc!({ "a": { "b": 1 } });
//! let renames = RenameTable::from_iter([("a.b", "bb")]);
//!
//! let json = to_json_with(doc.as_map().unwrap(), &renames, &EncodeOptions::new()).unwrap();
//! assert_eq!(json, "{\"a\": {\"bb\": 1}}");
//! ```
//!
//! ## Reading records back
//!
//! ```rust
//! use docwire::{doc, from_document};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, PartialEq, Debug)]
//! struct Point { x: i64, y: i64 }
//!
//! let doc = doc!({ "x": 1, "y": 2 });
//! let point: Point = from_document(doc.as_map().unwrap()).unwrap();
//! assert_eq!(point, Point { x: 1, y: 2 });
//! ```
//!
//! ## Concurrency
//!
//! Every conversion is synchronous and pure. The timestamp formatter lives
//! in [`EncodeOptions`], supplied per call, so there is no shared mutable
//! state to race on.

pub mod de;
pub mod encode;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod path;
pub mod record;
pub mod reshape;
pub mod value;

pub use de::from_document;
pub use encode::JsonEncoder;
pub use error::{Error, Result};
pub use map::DocMap;
pub use options::{EncodeOptions, TimestampFormat};
pub use path::RenameTable;
pub use record::{DocumentRecord, ToDocument};
pub use reshape::reshape;
pub use value::DocValue;

/// Converts a record to a map-rooted document value.
///
/// Field names are taken verbatim; use [`to_document_renamed`] to apply a
/// rename table.
///
/// # Examples
///
/// ```rust
/// use docwire::{document_record, to_document, DocValue};
///
/// struct Point { x: i64, y: i64 }
/// document_record!(Point { x, y });
///
/// let doc = to_document(&Point { x: 1, y: 2 });
/// assert_eq!(doc.get("x"), Some(&DocValue::Integer(1)));
/// ```
#[must_use]
pub fn to_document<T>(record: &T) -> DocMap
where
    T: DocumentRecord,
{
    record.document_fields("", &RenameTable::new())
}

/// Converts a record to a map-rooted document value, renaming fields whose
/// full dotted path appears in the table.
///
/// # Examples
///
/// ```rust
/// use docwire::{document_record, to_document_renamed, RenameTable};
///
/// struct User { user_name: String }
/// document_record!(User { user_name });
///
/// let renames = RenameTable::from_iter([("user_name", "userName")]);
/// let user = User { user_name: "Alice".to_string() };
/// let doc = to_document_renamed(&user, &renames);
/// assert!(doc.contains_key("userName"));
/// ```
#[must_use]
pub fn to_document_renamed<T>(record: &T, renames: &RenameTable) -> DocMap
where
    T: DocumentRecord,
{
    record.document_fields("", renames)
}

/// Encodes a document map to canonical JSON text with default options and
/// no renames.
///
/// # Errors
///
/// Returns an error if nesting exceeds the default depth limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json(map: &DocMap) -> Result<String> {
    to_json_with(map, &RenameTable::new(), &EncodeOptions::new())
}

/// Encodes a document map to canonical JSON text with an explicit rename
/// table and options.
///
/// # Errors
///
/// Returns an error if nesting exceeds the configured depth limit, or if
/// pretty reshaping fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_with(map: &DocMap, renames: &RenameTable, options: &EncodeOptions) -> Result<String> {
    JsonEncoder::new(renames, options).encode(map)
}
