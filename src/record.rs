//! Record-to-document conversion.
//!
//! This module is the building half of the engine: it turns typed values
//! into [`DocValue`] trees.
//!
//! Two traits cooperate:
//!
//! - [`ToDocument`] classifies a single value into one of the document
//!   model's variants. The set of implementations is closed: sequences
//!   become lists, string-keyed maps become maps, `Option::None` becomes
//!   null, strings/integers/booleans map to their scalar variants, and
//!   `chrono` instants become UTC-normalized timestamps. A field type with
//!   no implementation is a compile error, never a silent fallback.
//! - [`DocumentRecord`] enumerates a record's public fields as ordered
//!   `(name, value)` pairs. The [`document_record!`](crate::document_record)
//!   macro generates the implementation from an explicit field list, so
//!   field order is declaration order by construction.
//!
//! Both traits carry the current dotted path and the caller's
//! [`RenameTable`]. Record fields are renamed at build time; entries of
//! plain map fields keep their stored keys (the encoder consults the table
//! again for those).
//!
//! ## Examples
//!
//! ```rust
//! use docwire::{document_record, to_document, DocValue};
//!
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! document_record!(User { id, name });
//!
//! let user = User { id: 7, name: "Alice".to_string() };
//! let doc = to_document(&user);
//! assert_eq!(doc.get("id"), Some(&DocValue::Integer(7)));
//! assert_eq!(doc.get("name"), Some(&DocValue::from("Alice")));
//! ```

use crate::{path, DocMap, DocValue, RenameTable};
use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Classifies a typed value into a [`DocValue`].
///
/// `path` is the dotted path of the value being converted (empty at the
/// root) and is used only as a rename-lookup key. The conversion is a pure
/// function of its inputs and cannot fail: the implementation set is closed
/// over the document model, and every input is an owned tree, so there is
/// nothing to reject and no cycle to chase.
pub trait ToDocument {
    /// Converts this value to a document value.
    fn to_document(&self, path: &str, renames: &RenameTable) -> DocValue;
}

/// Enumerates a record's fields as an ordered map of document values.
///
/// Implement this via [`document_record!`](crate::document_record), which
/// lists the fields explicitly and preserves declaration order. For each
/// field, the emitted key is the rename-table override for the field's full
/// path, falling back to the field name; the value is the field classified
/// at that path.
pub trait DocumentRecord {
    /// Converts this record's fields into an ordered document map.
    fn document_fields(&self, path: &str, renames: &RenameTable) -> DocMap;
}

impl ToDocument for bool {
    fn to_document(&self, _path: &str, _renames: &RenameTable) -> DocValue {
        DocValue::Bool(*self)
    }
}

impl ToDocument for i8 {
    fn to_document(&self, _path: &str, _renames: &RenameTable) -> DocValue {
        DocValue::Integer(*self as i64)
    }
}

impl ToDocument for i16 {
    fn to_document(&self, _path: &str, _renames: &RenameTable) -> DocValue {
        DocValue::Integer(*self as i64)
    }
}

impl ToDocument for i32 {
    fn to_document(&self, _path: &str, _renames: &RenameTable) -> DocValue {
        DocValue::Integer(*self as i64)
    }
}

impl ToDocument for i64 {
    fn to_document(&self, _path: &str, _renames: &RenameTable) -> DocValue {
        DocValue::Integer(*self)
    }
}

impl ToDocument for u8 {
    fn to_document(&self, _path: &str, _renames: &RenameTable) -> DocValue {
        DocValue::Integer(*self as i64)
    }
}

impl ToDocument for u16 {
    fn to_document(&self, _path: &str, _renames: &RenameTable) -> DocValue {
        DocValue::Integer(*self as i64)
    }
}

impl ToDocument for u32 {
    fn to_document(&self, _path: &str, _renames: &RenameTable) -> DocValue {
        DocValue::Integer(*self as i64)
    }
}

impl ToDocument for str {
    fn to_document(&self, _path: &str, _renames: &RenameTable) -> DocValue {
        DocValue::String(self.to_string())
    }
}

impl ToDocument for String {
    fn to_document(&self, _path: &str, _renames: &RenameTable) -> DocValue {
        DocValue::String(self.clone())
    }
}

/// Instants are normalized to UTC whatever offset they carry.
impl<Tz: TimeZone> ToDocument for DateTime<Tz> {
    fn to_document(&self, _path: &str, _renames: &RenameTable) -> DocValue {
        DocValue::Timestamp(self.with_timezone(&Utc))
    }
}

impl<T: ToDocument> ToDocument for Option<T> {
    fn to_document(&self, path: &str, renames: &RenameTable) -> DocValue {
        match self {
            Some(inner) => inner.to_document(path, renames),
            None => DocValue::Null,
        }
    }
}

/// Sequence elements are classified at the sequence's own path; the path
/// does not gain an index segment.
impl<T: ToDocument> ToDocument for [T] {
    fn to_document(&self, path: &str, renames: &RenameTable) -> DocValue {
        DocValue::List(
            self.iter()
                .map(|element| element.to_document(path, renames))
                .collect(),
        )
    }
}

impl<T: ToDocument> ToDocument for Vec<T> {
    fn to_document(&self, path: &str, renames: &RenameTable) -> DocValue {
        self.as_slice().to_document(path, renames)
    }
}

/// Map entry values recurse at `path + "." + key`. Keys are kept verbatim
/// here; only record fields are renamed at build time.
impl<T: ToDocument> ToDocument for IndexMap<String, T> {
    fn to_document(&self, path: &str, renames: &RenameTable) -> DocValue {
        let mut map = DocMap::with_capacity(self.len());
        for (key, value) in self {
            let entry_path = path::join(path, key);
            map.insert(key.clone(), value.to_document(&entry_path, renames));
        }
        DocValue::Map(map)
    }
}

impl<T: ToDocument> ToDocument for BTreeMap<String, T> {
    fn to_document(&self, path: &str, renames: &RenameTable) -> DocValue {
        let mut map = DocMap::with_capacity(self.len());
        for (key, value) in self {
            let entry_path = path::join(path, key);
            map.insert(key.clone(), value.to_document(&entry_path, renames));
        }
        DocValue::Map(map)
    }
}

impl<T: ToDocument + ?Sized> ToDocument for &T {
    fn to_document(&self, path: &str, renames: &RenameTable) -> DocValue {
        (**self).to_document(path, renames)
    }
}

impl<T: ToDocument + ?Sized> ToDocument for Box<T> {
    fn to_document(&self, path: &str, renames: &RenameTable) -> DocValue {
        (**self).to_document(path, renames)
    }
}

/// Already-built values pass through unchanged.
impl ToDocument for DocValue {
    fn to_document(&self, _path: &str, _renames: &RenameTable) -> DocValue {
        self.clone()
    }
}

impl ToDocument for DocMap {
    fn to_document(&self, _path: &str, _renames: &RenameTable) -> DocValue {
        DocValue::Map(self.clone())
    }
}
