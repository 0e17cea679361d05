//! The schemaless document value model.
//!
//! This module provides the [`DocValue`] enum, the variant type every
//! conversion in this crate targets or consumes. It mirrors the value model
//! of schemaless document databases: maps, lists, scalars, and timestamps.
//!
//! ## Core Types
//!
//! - [`DocValue`]: any document value (null, bool, integer, string,
//!   timestamp, list, map)
//! - [`DocMap`](crate::DocMap): the insertion-ordered map used for the `Map`
//!   variant
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use docwire::DocValue;
//!
//! // From primitives
//! let null = DocValue::Null;
//! let flag = DocValue::from(true);
//! let count = DocValue::from(42);
//! let text = DocValue::from("hello");
//!
//! // Using the doc! macro
//! use docwire::doc;
//! let record = doc!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use docwire::DocValue;
//!
//! let value = DocValue::from(42);
//! assert!(value.is_integer());
//! assert_eq!(value.as_i64(), Some(42));
//! assert_eq!(value.as_str(), None);
//! ```

use crate::DocMap;
use chrono::{DateTime, Utc};
use std::fmt;

/// A dynamically-typed document value.
///
/// This is the closed set of shapes a document can contain. There is
/// deliberately no floating-point variant: the model stores 64-bit signed
/// integers only. Timestamps are always held normalized to UTC, regardless
/// of the offset they were built from.
///
/// # Examples
///
/// ```rust
/// use docwire::DocValue;
///
/// let null = DocValue::Null;
/// let num = DocValue::Integer(42);
/// let text = DocValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_integer());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum DocValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    String(String),
    Timestamp(DateTime<Utc>),
    List(Vec<DocValue>),
    Map(DocMap),
}

impl DocValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, DocValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, DocValue::Bool(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, DocValue::Integer(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, DocValue::String(_))
    }

    /// Returns `true` if the value is a timestamp.
    #[inline]
    #[must_use]
    pub const fn is_timestamp(&self) -> bool {
        matches!(self, DocValue::Timestamp(_))
    }

    /// Returns `true` if the value is a list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, DocValue::List(_))
    }

    /// Returns `true` if the value is a map.
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, DocValue::Map(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docwire::DocValue;
    ///
    /// assert_eq!(DocValue::Bool(true).as_bool(), Some(true));
    /// assert_eq!(DocValue::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DocValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docwire::DocValue;
    ///
    /// assert_eq!(DocValue::Integer(42).as_i64(), Some(42));
    /// assert_eq!(DocValue::from("text").as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DocValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docwire::DocValue;
    ///
    /// assert_eq!(DocValue::from("hello").as_str(), Some("hello"));
    /// assert_eq!(DocValue::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DocValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a timestamp, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            DocValue::Timestamp(t) => Some(t),
            _ => None,
        }
    }

    /// If the value is a list, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<DocValue>> {
        match self {
            DocValue::List(list) => Some(list),
            _ => None,
        }
    }

    /// If the value is a map, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&DocMap> {
        match self {
            DocValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for DocValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocValue::Null => write!(f, "null"),
            DocValue::Bool(b) => write!(f, "{}", b),
            DocValue::Integer(i) => write!(f, "{}", i),
            DocValue::String(s) => write!(f, "{}", s),
            DocValue::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
            DocValue::List(list) => {
                write!(
                    f,
                    "[{}]",
                    list.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            DocValue::Map(map) => write!(f, "{{map:{}}}", map.len()),
        }
    }
}

impl From<bool> for DocValue {
    fn from(value: bool) -> Self {
        DocValue::Bool(value)
    }
}

impl From<i8> for DocValue {
    fn from(value: i8) -> Self {
        DocValue::Integer(value as i64)
    }
}

impl From<i16> for DocValue {
    fn from(value: i16) -> Self {
        DocValue::Integer(value as i64)
    }
}

impl From<i32> for DocValue {
    fn from(value: i32) -> Self {
        DocValue::Integer(value as i64)
    }
}

impl From<i64> for DocValue {
    fn from(value: i64) -> Self {
        DocValue::Integer(value)
    }
}

impl From<u8> for DocValue {
    fn from(value: u8) -> Self {
        DocValue::Integer(value as i64)
    }
}

impl From<u16> for DocValue {
    fn from(value: u16) -> Self {
        DocValue::Integer(value as i64)
    }
}

impl From<u32> for DocValue {
    fn from(value: u32) -> Self {
        DocValue::Integer(value as i64)
    }
}

impl From<String> for DocValue {
    fn from(value: String) -> Self {
        DocValue::String(value)
    }
}

impl From<&str> for DocValue {
    fn from(value: &str) -> Self {
        DocValue::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for DocValue {
    fn from(value: DateTime<Utc>) -> Self {
        DocValue::Timestamp(value)
    }
}

impl From<Vec<DocValue>> for DocValue {
    fn from(value: Vec<DocValue>) -> Self {
        DocValue::List(value)
    }
}

impl From<DocMap> for DocValue {
    fn from(value: DocMap) -> Self {
        DocValue::Map(value)
    }
}

impl<T> From<Option<T>> for DocValue
where
    T: Into<DocValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => DocValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_primitives() {
        assert_eq!(DocValue::from(true), DocValue::Bool(true));
        assert_eq!(DocValue::from(42i32), DocValue::Integer(42));
        assert_eq!(DocValue::from(42i64), DocValue::Integer(42));
        assert_eq!(DocValue::from(255u8), DocValue::Integer(255));
        assert_eq!(DocValue::from("test"), DocValue::String("test".to_string()));
        assert_eq!(
            DocValue::from("test".to_string()),
            DocValue::String("test".to_string())
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(DocValue::from(Some(7i64)), DocValue::Integer(7));
        assert_eq!(DocValue::from(None::<i64>), DocValue::Null);
    }

    #[test]
    fn test_from_collections() {
        let list = vec![DocValue::from(1i64), DocValue::from(2i64)];
        assert_eq!(DocValue::from(list.clone()), DocValue::List(list));

        let mut map = DocMap::new();
        map.insert("key".to_string(), DocValue::from(42i64));
        assert_eq!(DocValue::from(map.clone()), DocValue::Map(map));
    }

    #[test]
    fn test_accessors() {
        let value = DocValue::Integer(42);
        assert!(value.is_integer());
        assert!(!value.is_null());
        assert_eq!(value.as_i64(), Some(42));
        assert_eq!(value.as_str(), None);

        let when = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let value = DocValue::Timestamp(when);
        assert!(value.is_timestamp());
        assert_eq!(value.as_timestamp(), Some(&when));
    }

    #[test]
    fn test_const_is_methods() {
        const fn check_null(v: &DocValue) -> bool {
            v.is_null()
        }

        assert!(check_null(&DocValue::Null));
        assert!(!check_null(&DocValue::Bool(false)));
    }

    #[test]
    fn test_display_list() {
        let list = DocValue::List(vec![DocValue::Integer(1), DocValue::Null]);
        assert_eq!(list.to_string(), "[1,null]");
    }
}
