//! Ordered map type for document maps.
//!
//! This module provides [`DocMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for map entries. Order matters here: the text
//! encoder walks entries in stored order, so a `HashMap` would make the wire
//! output nondeterministic.
//!
//! Keys are unique. Re-inserting an existing key replaces its value and
//! keeps the entry's original position, which is exactly the last-write-wins
//! policy this crate documents for rename collisions.
//!
//! ## Examples
//!
//! ```rust
//! use docwire::{DocMap, DocValue};
//!
//! let mut map = DocMap::new();
//! map.insert("name".to_string(), DocValue::from("Alice"));
//! map.insert("age".to_string(), DocValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::DocValue;
use indexmap::IndexMap;

/// An ordered map of string keys to document values.
///
/// A thin wrapper around [`IndexMap`] that preserves insertion order, the
/// order the text encoder emits entries in.
///
/// # Examples
///
/// ```rust
/// use docwire::{DocMap, DocValue};
///
/// let mut map = DocMap::new();
/// map.insert("first".to_string(), DocValue::from(1));
/// map.insert("second".to_string(), DocValue::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocMap(IndexMap<String, DocValue>);

impl DocMap {
    /// Creates an empty `DocMap`.
    #[must_use]
    pub fn new() -> Self {
        DocMap(IndexMap::new())
    }

    /// Creates an empty `DocMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        DocMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the entry keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docwire::{DocMap, DocValue};
    ///
    /// let mut map = DocMap::new();
    /// assert!(map.insert("key".to_string(), DocValue::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), DocValue::from(43)).is_some());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: String, value: DocValue) -> Option<DocValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DocValue> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, DocValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, DocValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, DocValue> {
        self.0.iter()
    }
}

impl IntoIterator for DocMap {
    type Item = (String, DocValue);
    type IntoIter = indexmap::map::IntoIter<String, DocValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DocMap {
    type Item = (&'a String, &'a DocValue);
    type IntoIter = indexmap::map::Iter<'a, String, DocValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, DocValue)> for DocMap {
    fn from_iter<T: IntoIterator<Item = (String, DocValue)>>(iter: T) -> Self {
        DocMap(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, DocValue)> for DocMap {
    fn extend<T: IntoIterator<Item = (String, DocValue)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
