//! Dotted field paths and the rename table.
//!
//! As the builder and the encoder descend into nested records and maps they
//! carry a dotted path (`parent.child.grandchild`) naming the current field
//! relative to the root. The path is purely a lookup key into the
//! [`RenameTable`]; it is never stored in a document value.
//!
//! One table shape serves both directions: a table handed to
//! [`to_document_renamed`](crate::to_document_renamed) can be reused
//! unchanged with [`to_json_with`](crate::to_json_with). Tables are keyed by
//! the original, un-renamed path.
//!
//! ## Examples
//!
//! ```rust
//! use docwire::RenameTable;
//!
//! let renames = RenameTable::from_iter([("user.created_at", "createdAt")]);
//! assert_eq!(renames.resolve("user.created_at", "created_at"), "createdAt");
//! assert_eq!(renames.resolve("user.name", "name"), "name");
//! ```

use std::collections::HashMap;

/// Joins a parent path and a field name into a dotted path.
///
/// The root call carries an empty path, so the first segment joins without a
/// leading dot.
///
/// # Examples
///
/// ```rust
/// use docwire::path::join;
///
/// assert_eq!(join("", "user"), "user");
/// assert_eq!(join("user", "address"), "user.address");
/// ```
#[must_use]
pub fn join(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        let mut joined = String::with_capacity(path.len() + 1 + segment.len());
        joined.push_str(path);
        joined.push('.');
        joined.push_str(segment);
        joined
    }
}

/// A mapping from full dotted paths to alternate output field names.
///
/// Consulted at every record-field emission point in the document builder
/// and at every map-entry emission point in the text encoder. Lookup order
/// does not matter, so this is a plain `HashMap` under the hood.
///
/// # Examples
///
/// ```rust
/// use docwire::RenameTable;
///
/// let mut renames = RenameTable::new();
/// renames.rename("a.b", "bb");
/// assert_eq!(renames.resolve("a.b", "b"), "bb");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenameTable(HashMap<String, String>);

impl RenameTable {
    /// Creates an empty rename table.
    #[must_use]
    pub fn new() -> Self {
        RenameTable(HashMap::new())
    }

    /// Registers an output name for a full dotted path.
    ///
    /// Registering the same path twice replaces the earlier name.
    pub fn rename(&mut self, path: impl Into<String>, name: impl Into<String>) -> &mut Self {
        self.0.insert(path.into(), name.into());
        self
    }

    /// Returns the output name registered for `path`, if any.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    /// Returns the output name for `path`, falling back to the original
    /// field name when no override is registered.
    #[must_use]
    pub fn resolve<'a>(&'a self, path: &str, original: &'a str) -> &'a str {
        self.get(path).unwrap_or(original)
    }

    /// Returns the number of registered overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no overrides are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P, N> FromIterator<(P, N)> for RenameTable
where
    P: Into<String>,
    N: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (P, N)>>(iter: T) -> Self {
        RenameTable(
            iter.into_iter()
                .map(|(path, name)| (path.into(), name.into()))
                .collect(),
        )
    }
}

impl From<HashMap<String, String>> for RenameTable {
    fn from(map: HashMap<String, String>) -> Self {
        RenameTable(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(join("", "root"), "root");
        assert_eq!(join("root", "child"), "root.child");
        assert_eq!(join("root.child", "leaf"), "root.child.leaf");
    }

    #[test]
    fn test_resolve_fallback() {
        let table = RenameTable::new();
        assert_eq!(table.resolve("a.b", "b"), "b");
    }

    #[test]
    fn test_resolve_override() {
        let table = RenameTable::from_iter([("a.b", "bb"), ("a", "aa")]);
        assert_eq!(table.resolve("a.b", "b"), "bb");
        assert_eq!(table.resolve("a", "a"), "aa");
        assert_eq!(table.resolve("a.c", "c"), "c");
    }

    #[test]
    fn test_rename_replaces() {
        let mut table = RenameTable::new();
        table.rename("x", "first").rename("x", "second");
        assert_eq!(table.get("x"), Some("second"));
        assert_eq!(table.len(), 1);
    }
}
