//! Whitespace normalization for JSON text.
//!
//! The encoder's compact output and the pretty form differ only in
//! whitespace. Rather than teaching the encoder to indent, the text is
//! round-tripped through [`serde_json::Value`] and re-serialized. Non-ASCII
//! characters pass through unescaped.

use crate::{Error, Result};

/// Re-serializes JSON text with (`one_line = false`) or without
/// (`one_line = true`) indentation.
///
/// The logical content is unchanged; only whitespace differs. Reshaping is
/// idempotent for a fixed `one_line` flag.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `text` is not valid JSON.
///
/// # Examples
///
/// ```rust
/// use docwire::reshape;
///
/// let pretty = reshape("{\"a\":1}", false).unwrap();
/// assert_eq!(pretty, "{\n  \"a\": 1\n}");
///
/// let compact = reshape(&pretty, true).unwrap();
/// assert_eq!(compact, "{\"a\":1}");
/// ```
pub fn reshape(text: &str, one_line: bool) -> Result<String> {
    let tree: serde_json::Value = serde_json::from_str(text).map_err(Error::parse)?;
    let reshaped = if one_line {
        serde_json::to_string(&tree)
    } else {
        serde_json::to_string_pretty(&tree)
    };
    reshaped.map_err(Error::parse)
}
