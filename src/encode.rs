//! Canonical JSON text encoding.
//!
//! This module provides [`JsonEncoder`], which flattens a map-rooted
//! [`DocValue`] tree into the canonical wire dialect:
//!
//! - the root is always a `{...}` object;
//! - object entries are emitted in stored order, separated by `,\n`, with no
//!   trailing comma;
//! - keys and string values are double-quoted and JSON-escaped;
//! - integers are bare decimals, booleans are bare `true`/`false`, null is
//!   the bare literal `null` (inside lists too);
//! - timestamps render as double-quoted text from the configured
//!   [`TimestampFormat`](crate::TimestampFormat);
//! - lists are comma-joined with no embedded whitespace.
//!
//! The encoder consults the caller's [`RenameTable`] at every map-entry
//! emission point, keyed by the entry's full dotted path, so a table built
//! for the document builder works unchanged here. It is total over the
//! document model; the only failure mode is the nesting-depth guard.
//!
//! Most callers should use [`to_json`](crate::to_json) or
//! [`to_json_with`](crate::to_json_with) from the crate root.

use crate::{path, reshape, DocMap, DocValue, EncodeOptions, Error, RenameTable, Result};

/// Encodes a document map into canonical JSON text.
///
/// Holds the output buffer plus the per-call rename table and options.
/// Construct one per encode call; nothing is shared or reused.
///
/// # Examples
///
/// ```rust
/// use docwire::{doc, EncodeOptions, JsonEncoder, RenameTable};
///
/// let doc = doc!({ "id": 7, "name": "Alice" });
/// let map = doc.as_map().unwrap();
///
/// let renames = RenameTable::new();
/// let options = EncodeOptions::new();
/// let json = JsonEncoder::new(&renames, &options).encode(map).unwrap();
/// assert_eq!(json, "{\"id\": 7,\n\"name\": \"Alice\"}");
/// ```
pub struct JsonEncoder<'a> {
    output: String,
    renames: &'a RenameTable,
    options: &'a EncodeOptions,
}

impl<'a> JsonEncoder<'a> {
    /// Creates an encoder with the given rename table and options.
    #[must_use]
    pub fn new(renames: &'a RenameTable, options: &'a EncodeOptions) -> Self {
        JsonEncoder {
            // 256 bytes covers typical flat records without reallocating
            output: String::with_capacity(256),
            renames,
            options,
        }
    }

    /// Encodes the map and returns the finished text.
    ///
    /// When the options request pretty output, the compact text is reshaped
    /// with standard JSON indentation before returning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthLimitExceeded`] when nesting exceeds the
    /// configured limit.
    pub fn encode(mut self, map: &DocMap) -> Result<String> {
        self.write_map(map, "", 0)?;
        if self.options.pretty {
            reshape(&self.output, false)
        } else {
            Ok(self.output)
        }
    }

    fn write_map(&mut self, map: &DocMap, path: &str, depth: usize) -> Result<()> {
        if depth >= self.options.max_depth {
            return Err(Error::depth_limit(path, self.options.max_depth));
        }

        self.output.push('{');
        let mut first = true;
        for (key, value) in map {
            if !first {
                self.output.push_str(",\n");
            }
            first = false;

            let entry_path = path::join(path, key);
            let name = self.renames.resolve(&entry_path, key).to_string();
            self.write_string(&name);
            self.output.push_str(": ");
            self.write_value(value, &entry_path, depth)?;
        }
        self.output.push('}');
        Ok(())
    }

    fn write_list(&mut self, list: &[DocValue], path: &str, depth: usize) -> Result<()> {
        if depth >= self.options.max_depth {
            return Err(Error::depth_limit(path, self.options.max_depth));
        }

        self.output.push('[');
        let mut first = true;
        for element in list {
            if !first {
                self.output.push(',');
            }
            first = false;
            // Elements render at the list's own path; no index segment.
            self.write_value(element, path, depth)?;
        }
        self.output.push(']');
        Ok(())
    }

    fn write_value(&mut self, value: &DocValue, path: &str, depth: usize) -> Result<()> {
        match value {
            DocValue::Null => self.output.push_str("null"),
            DocValue::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            DocValue::Integer(i) => self.output.push_str(&i.to_string()),
            DocValue::String(s) => self.write_string(s),
            DocValue::Timestamp(t) => {
                let rendered = self.options.timestamp_format.render(t);
                self.write_string(&rendered);
            }
            DocValue::List(list) => self.write_list(list, path, depth + 1)?,
            DocValue::Map(map) => self.write_map(map, path, depth + 1)?,
        }
        Ok(())
    }

    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"), // backspace
                '\u{000C}' => self.output.push_str("\\f"), // form feed
                c if (c as u32) < 0x20 => {
                    self.output.push_str(&format!("\\u{:04x}", c as u32));
                }
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{doc, TimestampFormat};
    use chrono::{TimeZone, Utc};

    fn encode(map: &DocMap) -> String {
        JsonEncoder::new(&RenameTable::new(), &EncodeOptions::new())
            .encode(map)
            .unwrap()
    }

    #[test]
    fn test_empty_map() {
        assert_eq!(encode(&DocMap::new()), "{}");
    }

    #[test]
    fn test_entry_separator() {
        let doc = doc!({ "a": 1, "b": 2, "c": 3 });
        assert_eq!(encode(doc.as_map().unwrap()), "{\"a\": 1,\n\"b\": 2,\n\"c\": 3}");
    }

    #[test]
    fn test_scalars() {
        let doc = doc!({
            "s": "text",
            "i": (-5),
            "t": true,
            "f": false,
            "n": null
        });
        assert_eq!(
            encode(doc.as_map().unwrap()),
            "{\"s\": \"text\",\n\"i\": -5,\n\"t\": true,\n\"f\": false,\n\"n\": null}"
        );
    }

    #[test]
    fn test_lists_have_no_whitespace() {
        let doc = doc!({ "xs": [1, 2, 3], "mixed": ["a", null, true] });
        assert_eq!(
            encode(doc.as_map().unwrap()),
            "{\"xs\": [1,2,3],\n\"mixed\": [\"a\",null,true]}"
        );
    }

    #[test]
    fn test_list_of_maps() {
        let doc = doc!({ "rows": [{ "v": 1 }, { "v": 2 }] });
        assert_eq!(
            encode(doc.as_map().unwrap()),
            "{\"rows\": [{\"v\": 1},{\"v\": 2}]}"
        );
    }

    #[test]
    fn test_string_escaping() {
        let doc = doc!({ "q": "say \"hi\"", "nl": "a\nb", "bs": "c:\\temp" });
        let json = encode(doc.as_map().unwrap());
        assert!(json.contains("\"say \\\"hi\\\"\""));
        assert!(json.contains("\"a\\nb\""));
        assert!(json.contains("\"c:\\\\temp\""));
        // The output must parse as real JSON
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["q"], "say \"hi\"");
    }

    #[test]
    fn test_control_character_escaping() {
        let doc = doc!({ "ctl": "a\u{1}b" });
        assert_eq!(encode(doc.as_map().unwrap()), "{\"ctl\": \"a\\u0001b\"}");
    }

    #[test]
    fn test_unicode_passthrough() {
        let doc = doc!({ "jp": "東京" });
        assert_eq!(encode(doc.as_map().unwrap()), "{\"jp\": \"東京\"}");
    }

    #[test]
    fn test_rename_at_encode_time() {
        let doc = doc!({ "a": { "b": 1 } });
        let renames = RenameTable::from_iter([("a.b", "bb")]);
        let json = JsonEncoder::new(&renames, &EncodeOptions::new())
            .encode(doc.as_map().unwrap())
            .unwrap();
        assert_eq!(json, "{\"a\": {\"bb\": 1}}");
    }

    #[test]
    fn test_timestamp_default_and_jst() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 3, 0, 0).unwrap();
        let mut map = DocMap::new();
        map.insert("at".to_string(), DocValue::Timestamp(instant));

        let renames = RenameTable::new();
        let utc = JsonEncoder::new(&renames, &EncodeOptions::new())
            .encode(&map)
            .unwrap();
        assert_eq!(utc, "{\"at\": \"2024-05-01T03:00:00Z\"}");

        let options = EncodeOptions::new().with_timestamp_format(TimestampFormat::jst());
        let jst = JsonEncoder::new(&renames, &options).encode(&map).unwrap();
        assert_eq!(jst, "{\"at\": \"2024-05-01T12:00:00+09:00\"}");
    }

    #[test]
    fn test_depth_limit() {
        let doc = doc!({ "a": { "b": { "c": 1 } } });
        let options = EncodeOptions::new().with_max_depth(2);
        let result = JsonEncoder::new(&RenameTable::new(), &options).encode(doc.as_map().unwrap());
        assert!(matches!(
            result,
            Err(Error::DepthLimitExceeded { limit: 2, .. })
        ));
    }

    #[test]
    fn test_pretty_reshapes() {
        let doc = doc!({ "a": 1, "b": [1, 2] });
        let json = JsonEncoder::new(&RenameTable::new(), &EncodeOptions::pretty())
            .encode(doc.as_map().unwrap())
            .unwrap();
        // Pretty output is real indented JSON with the same content
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["a"], 1);
        assert!(json.contains("  \"a\": 1"));
    }
}
