//! Document-to-record materialization.
//!
//! The reverse direction: a map-rooted document value is flattened to the
//! canonical text form, then handed to `serde_json` as the generic
//! text-to-record deserializer. The crate does not walk the target type
//! itself; any `T: Deserialize` works.
//!
//! Default encode options are used (UTC timestamps, no renames), so
//! timestamp fields arrive as RFC 3339 text that `chrono`'s serde support
//! parses back into `DateTime<Utc>`.

use crate::{DocMap, EncodeOptions, Error, JsonEncoder, RenameTable, Result};
use serde::de::DeserializeOwned;

/// Materializes a typed record from a document map.
///
/// # Errors
///
/// Returns [`Error::Deserialize`] when the document does not structurally
/// match `T` (missing required fields, type mismatches), and
/// [`Error::DepthLimitExceeded`] if the document is nested past the default
/// encoder limit.
///
/// # Examples
///
/// ```rust
/// use docwire::{doc, from_document};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// let doc = doc!({ "x": 1, "y": 2 });
/// let point: Point = from_document(doc.as_map().unwrap()).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
pub fn from_document<T>(map: &DocMap) -> Result<T>
where
    T: DeserializeOwned,
{
    let renames = RenameTable::new();
    let options = EncodeOptions::new();
    let json = JsonEncoder::new(&renames, &options).encode(map)?;
    serde_json::from_str(&json).map_err(Error::deserialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc;
    use chrono::{DateTime, TimeZone, Utc};
    use serde::Deserialize;

    #[derive(Deserialize, PartialEq, Debug)]
    struct Event {
        name: String,
        count: i64,
        at: DateTime<Utc>,
    }

    #[test]
    fn test_materialize_with_timestamp() {
        let doc = doc!({ "name": "deploy", "count": 3 });
        let mut map = doc.as_map().unwrap().clone();
        map.insert(
            "at".to_string(),
            crate::DocValue::Timestamp(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
        );

        let event: Event = from_document(&map).unwrap();
        assert_eq!(event.name, "deploy");
        assert_eq!(event.count, 3);
        assert_eq!(event.at, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_shape_mismatch() {
        let doc = doc!({ "name": "deploy" });
        let result: Result<Event> = from_document(doc.as_map().unwrap());
        assert!(matches!(result, Err(Error::Deserialize { .. })));
    }

    #[test]
    fn test_type_mismatch() {
        #[derive(Deserialize, Debug)]
        struct Flag {
            #[allow(dead_code)]
            on: bool,
        }

        let doc = doc!({ "on": "yes" });
        let result: Result<Flag> = from_document(doc.as_map().unwrap());
        assert!(matches!(result, Err(Error::Deserialize { .. })));
    }
}
