/// Builds a [`DocValue`](crate::DocValue) from a JSON-like literal.
///
/// Scalars go through `DocValue::from`, so anything without a `From`
/// conversion (floats, for one) is rejected at compile time.
///
/// # Examples
///
/// ```rust
/// use docwire::{doc, DocValue};
///
/// let value = doc!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["admin", "user"],
///     "manager": null
/// });
/// assert!(value.is_map());
/// ```
#[macro_export]
macro_rules! doc {
    // Handle null
    (null) => {
        $crate::DocValue::Null
    };

    // Handle true
    (true) => {
        $crate::DocValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::DocValue::Bool(false)
    };

    // Handle empty list
    ([]) => {
        $crate::DocValue::List(vec![])
    };

    // Handle non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::DocValue::List(vec![$($crate::doc!($elem)),*])
    };

    // Handle empty map
    ({}) => {
        $crate::DocValue::Map($crate::DocMap::new())
    };

    // Handle non-empty map
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::DocMap::new();
        $(
            map.insert($key.to_string(), $crate::doc!($value));
        )*
        $crate::DocValue::Map(map)
    }};

    // Fallback for scalar expressions
    ($scalar:expr) => {
        $crate::DocValue::from($scalar)
    };
}

/// Implements [`DocumentRecord`](crate::DocumentRecord) and
/// [`ToDocument`](crate::ToDocument) for a struct from an explicit field
/// list.
///
/// The listed fields are emitted in the order written, which should match
/// declaration order; that order is the record's stable field-enumeration
/// contract. Every listed field type must itself implement `ToDocument`.
///
/// # Examples
///
/// ```rust
/// use docwire::{document_record, to_document};
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// document_record!(Point { x, y });
///
/// let doc = to_document(&Point { x: 1, y: 2 });
/// let keys: Vec<_> = doc.keys().cloned().collect();
/// assert_eq!(keys, vec!["x", "y"]);
/// ```
#[macro_export]
macro_rules! document_record {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::DocumentRecord for $ty {
            #[allow(unused_variables)]
            fn document_fields(
                &self,
                path: &str,
                renames: &$crate::RenameTable,
            ) -> $crate::DocMap {
                #[allow(unused_mut)]
                let mut fields = $crate::DocMap::new();
                $(
                    let field_path = $crate::path::join(path, stringify!($field));
                    let name = renames
                        .resolve(&field_path, stringify!($field))
                        .to_string();
                    fields.insert(
                        name,
                        $crate::ToDocument::to_document(&self.$field, &field_path, renames),
                    );
                )*
                fields
            }
        }

        impl $crate::ToDocument for $ty {
            fn to_document(
                &self,
                path: &str,
                renames: &$crate::RenameTable,
            ) -> $crate::DocValue {
                $crate::DocValue::Map($crate::DocumentRecord::document_fields(
                    self, path, renames,
                ))
            }
        }
    };
}
