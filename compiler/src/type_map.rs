use std::collections::BTreeMap;
use serde::Deserialize;

/// Built-in Go type → Mongoose schema type table.
pub const DEFAULT_TYPES: [(&str, &str); 22] = [
    ("string",   "String"),
    ("number",   "Number"),
    ("bool",     "Boolean"),
    ("int",      "Number"),
    ("int8",     "Number"),
    ("int16",    "Number"),
    ("int32",    "Number"),
    ("int64",    "Number"),
    ("uint",     "Number"),
    ("uint8",    "Number"),
    ("uint16",   "Number"),
    ("uint32",   "Number"),
    ("uint64",   "Number"),
    ("byte",     "Number"),
    ("rune",     "Number"),
    ("float32",  "Number"),
    ("float64",  "Number"),
    ("Time",     "Date"),
    ("Duration", "Number"),
    ("array",    "Array"),
    ("ObjectID", "ObjectId"),
    ("M",        "Mixed"),
];

/// Mongoose schema type → TypeScript property type.
pub const TS_TYPES: [(&str, &str); 7] = [
    ("String",   "string"),
    ("Number",   "number"),
    ("Boolean",  "boolean"),
    ("Date",     "Date"),
    ("Array",    "any[]"),
    ("ObjectId", "mongoose.Types.ObjectId"),
    ("Mixed",    "any"),
];

/// Lookup from source type names to schema type names.
///
/// Deserializing a `TypeMap` merges the given entries over [`DEFAULT_TYPES`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct TypeMap {
    entries: BTreeMap<String, String>,
}

impl Default for TypeMap {
    fn default() -> Self {
        let entries = DEFAULT_TYPES
            .iter()
            .map(|(source, target)| (source.to_string(), target.to_string()))
            .collect();
        TypeMap { entries }
    }
}

impl From<BTreeMap<String, String>> for TypeMap {
    fn from(extra: BTreeMap<String, String>) -> Self {
        let mut map = TypeMap::default();
        map.entries.extend(extra);
        map
    }
}

impl TypeMap {
    pub fn empty() -> Self {
        TypeMap { entries: BTreeMap::new() }
    }

    pub fn with(mut self, source: &str, target: &str) -> Self {
        self.insert(source, target);
        self
    }

    pub fn insert(&mut self, source: &str, target: &str) {
        self.entries.insert(source.to_string(), target.to_string());
    }

    pub fn contains(&self, source: &str) -> bool {
        self.entries.contains_key(source)
    }

    /// Unknown types resolve to themselves.
    pub fn resolve<'a>(&'a self, source: &'a str) -> &'a str {
        self.entries.get(source).map(String::as_str).unwrap_or(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// TypeScript type for a property whose schema type is `schema_type`.
/// Unknown schema types are used verbatim.
pub fn typescript_type(schema_type: &str) -> &str {
    TS_TYPES
        .iter()
        .find(|(target, _)| *target == schema_type)
        .map(|(_, ts)| *ts)
        .unwrap_or(schema_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_documented_types() {
        let map = TypeMap::default();
        assert_eq!(map.resolve("string"),   "String");
        assert_eq!(map.resolve("number"),   "Number");
        assert_eq!(map.resolve("bool"),     "Boolean");
        assert_eq!(map.resolve("float32"),  "Number");
        assert_eq!(map.resolve("float64"),  "Number");
        assert_eq!(map.resolve("Time"),     "Date");
        assert_eq!(map.resolve("Duration"), "Number");
        assert_eq!(map.resolve("array"),    "Array");
    }

    #[test]
    fn test_resolve_unknown_is_identity() {
        let map = TypeMap::default();
        assert_eq!(map.resolve("Address"), "Address");
        assert_eq!(map.resolve(""), "");
        assert_eq!(TypeMap::empty().resolve("string"), "string");
    }

    #[test]
    fn test_entries_can_be_substituted() {
        let map = TypeMap::empty().with("Decimal128", "Decimal128").with("string", "Mixed");
        assert_eq!(map.resolve("string"), "Mixed");
        assert_eq!(map.len(), 2);
        assert!(map.contains("Decimal128"));
    }

    #[test]
    fn test_deserialize_merges_over_defaults() {
        let map: TypeMap = serde_json::from_str(r#"{ "Money": "Number", "bool": "Mixed" }"#).unwrap();
        assert_eq!(map.resolve("Money"), "Number");
        assert_eq!(map.resolve("bool"), "Mixed");
        assert_eq!(map.resolve("Time"), "Date");
    }

    #[test]
    fn test_typescript_type() {
        assert_eq!(typescript_type("String"), "string");
        assert_eq!(typescript_type("Date"), "Date");
        assert_eq!(typescript_type("ObjectId"), "mongoose.Types.ObjectId");
        assert_eq!(typescript_type("Address"), "Address");
    }
}
