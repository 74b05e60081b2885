//! The headless map document and its JSON form.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::config::{MAP_PHILOSOPHY, MAP_VERSION, SYSTEM_NAME};

/// String-keyed map that remembers first-insertion order.
///
/// Inserting an existing key replaces its value in place, so the key keeps its
/// original position. Serializes as a JSON object in that order.
#[derive(Debug, Clone)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        OrderedMap {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or replace. Returns the previous value for `key`, if any.
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

/// Normalized property name -> verbatim value.
pub type PropertyMap = OrderedMap<String>;

/// Semantic class name -> its properties.
pub type ClassMap = OrderedMap<PropertyMap>;

/// Descriptive header. Written out, never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meta {
    pub system: String,
    pub version: String,
    pub generated: String,
    pub philosophy: String,
}

impl Meta {
    pub fn new(generated: DateTime<Utc>) -> Self {
        Meta {
            system: SYSTEM_NAME.to_string(),
            version: MAP_VERSION.to_string(),
            generated: generated.to_rfc3339_opts(SecondsFormat::Millis, true),
            philosophy: MAP_PHILOSOPHY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlessMap {
    #[serde(rename = "_meta")]
    pub meta: Meta,
    pub classes: ClassMap,
}

impl HeadlessMap {
    /// Stamp `classes` with the current time.
    pub fn new(classes: ClassMap) -> Self {
        Self::generated_at(classes, Utc::now())
    }

    pub fn generated_at(classes: ClassMap, generated: DateTime<Utc>) -> Self {
        HeadlessMap {
            meta: Meta::new(generated),
            classes,
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn props(pairs: &[(&str, &str)]) -> PropertyMap {
        let mut map = PropertyMap::new();
        for (k, v) in pairs {
            map.insert(k.to_string(), v.to_string());
        }
        map
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = PropertyMap::new();
        map.insert("color".into(), "red".into());
        map.insert("margin".into(), "0".into());
        let previous = map.insert("color".into(), "blue".into());

        assert_eq!(previous.as_deref(), Some("red"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["color", "margin"]);
        assert_eq!(map.get("color").map(String::as_str), Some("blue"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_meta_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let meta = Meta::new(at);
        assert_eq!(meta.generated, "2024-03-09T14:05:07.000Z");
        assert_eq!(meta.system, "Neo-Analog");
        assert_eq!(meta.version, "2.0");
        assert_eq!(meta.philosophy, "Headless Semantic Protocol");
    }

    #[test]
    fn test_document_json_layout() {
        let mut classes = ClassMap::new();
        classes.insert(
            "na-card".into(),
            props(&[("fontSize", "14px"), ("backgroundColor", "#111")]),
        );
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let json = HeadlessMap::generated_at(classes, at).to_json().unwrap();

        let expected = r##"{
  "_meta": {
    "system": "Neo-Analog",
    "version": "2.0",
    "generated": "2024-01-01T00:00:00.000Z",
    "philosophy": "Headless Semantic Protocol"
  },
  "classes": {
    "na-card": {
      "fontSize": "14px",
      "backgroundColor": "#111"
    }
  }
}"##;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_classes_serialize_as_empty_object() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let json = HeadlessMap::generated_at(ClassMap::new(), at).to_json().unwrap();
        assert!(json.ends_with("\"classes\": {}\n}"));
    }
}
