//! Configuration backup snapshot format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::kinds::ConfigKind;

/// Current snapshot layout version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Point-in-time copy of every configuration collection.
///
/// Collections are keyed by [`ConfigKind::collection_key`]. A collection
/// missing from a snapshot restores as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSnapshot {
    /// Layout version.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Records per collection key.
    #[serde(default)]
    pub collections: BTreeMap<String, Vec<Value>>,
    /// Company settings document, without storage-managed keys.
    #[serde(default)]
    pub company_settings: Option<Map<String, Value>>,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

impl ConfigSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            ..Self::default()
        }
    }

    /// Stores the records of one collection.
    pub fn set_collection(&mut self, kind: ConfigKind, records: Vec<Value>) {
        self.collections
            .insert(kind.collection_key().to_string(), records);
    }

    /// Records captured for a collection.
    #[must_use]
    pub fn collection(&self, kind: ConfigKind) -> &[Value] {
        self.collections
            .get(kind.collection_key())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of configuration records captured.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }

    /// Per-collection record counts, for backup summaries.
    #[must_use]
    pub fn counts(&self) -> BTreeMap<String, usize> {
        ConfigKind::ALL
            .into_iter()
            .map(|k| (k.collection_key().to_string(), self.collection(k).len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collections_by_kind() {
        let mut snap = ConfigSnapshot::new();
        snap.set_collection(ConfigKind::PayType, vec![json!({"type": "Hourly"})]);
        snap.set_collection(
            ConfigKind::Benefit,
            vec![json!({"name": "EOS"}), json!({"name": "Gratuity"})],
        );

        assert_eq!(snap.collection(ConfigKind::PayType).len(), 1);
        assert!(snap.collection(ConfigKind::Policy).is_empty());
        assert_eq!(snap.item_count(), 3);
        assert_eq!(snap.counts()["benefits"], 2);
        assert_eq!(snap.counts()["policies"], 0);
    }

    #[test]
    fn test_serialized_shape() {
        let mut snap = ConfigSnapshot::new();
        snap.set_collection(ConfigKind::TaxRule, Vec::new());
        let json = serde_json::to_value(&snap).unwrap();

        assert_eq!(json["version"], 1);
        assert!(json["collections"]["taxRules"].is_array());
        assert!(json["companySettings"].is_null());
    }

    #[test]
    fn test_partial_snapshot_deserializes() {
        let snap: ConfigSnapshot =
            serde_json::from_value(json!({"collections": {"payGrades": [{"grade": "A"}]}}))
                .unwrap();

        assert_eq!(snap.version, SNAPSHOT_VERSION);
        assert_eq!(snap.collection(ConfigKind::PayGrade).len(), 1);
    }
}
