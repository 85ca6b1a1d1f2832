//! Record model for rows drawn from the shared data cube.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One associative row of scalar fields from the dataset.
///
/// Field enumeration order is insertion order, which for records ingested
/// from JSON is the document order of the source object. The first record
/// of a slice defines the table schema for that slice; later records are
/// enumerated by the fields they actually carry, so a record missing a
/// field contributes a shorter row rather than a padded one.
pub type Record = IndexMap<String, Value>;

/// Direction records are retrieved from a dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordOrder {
    /// Bottom-ranked retrieval, lowest first.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Top-ranked retrieval, highest first.
    #[serde(rename = "desc")]
    Descending,
}

impl FromStr for RecordOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(RecordOrder::Ascending),
            "desc" => Ok(RecordOrder::Descending),
            other => Err(format!("unknown record order `{other}`, expected `asc` or `desc`")),
        }
    }
}

/// Deserializes a JSON array of objects into records, keeping each
/// object's key order.
pub fn records_from_str(json: &str) -> Result<Vec<Record>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Byte-slice variant of [`records_from_str`].
pub fn records_from_slice(json: &[u8]) -> Result<Vec<Record>, serde_json::Error> {
    serde_json::from_slice(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingestion_preserves_document_key_order() {
        let records = records_from_str(r#"[{"zebra": 1, "apple": 2, "mango": 3}]"#).unwrap();
        let keys: Vec<&String> = records[0].keys().collect();

        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn ingestion_accepts_heterogeneous_shapes() {
        let records = records_from_str(r#"[{"id": 1, "name": "a"}, {"id": 2}]"#).unwrap();

        assert_eq!(records[0].len(), 2);
        assert_eq!(records[1].len(), 1);
    }

    #[test]
    fn ingestion_rejects_non_object_elements() {
        assert!(records_from_str(r#"[1, 2, 3]"#).is_err());
    }

    #[test]
    fn slice_ingestion_matches_str_ingestion() {
        let json = r#"[{"id": 7}]"#;

        assert_eq!(records_from_slice(json.as_bytes()).unwrap(), records_from_str(json).unwrap());
    }

    #[test]
    fn record_order_round_trips_wire_names() {
        assert_eq!("asc".parse::<RecordOrder>().unwrap(), RecordOrder::Ascending);
        assert_eq!("desc".parse::<RecordOrder>().unwrap(), RecordOrder::Descending);
        assert!("ascending".parse::<RecordOrder>().is_err());
    }
}
