//! Cruise types: the legacy record shape and the import document it becomes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A cruise record as exported by the legacy schema.
///
/// Every field is required but its value is opaque: whatever JSON the export
/// holds is carried into the import document unchanged. A record missing any
/// field fails conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyCruise {
    pub id: Value,
    pub cruise_id: Value,
    pub start_ts: Value,
    pub stop_ts: Value,
    pub cruise_location: Value,
    pub cruise_pi: Value,
    pub cruise_tags: Value,
    pub cruise_hidden: Value,
    pub cruise_name: Value,
    pub cruise_description: Value,
}

/// The top-level shape of a legacy cruise file.
///
/// Legacy exports hold either a bare record or an array of them.
/// Records stay as raw JSON objects until conversion so that a failing
/// record can still be identified by whatever fields it does have.
#[derive(Debug, Clone)]
pub enum CruiseDocument {
    Single(Map<String, Value>),
    Many(Vec<Map<String, Value>>),
}

impl CruiseDocument {
    /// Flattens the document into its records, in file order.
    pub fn into_records(self) -> Vec<Map<String, Value>> {
        match self {
            Self::Single(record) => vec![record],
            Self::Many(records) => records,
        }
    }
}

/// A cruise in the import schema.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cruise {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub cruise_id: Value,
    pub start_ts: Date,
    pub stop_ts: Date,
    pub cruise_location: Value,
    pub cruise_pi: Value,
    pub cruise_tags: Value,
    pub cruise_hidden: Value,

    /// Authorization data; the legacy schema has none.
    pub cruise_access_list: Vec<String>,

    pub cruise_additional_meta: CruiseAdditionalMeta,
}

/// Descriptive metadata nested under `cruise_additional_meta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CruiseAdditionalMeta {
    pub cruise_name: Value,
    pub cruise_vessel: String,
    pub cruise_description: Value,
    pub cruise_participants: Vec<String>,
    pub cruise_files: Vec<String>,
}

/// An identifier tagged as `{"$oid": ...}` for the document-store import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectId {
    #[serde(rename = "$oid")]
    pub oid: Value,
}

/// A timestamp tagged as `{"$date": ...}` for the document-store import.
///
/// The value is passed through verbatim, not reparsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Date {
    #[serde(rename = "$date")]
    pub date: Value,
}

impl From<LegacyCruise> for Cruise {
    fn from(legacy: LegacyCruise) -> Self {
        Self {
            id: ObjectId { oid: legacy.id },
            cruise_id: legacy.cruise_id,
            start_ts: Date {
                date: legacy.start_ts,
            },
            stop_ts: Date {
                date: legacy.stop_ts,
            },
            cruise_location: legacy.cruise_location,
            cruise_pi: legacy.cruise_pi,
            cruise_tags: legacy.cruise_tags,
            cruise_hidden: legacy.cruise_hidden,
            cruise_access_list: Vec::new(),
            cruise_additional_meta: CruiseAdditionalMeta {
                cruise_name: legacy.cruise_name,
                cruise_vessel: String::new(),
                cruise_description: legacy.cruise_description,
                cruise_participants: Vec::new(),
                cruise_files: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn sample_legacy() -> LegacyCruise {
        LegacyCruise {
            id: json!("5981f167212b348aed7fa9f5"),
            cruise_id: json!("FK190612"),
            start_ts: json!("2019-06-12T00:00:00.000Z"),
            stop_ts: json!("2019-06-30T00:00:00.000Z"),
            cruise_location: json!("Mariana Trench"),
            cruise_pi: json!("Dr. Y"),
            cruise_tags: json!(["ROV", "biology"]),
            cruise_hidden: json!(true),
            cruise_name: json!("Deep Dive"),
            cruise_description: json!("Sampling the trench walls."),
        }
    }

    #[test]
    fn cruise_serializes_with_tagged_fields_in_order() {
        let cruise = Cruise::from(sample_legacy());
        let json = serde_json::to_string(&cruise).unwrap();

        let expected = concat!(
            r#"{"_id":{"$oid":"5981f167212b348aed7fa9f5"},"cruise_id":"FK190612","#,
            r#""start_ts":{"$date":"2019-06-12T00:00:00.000Z"},"#,
            r#""stop_ts":{"$date":"2019-06-30T00:00:00.000Z"},"#,
            r#""cruise_location":"Mariana Trench","cruise_pi":"Dr. Y","#,
            r#""cruise_tags":["ROV","biology"],"cruise_hidden":true,"#,
            r#""cruise_access_list":[],"#,
            r#""cruise_additional_meta":{"cruise_name":"Deep Dive","cruise_vessel":"","#,
            r#""cruise_description":"Sampling the trench walls.","#,
            r#""cruise_participants":[],"cruise_files":[]}}"#,
        );
        assert_eq!(json, expected);
    }

    #[test]
    fn placeholders_are_empty() {
        let cruise = Cruise::from(sample_legacy());

        assert!(cruise.cruise_access_list.is_empty());
        assert_eq!(cruise.cruise_additional_meta.cruise_vessel, "");
        assert!(cruise.cruise_additional_meta.cruise_participants.is_empty());
        assert!(cruise.cruise_additional_meta.cruise_files.is_empty());
    }

    #[test]
    fn legacy_cruise_rejects_missing_field() {
        let value = json!({
            "id": "abc123",
            "cruise_id": "CR1",
        });
        assert!(serde_json::from_value::<LegacyCruise>(value).is_err());
    }

    #[test]
    fn legacy_cruise_accepts_null_and_numeric_values() {
        let mut legacy = serde_json::to_value(sample_legacy()).unwrap();
        legacy["id"] = json!(42);
        legacy["cruise_hidden"] = Value::Null;

        let legacy: LegacyCruise = serde_json::from_value(legacy).unwrap();
        let cruise = Cruise::from(legacy);

        assert_eq!(cruise.id.oid, json!(42));
        assert_eq!(cruise.cruise_hidden, Value::Null);
    }

    #[test]
    fn single_document_flattens_to_one_record() {
        let record = json!({"id": "a"}).as_object().unwrap().clone();
        let doc = CruiseDocument::Single(record);

        assert_eq!(doc.into_records().len(), 1);
    }
}
