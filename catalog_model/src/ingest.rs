use serde::{Deserialize, Serialize};

/// One normalized CSV row in transit through the ingest queue.
///
/// Field names match the CSV header of uploaded catalog files. `count`
/// defaults to 0 when the column is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub count: u32,
}

/// The pinned producer/consumer contract between the CSV parser and the
/// batch writer: provenance plus the row nested under `record`. This is the
/// only shape either side produces or accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestQueueMessage {
    pub bucket: String,
    pub key: String,
    pub record: IngestRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_message_uses_nested_record_shape() {
        let message = IngestQueueMessage {
            bucket: "shop-uploads".to_string(),
            key: "uploaded/items.csv".to_string(),
            record: IngestRecord {
                title: "Laptop".to_string(),
                description: String::new(),
                price: 1200.0,
                count: 5,
            },
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["bucket"], "shop-uploads");
        assert_eq!(value["key"], "uploaded/items.csv");
        assert_eq!(value["record"]["title"], "Laptop");
        assert_eq!(value["record"]["price"], 1200.0);
        assert_eq!(value["record"]["count"], 5);
    }

    #[test]
    fn record_count_defaults_to_zero() {
        let record: IngestRecord =
            serde_json::from_str(r#"{"title":"Mouse","price":25.5}"#).unwrap();
        assert_eq!(record.count, 0);
        assert_eq!(record.description, "");
    }

    #[test]
    fn flat_row_shape_is_rejected() {
        let flat = r#"{"bucket":"b","key":"k","title":"Mouse","price":25.5}"#;
        assert!(serde_json::from_str::<IngestQueueMessage>(flat).is_err());
    }
}
