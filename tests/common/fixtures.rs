//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use chrono::{NaiveDate, Utc};
use railqr::core::batch::BatchGenerateRequest;
use railqr::core::codes::DerivedCode;
use railqr::core::registry::CodeRecord;
use serde_json::{Value, json};
use uuid::Uuid;

/// Factory for batch generation requests
pub struct BatchRequestFactory;

impl BatchRequestFactory {
    /// A valid request for the inclusive serial range
    pub fn range(part_type: &str, start: i64, end: i64) -> BatchGenerateRequest {
        BatchGenerateRequest {
            part_type: Some(part_type.to_string()),
            start_id: Some(start),
            end_id: Some(end),
            manufacture_date: Some("2025-09-15".to_string()),
            lot_no: Some("LOT-2025-09".to_string()),
            manufacturer_name: Some("Konkan Track Components".to_string()),
            warranty_years: Some(5),
            expiry_date: Some("2030-09-15".to_string()),
        }
    }

    /// The same request as a JSON body
    pub fn json(part_type: &str, start: i64, end: i64) -> Value {
        serde_json::to_value(Self::range(part_type, start, end)).expect("request serializes")
    }

    /// A JSON body missing the named fields
    pub fn json_without(fields: &[&str]) -> Value {
        let mut body = Self::json("Rail Clip", 1, 2);
        if let Some(map) = body.as_object_mut() {
            for field in fields {
                map.remove(*field);
            }
        }
        body
    }

    /// Single-document request body
    pub fn single(part_type: &str, serial_no: i64) -> Value {
        json!({
            "partType": part_type,
            "manufactureDate": "2025-09-15",
            "serialNo": serial_no
        })
    }
}

/// Factory for registry records
pub struct CodeRecordFactory;

impl CodeRecordFactory {
    /// A Rail Clip record for September 2025
    pub fn create(serial_no: u32, batch_id: &str) -> CodeRecord {
        let date = NaiveDate::from_ymd_opt(2025, 9, 15).expect("valid date");
        let derived = DerivedCode::new("Rail Clip", date, serial_no, "http://localhost:8000/api/qr");
        CodeRecord {
            id: Uuid::new_v4().to_string(),
            code: derived.code,
            part_type: "Rail Clip".to_string(),
            manufacture_date: date,
            lot_no: "LOT-2025-09".to_string(),
            serial_no,
            manufacturer_name: "Konkan Track Components".to_string(),
            warranty_years: 5,
            expiry_date: NaiveDate::from_ymd_opt(2030, 9, 15).expect("valid date"),
            url: derived.url,
            batch_id: batch_id.to_string(),
            created_at: Utc::now(),
        }
    }
}
