//! Batch request validation logic

use super::super::types::*;
use super::core::BatchProcessor;
use crate::core::codes::parse_date;
use crate::utils::error::{RegistryError, Result};
use chrono::NaiveDate;

/// Longest warranty a label may carry
pub const MAX_WARRANTY_YEARS: u32 = 100;

impl BatchProcessor {
    /// Validate a batch request before any side effects
    pub fn validate_batch_request(&self, request: &BatchGenerateRequest) -> Result<BatchSpec> {
        let mut missing = Vec::new();
        let part_type = required_text(&request.part_type, "partType", &mut missing);
        let manufacture_date =
            required_text(&request.manufacture_date, "manufactureDate", &mut missing);
        let lot_no = required_text(&request.lot_no, "lotNo", &mut missing);
        let manufacturer_name =
            required_text(&request.manufacturer_name, "manufacturerName", &mut missing);
        let expiry_date = required_text(&request.expiry_date, "expiryDate", &mut missing);
        let start_id = required(request.start_id, "startId", &mut missing);
        let end_id = required(request.end_id, "endId", &mut missing);
        let warranty_years = required(request.warranty_years, "warrantyYears", &mut missing);

        let (
            Some(part_type),
            Some(manufacture_date),
            Some(lot_no),
            Some(manufacturer_name),
            Some(expiry_date),
            Some(start_id),
            Some(end_id),
            Some(warranty_years),
        ) = (
            part_type,
            manufacture_date,
            lot_no,
            manufacturer_name,
            expiry_date,
            start_id,
            end_id,
            warranty_years,
        )
        else {
            return Err(RegistryError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        };

        let start = non_negative(start_id, "startId")?;
        let end = non_negative(end_id, "endId")?;
        if start > end {
            return Err(RegistryError::Validation(format!(
                "startId ({}) must be less than or equal to endId ({})",
                start, end
            )));
        }

        let max_units = self.codes.max_batch_size;
        let units = u64::from(end - start) + 1;
        if units > u64::from(max_units) {
            return Err(RegistryError::Validation(format!(
                "Batch covers {} serial numbers; at most {} are allowed per request",
                units, max_units
            )));
        }

        Ok(BatchSpec {
            part_type: part_type.to_string(),
            start,
            end,
            manufacture_date: date(manufacture_date, "manufactureDate")?,
            lot_no: lot_no.to_string(),
            manufacturer_name: manufacturer_name.to_string(),
            warranty_years: warranty(warranty_years)?,
            expiry_date: date(expiry_date, "expiryDate")?,
        })
    }

    /// Validate a single document request
    pub fn validate_single_request(
        &self,
        request: &SingleDocumentRequest,
    ) -> Result<(String, NaiveDate, u32)> {
        let mut missing = Vec::new();
        let part_type = required_text(&request.part_type, "partType", &mut missing);
        let manufacture_date =
            required_text(&request.manufacture_date, "manufactureDate", &mut missing);
        let serial_no = required(request.serial_no, "serialNo", &mut missing);

        match (part_type, manufacture_date, serial_no) {
            (Some(part_type), Some(manufacture_date), Some(serial_no)) => Ok((
                part_type.to_string(),
                date(manufacture_date, "manufactureDate")?,
                non_negative(serial_no, "serialNo")?,
            )),
            _ => Err(RegistryError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            ))),
        }
    }
}

fn required_text<'a>(
    value: &'a Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Some(text),
        _ => {
            missing.push(name);
            None
        }
    }
}

fn required<T>(value: Option<T>, name: &'static str, missing: &mut Vec<&'static str>) -> Option<T> {
    if value.is_none() {
        missing.push(name);
    }
    value
}

fn non_negative(value: i64, name: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        RegistryError::Validation(format!(
            "{} must be a non-negative integer no greater than {}, got {}",
            name,
            u32::MAX,
            value
        ))
    })
}

fn warranty(value: i64) -> Result<u32> {
    let years = non_negative(value, "warrantyYears")?;
    if years > MAX_WARRANTY_YEARS {
        return Err(RegistryError::Validation(format!(
            "warrantyYears must be at most {}, got {}",
            MAX_WARRANTY_YEARS, years
        )));
    }
    Ok(years)
}

fn date(value: &str, name: &str) -> Result<NaiveDate> {
    parse_date(value).ok_or_else(|| {
        RegistryError::Validation(format!(
            "{} must be a date in YYYY-MM-DD format, got '{}'",
            name, value
        ))
    })
}
