//! Code derivation
//!
//! Maps `(part type, manufacture date, serial number)` to the human-readable code
//! printed on a label and to the canonical lookup URL encoded in its QR symbol.
//!
//! ```text
//! code = "{prefix}-{yyyymm}-{serial:03}"        RC-202509-004
//! url  = "{base_url}/{prefix}/{yyyymm}-{serial:03}"
//! ```
//!
//! Derivation never fails: unknown part types degrade to [`FALLBACK_PREFIX`].


use chrono::{DateTime, Datelike, NaiveDate};
use serde::Serialize;

/// Prefix used for part types outside the fixed table
pub const FALLBACK_PREFIX: &str = "PT";

const PART_PREFIXES: [(&str, &str); 5] = [
    ("Rail Clip", "RC"),
    ("Rail Pad", "RP"),
    ("Elastic Rail Clip", "ERC"),
    ("Fish Plate", "FP"),
    ("Base Plate", "BP"),
];

/// One entry of the part type table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartType {
    pub part_type: &'static str,
    pub prefix: &'static str,
}

/// The fixed part type table, in declaration order
pub fn known_part_types() -> Vec<PartType> {
    PART_PREFIXES
        .iter()
        .map(|&(part_type, prefix)| PartType { part_type, prefix })
        .collect()
}

/// Look up the prefix of a part type, falling back to [`FALLBACK_PREFIX`]
pub fn derive_prefix(part_type: &str) -> &'static str {
    PART_PREFIXES
        .iter()
        .find(|(name, _)| *name == part_type)
        .map(|(_, prefix)| *prefix)
        .unwrap_or(FALLBACK_PREFIX)
}

/// Six digit `yyyymm` string
pub fn year_month(date: NaiveDate) -> String {
    format!("{:04}{:02}", date.year(), date.month())
}

/// Zero-pad to three digits; wider serials keep all their digits
pub fn pad_serial(serial_no: u32) -> String {
    format!("{:03}", serial_no)
}

/// Derive the human-readable code, e.g. `RC-202509-001`
pub fn derive_code(part_type: &str, manufacture_date: NaiveDate, serial_no: u32) -> String {
    format!(
        "{}-{}-{}",
        derive_prefix(part_type),
        year_month(manufacture_date),
        pad_serial(serial_no)
    )
}

/// Derive the canonical lookup URL under `base_url`
pub fn derive_url(
    part_type: &str,
    manufacture_date: NaiveDate,
    serial_no: u32,
    base_url: &str,
) -> String {
    format!(
        "{}/{}/{}-{}",
        base_url.trim_end_matches('/'),
        derive_prefix(part_type),
        year_month(manufacture_date),
        pad_serial(serial_no)
    )
}

/// Code and URL derived together for one serial number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedCode {
    pub code: String,
    pub url: String,
}

impl DerivedCode {
    pub fn new(part_type: &str, manufacture_date: NaiveDate, serial_no: u32, base_url: &str) -> Self {
        Self {
            code: derive_code(part_type, manufacture_date, serial_no),
            url: derive_url(part_type, manufacture_date, serial_no, base_url),
        }
    }
}

/// Components of a code split back apart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeParts {
    pub prefix: String,
    pub year_month: String,
    pub serial: u32,
}

impl CodeParts {
    /// The `{yyyymm}-{serial}` path segment used by the scan route
    pub fn year_month_code(&self) -> String {
        format!("{}-{}", self.year_month, pad_serial(self.serial))
    }
}

/// Split a code into prefix, `yyyymm` and serial.
///
/// Returns `None` unless the code has the shape produced by [`derive_code`].
pub fn parse_code(code: &str) -> Option<CodeParts> {
    let mut parts = code.split('-');
    let (prefix, year_month, serial) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let prefix_ok = !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_uppercase());
    let year_month_ok = year_month.len() == 6
        && year_month.chars().all(|c| c.is_ascii_digit())
        && matches!(year_month[4..].parse::<u32>(), Ok(1..=12));
    let serial_ok = serial.len() >= 3 && serial.chars().all(|c| c.is_ascii_digit());
    if !(prefix_ok && year_month_ok && serial_ok) {
        return None;
    }

    Some(CodeParts {
        prefix: prefix.to_string(),
        year_month: year_month.to_string(),
        serial: serial.parse().ok()?,
    })
}

/// Parse a calendar date given as `YYYY-MM-DD` or as an RFC 3339 timestamp.
///
/// Timestamps keep their own calendar date; no timezone conversion is applied.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
