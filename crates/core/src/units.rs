//! Byte-count normalization for size-valued telemetry fields.

/// One gibibyte, the target scale for all disk/memory/swap fields.
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Sentinel substituted for a size field whose raw value could not be
/// converted.
pub const UNAVAILABLE: &str = "N/A";

/// Error returned when a raw metric value is not a number.
#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    /// The raw value could not be parsed as a floating-point number.
    #[error("not a numeric value: {0:?}")]
    NotNumeric(String),
}

/// Convert a raw byte count (as the upstream's numeric string) into a
/// gibibyte string with two decimal places, e.g. `"1073741824"` ->
/// `"1.00"`.
///
/// Callers append the unit suffix and substitute [`UNAVAILABLE`] on
/// failure; a single bad field must not fail the surrounding fetch.
pub fn bytes_to_gib(raw: &str) -> Result<String, UnitError> {
    let bytes: f64 = raw
        .trim()
        .parse()
        .map_err(|_| UnitError::NotNumeric(raw.to_string()))?;
    Ok(format!("{:.2}", bytes / GIB))
}
