use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// The fixed milestone plan: `(name, offset in months relative to SOP)`,
/// ordered by offset ascending.
pub const MILESTONE_PLAN: [(&str, f64); 10] = [
    ("Concept", -55.0),
    ("Sketch", -52.0),
    ("Model", -40.0),
    ("CAD", -32.5),
    ("Drawing", -26.0),
    ("DP", -20.0),
    ("PP", -10.0),
    ("MPP", -5.0),
    ("Pilot", -1.0),
    ("SOP", 0.0),
];

/// A named project phase whose date is derived from the SOP date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    /// Offset from SOP in months. May be fractional.
    pub offset: f64,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// Parse the raw SOP input. Only ISO calendar dates are accepted.
pub fn parse_sop(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::MissingSop);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| AppError::InvalidSop(raw.to_string()))
}

/// Shift `date` by `offset` months.
///
/// The offset is truncated toward zero to whole months, so `-32.5` moves
/// back 32 months. The day of month is clamped to the length of the target
/// month (31 March minus one month is the last day of February).
pub fn add_months(date: NaiveDate, offset: f64) -> Option<NaiveDate> {
    let whole = offset.trunc();
    if !whole.is_finite() || whole.abs() > u32::MAX as f64 {
        return None;
    }
    let months = Months::new(whole.abs() as u32);
    if whole < 0.0 {
        date.checked_sub_months(months)
    } else {
        date.checked_add_months(months)
    }
}

/// Build the full milestone schedule for the given SOP date.
pub fn generate_schedule(sop: NaiveDate) -> Result<Vec<Milestone>> {
    MILESTONE_PLAN
        .iter()
        .map(|&(name, offset)| {
            let date =
                add_months(sop, offset).ok_or_else(|| AppError::DateOutOfRange(name.to_string()))?;
            Ok(Milestone {
                name: name.to_string(),
                offset,
                date,
            })
        })
        .collect()
}
