//! Decoding helpers between SQLite rows and domain types.
//!
//! `logDate` is stored as a Julian day number and read back through
//! `date(logDate)`, which yields an ISO `YYYY-MM-DD` string.

use bmi_core::record::BmiRecord;
use chrono::NaiveDate;
use rusqlite::types::ValueRef;
#[cfg(test)]
use chrono::{DateTime, Utc};

use crate::{Error, Result};

// ─── Dates ───────────────────────────────────────────────────────────────────

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

/// Julian day number of the Unix epoch.
#[cfg(test)]
const UNIX_EPOCH_JULIAN_DAY: f64 = 2_440_587.5;

#[cfg(test)]
pub fn encode_julian_day(dt: DateTime<Utc>) -> f64 {
  UNIX_EPOCH_JULIAN_DAY + dt.timestamp_millis() as f64 / 86_400_000.0
}

// ─── Row types ───────────────────────────────────────────────────────────────

// ─── Numbers ─────────────────────────────────────────────────────────────────

/// Decode a numeric column of any storage class.
///
/// Older databases hold the form text verbatim (`''` for an empty field) and
/// SQLite stores a bound `NaN` as NULL. Numeric text is parsed; anything else
/// becomes `NaN`.
pub fn decode_number(value: ValueRef<'_>) -> f64 {
  match value {
    ValueRef::Integer(i) => i as f64,
    ValueRef::Real(r) => r,
    ValueRef::Text(t) => std::str::from_utf8(t)
      .ok()
      .and_then(|s| s.trim().parse().ok())
      .unwrap_or(f64::NAN),
    ValueRef::Null | ValueRef::Blob(_) => f64::NAN,
  }
}

/// Values read directly from a `bmiCalc` row.
pub struct RawRecord {
  pub id:       i64,
  pub weight:   f64,
  pub height:   f64,
  pub bmi:      f64,
  /// `date(logDate)`; NULL when `logDate` is missing or not a date.
  pub log_date: Option<String>,
}

impl RawRecord {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:       row.get(0)?,
      weight:   decode_number(row.get_ref(1)?),
      height:   decode_number(row.get_ref(2)?),
      bmi:      decode_number(row.get_ref(3)?),
      log_date: row.get(4)?,
    })
  }

  pub fn into_record(self) -> Result<BmiRecord> {
    let log_date = self
      .log_date
      .as_deref()
      .ok_or_else(|| Error::DateParse(format!("record {} has no log date", self.id)))
      .and_then(decode_date)?;

    Ok(BmiRecord {
      id: self.id,
      weight: self.weight,
      height: self.height,
      bmi: self.bmi,
      log_date,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn decodes_sqlite_date() {
    assert_eq!(
      decode_date("2024-03-01").unwrap(),
      NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    );
    assert!(matches!(decode_date("yesterday"), Err(Error::DateParse(_))));
  }

  #[test]
  fn decodes_numbers_of_every_storage_class() {
    assert_eq!(decode_number(ValueRef::Integer(150)), 150.0);
    assert_eq!(decode_number(ValueRef::Real(70.5)), 70.5);
    assert_eq!(decode_number(ValueRef::Text(b" 65 ")), 65.0);
    assert!(decode_number(ValueRef::Text(b"")).is_nan());
    assert!(decode_number(ValueRef::Null).is_nan());
    assert!(decode_number(ValueRef::Blob(&[1, 2])).is_nan());
  }

  #[test]
  fn julian_day_of_epoch_and_noon() {
    let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(encode_julian_day(epoch), 2_440_587.5);

    let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(encode_julian_day(noon), 2_451_545.0);
  }
}
