//! History records.
//!
//! A record is written exactly once, when the user triggers a computation,
//! and is never updated afterwards. The store assigns `id` and `log_date`.

use std::fmt;

use chrono::NaiveDate;

/// One persisted computation.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiRecord {
  pub id:       i64,
  /// Pounds, as entered.
  pub weight:   f64,
  /// Inches, as entered.
  pub height:   f64,
  pub bmi:      f64,
  /// Calendar date of insertion. The store keeps full precision; only the
  /// date is surfaced.
  pub log_date: NaiveDate,
}

/// History line, e.g. `2024-03-01:  21.5 (W:150, H:70)`.
impl fmt::Display for BmiRecord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}:  {:.1} (W:{}, H:{})",
      self.log_date, self.bmi, self.weight, self.height
    )
  }
}

/// Input to [`crate::store::HistoryStore::append`].
/// `id` and the log date are always assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewRecord {
  pub weight: f64,
  pub height: f64,
  pub bmi:    f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn history_line_format() {
    let rec = BmiRecord {
      id:       1,
      weight:   150.0,
      height:   70.5,
      bmi:      21.2177,
      log_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    };
    assert_eq!(rec.to_string(), "2024-03-01:  21.2 (W:150, H:70.5)");
  }
}
