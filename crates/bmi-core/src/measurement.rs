//! Parsing of the two free-text form fields into numbers.

use crate::{
  Error, Result,
  bmi::{self, BmiReading},
  record::NewRecord,
};

/// A weight and height pair as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
  pub weight_lb: f64,
  pub height_in: f64,
}

impl Measurements {
  /// Parse the weight (pounds) and height (inches) fields.
  ///
  /// Surrounding whitespace is ignored. Both values must be finite and
  /// strictly positive; anything else is rejected here so a degenerate BMI
  /// never reaches the display or the history.
  pub fn parse(weight: &str, height: &str) -> Result<Self> {
    Ok(Self {
      weight_lb: parse_field("weight", weight)?,
      height_in: parse_field("height", height)?,
    })
  }

  pub fn compute(&self) -> BmiReading { bmi::compute(self.weight_lb, self.height_in) }

  /// The row to persist for `reading`.
  pub fn to_record(&self, reading: &BmiReading) -> NewRecord {
    NewRecord {
      weight: self.weight_lb,
      height: self.height_in,
      bmi:    reading.bmi,
    }
  }
}

fn parse_field(field: &'static str, input: &str) -> Result<f64> {
  let value: f64 = input
    .trim()
    .parse()
    .ok()
    .filter(|v: &f64| v.is_finite())
    .ok_or_else(|| Error::InvalidNumber {
      field,
      input: input.to_owned(),
    })?;

  if value <= 0.0 {
    return Err(Error::NonPositive { field, value });
  }
  Ok(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_trimmed_decimals() {
    let m = Measurements::parse(" 150.5 ", "70").unwrap();
    assert_eq!(m.weight_lb, 150.5);
    assert_eq!(m.height_in, 70.0);
  }

  #[test]
  fn rejects_empty_and_text() {
    assert!(matches!(
      Measurements::parse("", "70"),
      Err(Error::InvalidNumber { field: "weight", .. })
    ));
    assert!(matches!(
      Measurements::parse("150", "tall"),
      Err(Error::InvalidNumber { field: "height", .. })
    ));
  }

  #[test]
  fn rejects_non_finite() {
    assert!(matches!(
      Measurements::parse("inf", "70"),
      Err(Error::InvalidNumber { .. })
    ));
    assert!(matches!(
      Measurements::parse("150", "NaN"),
      Err(Error::InvalidNumber { .. })
    ));
  }

  #[test]
  fn rejects_zero_and_negative() {
    assert!(matches!(
      Measurements::parse("150", "0"),
      Err(Error::NonPositive { field: "height", .. })
    ));
    assert!(matches!(
      Measurements::parse("-5", "70"),
      Err(Error::NonPositive { field: "weight", .. })
    ));
  }

  #[test]
  fn record_carries_inputs_and_bmi() {
    let m = Measurements::parse("150", "70").unwrap();
    let reading = m.compute();
    let rec = m.to_record(&reading);
    assert_eq!(rec.weight, 150.0);
    assert_eq!(rec.height, 70.0);
    assert_eq!(rec.bmi, reading.bmi);
  }
}
