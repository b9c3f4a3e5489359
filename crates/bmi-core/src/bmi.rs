//! The BMI engine: one formula and a four-way classification.
//!
//! Inputs are pounds and inches. The engine performs no validation; a zero
//! height produces a non-finite value which still classifies
//! deterministically. Callers wanting to reject such input parse through
//! [`Measurements`](crate::measurement::Measurements) first.

use std::fmt;

/// Conversion factor for `lb / in²` to `kg / m²`.
pub const IMPERIAL_FACTOR: f64 = 703.0;

// ─── Category ────────────────────────────────────────────────────────────────

/// Health category for a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
  Underweight,
  Healthy,
  Overweight,
  Obese,
}

impl Category {
  /// Classify `bmi` by the first matching band.
  ///
  /// The two middle bands are inclusive on both ends. Anything that falls
  /// through, including `NaN` and `+inf`, is [`Category::Obese`].
  pub fn classify(bmi: f64) -> Self {
    if bmi < 18.5 {
      Self::Underweight
    } else if (18.5..=24.9).contains(&bmi) {
      Self::Healthy
    } else if (25.0..=29.9).contains(&bmi) {
      Self::Overweight
    } else {
      Self::Obese
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Self::Underweight => "Underweight",
      Self::Healthy => "Healthy",
      Self::Overweight => "Overweight",
      Self::Obese => "Obese",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

// ─── Reading ─────────────────────────────────────────────────────────────────

/// The result of one computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReading {
  pub bmi:      f64,
  pub category: Category,
}

/// Renders the user-facing result line, e.g.
/// `Body Mass Index is 21.5\n(Healthy)`.
impl fmt::Display for BmiReading {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Body Mass Index is {:.1}\n({})", self.bmi, self.category)
  }
}

/// Compute the BMI for a weight in pounds and a height in inches.
pub fn compute(weight_lb: f64, height_in: f64) -> BmiReading {
  let bmi = (weight_lb / (height_in * height_in)) * IMPERIAL_FACTOR;
  BmiReading {
    bmi,
    category: Category::classify(bmi),
  }
}
