//! Error types for `bmi-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{field} is not a number: {input:?}")]
  InvalidNumber { field: &'static str, input: String },

  #[error("{field} must be greater than zero, got {value}")]
  NonPositive { field: &'static str, value: f64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
