//! Error type for `bmi-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to open database")]
  Open(#[source] tokio_rusqlite::Error),

  #[error("failed to create history schema")]
  Schema(#[source] tokio_rusqlite::Error),

  #[error("failed to insert history record")]
  Write(#[source] tokio_rusqlite::Error),

  #[error("failed to read history")]
  Read(#[source] tokio_rusqlite::Error),

  #[error("date parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
