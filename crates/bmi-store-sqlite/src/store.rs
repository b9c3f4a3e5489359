//! [`SqliteStore`] — the SQLite implementation of [`HistoryStore`].

use std::path::Path;

use bmi_core::{
  record::{BmiRecord, NewRecord},
  store::HistoryStore,
};

use crate::{
  Error, Result,
  encode::RawRecord,
  schema::{INSERT_RECORD, SCHEMA, SELECT_HISTORY},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A BMI history backed by a single SQLite file.
///
/// Statements run one at a time, in submission order, on the connection's
/// background thread. Cloning is cheap: the connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) the database at `path`.
  ///
  /// The schema is not touched; call
  /// [`initialize_schema`](HistoryStore::initialize_schema) before use.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    tracing::debug!(path = %path.display(), "opening history database");
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(Error::Open)?;
    Ok(Self { conn })
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(Error::Open)?;
    Ok(Self { conn })
  }

  /// Insert a row with an explicit Julian-day `logDate`.
  #[cfg(test)]
  pub(crate) async fn append_logged_at(
    &self,
    record: NewRecord,
    logged_at: chrono::DateTime<chrono::Utc>,
  ) -> Result<()> {
    let julian_day = crate::encode::encode_julian_day(logged_at);
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO bmiCalc (weight, height, bmi, logDate) VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![record.weight, record.height, record.bmi, julian_day],
        )?;
        Ok(())
      })
      .await
      .map_err(Error::Write)
  }

  /// Run `sql` as-is, for rows the public API cannot produce.
  #[cfg(test)]
  pub(crate) async fn execute_raw(&self, sql: &'static str) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(sql)?;
        Ok(())
      })
      .await
      .map_err(Error::Write)
  }
}

// ─── HistoryStore impl ───────────────────────────────────────────────────────

impl HistoryStore for SqliteStore {
  type Error = Error;

  async fn initialize_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .map_err(Error::Schema)?;
    tracing::debug!("history schema ready");
    Ok(())
  }

  async fn append(&self, record: NewRecord) -> Result<()> {
    let id = self
      .conn
      .call(move |conn| {
        // Schema and insert commit together.
        let tx = conn.transaction()?;
        tx.execute_batch(SCHEMA)?;
        tx.execute(
          INSERT_RECORD,
          rusqlite::params![record.weight, record.height, record.bmi],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
      })
      .await
      .map_err(Error::Write)?;

    tracing::debug!(id, bmi = record.bmi, "appended history record");
    Ok(())
  }

  async fn query_history(&self) -> Result<Vec<BmiRecord>> {
    let raws: Vec<RawRecord> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(SELECT_HISTORY)?;
        let rows = stmt
          .query_map([], RawRecord::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(Error::Read)?;

    raws.into_iter().map(RawRecord::into_record).collect()
  }
}
