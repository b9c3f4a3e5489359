//! The `HistoryStore` trait and the no-op store.
//!
//! The trait is implemented by storage backends (e.g. `bmi-store-sqlite`).
//! Higher layers (`bmi-cli`) depend on this abstraction, not on any concrete
//! backend.

use std::{convert::Infallible, future::Future};

use crate::record::{BmiRecord, NewRecord};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a history backend.
///
/// Records are append-only. There are no update or delete operations.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait HistoryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create the history table if it does not exist. Safe to call on every
  /// open.
  fn initialize_schema(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Persist one computation. The store assigns the id and the log date.
  fn append(
    &self,
    record: NewRecord,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// All records, most recent first.
  fn query_history(
    &self,
  ) -> impl Future<Output = Result<Vec<BmiRecord>, Self::Error>> + Send + '_;

  /// Like [`query_history`](Self::query_history), but a failed read is
  /// logged and reported as an empty history.
  fn fetch_history_descending(
    &self,
  ) -> impl Future<Output = Vec<BmiRecord>> + Send + '_ {
    async move {
      match self.query_history().await {
        Ok(records) => records,
        Err(e) => {
          tracing::warn!(
            error = &e as &(dyn std::error::Error + 'static),
            "failed to fetch history"
          );
          Vec::new()
        }
      }
    }
  }
}

// ─── No-op store ─────────────────────────────────────────────────────────────

/// A store that records nothing.
///
/// Used when no embedded database is available or history is switched off.
/// Every operation succeeds and every query is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl HistoryStore for NullStore {
  type Error = Infallible;

  async fn initialize_schema(&self) -> Result<(), Infallible> { Ok(()) }

  async fn append(&self, _record: NewRecord) -> Result<(), Infallible> { Ok(()) }

  async fn query_history(&self) -> Result<Vec<BmiRecord>, Infallible> {
    Ok(Vec::new())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn null_store_accepts_everything_and_returns_nothing() {
    let s = NullStore;
    s.initialize_schema().await.unwrap();
    s.initialize_schema().await.unwrap();
    s.append(NewRecord {
      weight: 150.0,
      height: 70.0,
      bmi:    21.5,
    })
    .await
    .unwrap();

    assert!(s.query_history().await.unwrap().is_empty());
    assert!(s.fetch_history_descending().await.is_empty());
  }
}
