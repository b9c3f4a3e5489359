//! [`Calculator`] — the engine wired to a history store.
//!
//! Built once at startup and handed to the front end. Store failures stop
//! here: they are logged and muted so the user only ever sees a reading or
//! nothing.

use crate::{
  bmi::BmiReading,
  measurement::Measurements,
  record::BmiRecord,
  store::HistoryStore,
};

pub struct Calculator<S> {
  store:        S,
  schema_ready: bool,
}

impl<S: HistoryStore> Calculator<S> {
  /// Take ownership of `store` and initialise its schema.
  ///
  /// A schema failure is logged, not returned; the history feature then
  /// degrades to whatever the store can still do.
  pub async fn start(store: S) -> Self {
    let schema_ready = match store.initialize_schema().await {
      Ok(()) => true,
      Err(e) => {
        tracing::warn!(
          error = &e as &(dyn std::error::Error + 'static),
          "failed to initialise history schema"
        );
        false
      }
    };
    Self {
      store,
      schema_ready,
    }
  }

  /// Compute the reading for `m` and append it to the history.
  ///
  /// The reading is returned even when the write fails.
  pub async fn compute_and_record(&self, m: Measurements) -> BmiReading {
    let reading = m.compute();
    match self.store.append(m.to_record(&reading)).await {
      Ok(()) => tracing::debug!(bmi = reading.bmi, "recorded reading"),
      Err(e) => tracing::warn!(
        error = &e as &(dyn std::error::Error + 'static),
        "failed to record reading"
      ),
    }
    reading
  }

  /// The full history, most recent first. Empty on read failure.
  pub async fn history(&self) -> Vec<BmiRecord> {
    self.store.fetch_history_descending().await
  }

  /// `false` when schema creation failed at startup.
  pub fn schema_ready(&self) -> bool { self.schema_ready }
}
