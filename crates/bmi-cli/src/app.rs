//! Application state machine and event dispatcher.

use bmi_core::{
  calculator::Calculator,
  measurement::Measurements,
  record::BmiRecord,
  store::HistoryStore,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ─── Focus ────────────────────────────────────────────────────────────────────

/// Which form control receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  Weight,
  Height,
  Compute,
}

impl Focus {
  fn next(self) -> Self {
    match self {
      Self::Weight => Self::Height,
      Self::Height => Self::Compute,
      Self::Compute => Self::Weight,
    }
  }

  fn prev(self) -> Self {
    match self {
      Self::Weight => Self::Compute,
      Self::Height => Self::Weight,
      Self::Compute => Self::Height,
    }
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App<S> {
  pub focus: Focus,

  /// Raw text of the weight field (pounds).
  pub weight: String,

  /// Raw text of the height field (inches).
  pub height: String,

  /// Result line of the last successful computation.
  pub result: String,

  /// History as of the last fetch, most recent first.
  pub history: Vec<BmiRecord>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  /// Schema setup failed at startup; readings may not be kept.
  pub history_degraded: bool,

  pub calculator: Calculator<S>,
}

impl<S: HistoryStore> App<S> {
  /// Create an [`App`] with an empty form and no history loaded.
  pub fn new(calculator: Calculator<S>) -> Self {
    let history_degraded = !calculator.schema_ready();
    Self {
      focus: Focus::Weight,
      weight: String::new(),
      height: String::new(),
      result: String::new(),
      history: Vec::new(),
      status_msg: String::new(),
      history_degraded,
      calculator,
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Refetch the whole history. There is no cache.
  pub async fn refresh_history(&mut self) {
    self.history = self.calculator.history().await;
  }

  /// Parse the form, compute, record, and refresh the history.
  ///
  /// Invalid input only sets the status message; nothing is stored.
  pub async fn compute(&mut self) {
    let m = match Measurements::parse(&self.weight, &self.height) {
      Ok(m) => m,
      Err(e) => {
        self.status_msg = format!("Error: {e}");
        return;
      }
    };

    let reading = self.calculator.compute_and_record(m).await;
    self.result = reading.to_string();
    self.status_msg = String::new();
    self.refresh_history().await;
  }

  fn focused_field(&mut self) -> Option<&mut String> {
    match self.focus {
      Focus::Weight => Some(&mut self.weight),
      Focus::Height => Some(&mut self.height),
      Focus::Compute => None,
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
      match key.code {
        KeyCode::Char('c') => return false,
        KeyCode::Char('r') => self.refresh_history().await,
        _ => {}
      }
      return true;
    }

    match key.code {
      KeyCode::Esc => return false,
      KeyCode::Char('q') if self.focus == Focus::Compute => return false,

      KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
      KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),

      KeyCode::Enter => self.compute().await,

      KeyCode::Backspace => {
        if let Some(field) = self.focused_field() {
          field.pop();
        }
      }
      KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
        if let Some(field) = self.focused_field() {
          field.push(c);
        }
      }

      _ => {}
    }
    true
  }
}

#[cfg(test)]
mod tests {
  use bmi_core::store::NullStore;
  use bmi_store_sqlite::SqliteStore;

  use super::*;

  fn key(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

  async fn type_str<S: HistoryStore>(app: &mut App<S>, s: &str) {
    for c in s.chars() {
      assert!(app.handle_key(key(KeyCode::Char(c))).await);
    }
  }

  async fn sqlite_app() -> App<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    App::new(Calculator::start(store).await)
  }

  #[tokio::test]
  async fn typing_fills_focused_field_and_ignores_letters() {
    let mut app = App::new(Calculator::start(NullStore).await);
    type_str(&mut app, "15a0").await;
    app.handle_key(key(KeyCode::Tab)).await;
    type_str(&mut app, "70.5").await;

    assert_eq!(app.weight, "150");
    assert_eq!(app.height, "70.5");

    app.handle_key(key(KeyCode::Backspace)).await;
    assert_eq!(app.height, "70.");
  }

  #[tokio::test]
  async fn focus_cycles_both_ways() {
    let mut app = App::new(Calculator::start(NullStore).await);
    app.handle_key(key(KeyCode::Tab)).await;
    assert_eq!(app.focus, Focus::Height);
    app.handle_key(key(KeyCode::Down)).await;
    assert_eq!(app.focus, Focus::Compute);
    app.handle_key(key(KeyCode::Tab)).await;
    assert_eq!(app.focus, Focus::Weight);
    app.handle_key(key(KeyCode::BackTab)).await;
    assert_eq!(app.focus, Focus::Compute);
  }

  #[tokio::test]
  async fn quit_keys() {
    let mut app = App::new(Calculator::start(NullStore).await);
    assert!(!app.handle_key(key(KeyCode::Esc)).await);
    assert!(
      !app
        .handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        .await
    );
    // 'q' is only a quit key on the button.
    assert!(app.handle_key(key(KeyCode::Char('q'))).await);
    app.focus = Focus::Compute;
    assert!(!app.handle_key(key(KeyCode::Char('q'))).await);
  }

  #[tokio::test]
  async fn compute_shows_result_and_refreshes_history() {
    let mut app = sqlite_app().await;
    type_str(&mut app, "150").await;
    app.handle_key(key(KeyCode::Tab)).await;
    type_str(&mut app, "70").await;
    app.handle_key(key(KeyCode::Enter)).await;

    assert_eq!(app.result, "Body Mass Index is 21.5\n(Healthy)");
    assert!(app.status_msg.is_empty());
    assert_eq!(app.history.len(), 1);
    assert_eq!(app.history[0].weight, 150.0);

    app.height = "65".into();
    app.weight = "250".into();
    app.compute().await;
    assert_eq!(app.result, "Body Mass Index is 41.6\n(Obese)");
    assert_eq!(app.history.len(), 2);
    assert_eq!(app.history[0].weight, 250.0);
  }

  #[tokio::test]
  async fn invalid_input_stores_nothing() {
    let mut app = sqlite_app().await;
    app.weight = "150".into();
    app.height = "0".into();
    app.compute().await;

    assert!(app.result.is_empty());
    assert!(app.status_msg.starts_with("Error: height"));
    assert!(app.calculator.history().await.is_empty());
  }

  /// A store whose schema can never be created.
  struct ReadOnlyStore;

  impl HistoryStore for ReadOnlyStore {
    type Error = std::io::Error;

    async fn initialize_schema(&self) -> Result<(), std::io::Error> {
      Err(std::io::Error::other("read-only file system"))
    }

    async fn append(&self, _record: bmi_core::record::NewRecord) -> Result<(), std::io::Error> {
      Err(std::io::Error::other("read-only file system"))
    }

    async fn query_history(&self) -> Result<Vec<BmiRecord>, std::io::Error> { Ok(Vec::new()) }
  }

  #[tokio::test]
  async fn failed_schema_marks_history_degraded() {
    let app = App::new(Calculator::start(ReadOnlyStore).await);
    assert!(app.history_degraded);
    assert!(!sqlite_app().await.history_degraded);
  }

  #[tokio::test]
  async fn degraded_history_still_computes() {
    let mut app = App::new(Calculator::start(ReadOnlyStore).await);
    app.weight = "150".into();
    app.height = "70".into();
    app.compute().await;
    assert_eq!(app.result, "Body Mass Index is 21.5\n(Healthy)");
    assert!(app.history.is_empty());
  }

  #[tokio::test]
  async fn ctrl_r_refetches_history() {
    let mut app = sqlite_app().await;
    app.weight = "150".into();
    app.height = "70".into();
    app.compute().await;
    app.history.clear();

    app
      .handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL))
      .await;
    assert_eq!(app.history.len(), 1);
  }
}
