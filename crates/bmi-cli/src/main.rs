//! `bmi` — terminal BMI calculator with a local history.
//!
//! # Usage
//!
//! ```
//! bmi
//! bmi --database ~/.local/share/bmi/bmiDB.db
//! bmi --config ~/.config/bmi/config.toml --no-history
//! ```

mod app;
mod config;
mod ui;

use std::{fs::OpenOptions, io, path::PathBuf, sync::Mutex, time::Duration};

use anyhow::{Context, Result};
use app::App;
use bmi_core::{
  calculator::Calculator,
  store::{HistoryStore, NullStore},
};
use bmi_store_sqlite::SqliteStore;
use clap::Parser;
use config::{ConfigFile, Settings};
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "bmi", version, about = "Terminal BMI calculator with history")]
struct Args {
  /// Path to a TOML config file (database, history, log_file).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// SQLite file holding the history (default: bmiDB.db).
  #[arg(short, long, value_name = "PATH")]
  database: Option<PathBuf>,

  /// Run without recording or showing history.
  #[arg(long)]
  no_history: bool,

  /// Where to write diagnostics; the terminal is taken by the UI.
  #[arg(long, value_name = "PATH")]
  log_file: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let file_cfg = match &args.config {
    Some(path) => ConfigFile::load(path)?,
    None => ConfigFile::default(),
  };
  let settings = Settings::resolve(file_cfg, args.database, args.no_history, args.log_file);

  init_tracing(&settings)?;
  tracing::info!(?settings, "starting");

  // The backend is chosen once; everything downstream is generic over it.
  if settings.history {
    match SqliteStore::open(&settings.database).await {
      Ok(store) => return run(Calculator::start(store).await).await,
      Err(e) => tracing::warn!(
        error = &e as &(dyn std::error::Error + 'static),
        "history unavailable, continuing without it"
      ),
    }
  }
  run(Calculator::start(NullStore).await).await
}

fn init_tracing(settings: &Settings) -> Result<()> {
  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(&settings.log_file)
    .with_context(|| format!("opening log file {}", settings.log_file.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_ansi(false)
    .with_writer(Mutex::new(file))
    .init();
  Ok(())
}

async fn run<S: HistoryStore>(calculator: Calculator<S>) -> Result<()> {
  let mut app = App::new(calculator);
  app.refresh_history().await;

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app).await;

  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

// ─── Event loop ───────────────────────────────────────────────────────────────

async fn run_event_loop<S: HistoryStore>(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App<S>,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    // Each key is handled to completion, store round-trips included, before
    // the next one is read.
    if let Some(Event::Key(key)) = maybe_event
      && key.kind == KeyEventKind::Press
      && !app.handle_key(key).await
    {
      break;
    }
  }

  Ok(())
}
