//! TUI rendering — orchestrates all panes.

pub mod form;
pub mod history;

use chrono::Utc;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{App, Focus};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw<S>(f: &mut Frame, app: &App<S>) {
  let area = f.area();

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1),  // header
      Constraint::Length(14), // form + result
      Constraint::Min(0),     // history
      Constraint::Length(1),  // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  form::draw(f, rows[1], app);
  history::draw(f, rows[2], app);
  draw_status(f, rows[3], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  // History dates are UTC; match them.
  let date = Utc::now().format("%Y-%m-%d UTC").to_string();

  let left = Span::styled(
    " BMI Calculator",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{date} "), Style::default().fg(Color::Gray));

  let pad = area
    .width
    .saturating_sub(left.content.len() as u16)
    .saturating_sub(right.content.len() as u16);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);

  let block = Block::default().style(Style::default().bg(Color::Rgb(0xf4, 0x51, 0x1e)));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status<S>(f: &mut Frame, area: Rect, app: &App<S>) {
  let hints = match app.focus {
    Focus::Weight | Focus::Height => "0-9 . type  Tab next  Enter compute  ^R refresh  Esc quit",
    Focus::Compute => "Enter compute  Tab next  ^R refresh  q/Esc quit",
  };

  let (status, style) = if app.status_msg.is_empty() {
    (hints.to_string(), Style::default().fg(Color::DarkGray))
  } else {
    (app.status_msg.clone(), Style::default().fg(Color::Red))
  };

  let mut spans = Vec::new();
  if app.history_degraded {
    spans.push(Span::styled(
      " history unavailable ",
      Style::default().fg(Color::Black).bg(Color::Yellow),
    ));
  }
  spans.push(Span::styled(format!(" {status}"), style));

  f.render_widget(
    Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black)),
    area,
  );
}
