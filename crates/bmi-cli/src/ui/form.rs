//! Input form, compute button and result box.

use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};

/// Render the form into `area`.
pub fn draw<S>(f: &mut Frame, area: Rect, app: &App<S>) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(3), // weight
      Constraint::Length(3), // height
      Constraint::Length(3), // button
      Constraint::Length(5), // result
    ])
    .split(area);

  draw_input(
    f,
    rows[0],
    &app.weight,
    "Weight in Pounds",
    app.focus == Focus::Weight,
  );
  draw_input(
    f,
    rows[1],
    &app.height,
    "Height in Inches",
    app.focus == Focus::Height,
  );
  draw_button(f, rows[2], app.focus == Focus::Compute);
  draw_result(f, rows[3], &app.result);
}

fn border_style(focused: bool) -> Style {
  if focused {
    Style::default().fg(Color::Yellow)
  } else {
    Style::default().fg(Color::DarkGray)
  }
}

fn draw_input(f: &mut Frame, area: Rect, value: &str, placeholder: &str, focused: bool) {
  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(border_style(focused));

  let cursor = if focused { "_" } else { "" };
  let line = if value.is_empty() {
    Line::from(vec![
      Span::raw(cursor),
      Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray)),
    ])
  } else {
    Line::from(format!("{value}{cursor}"))
  };

  f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_button(f: &mut Frame, area: Rect, focused: bool) {
  let style = if focused {
    Style::default()
      .bg(Color::Rgb(0x34, 0x49, 0x5e))
      .fg(Color::White)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default().fg(Color::White)
  };

  f.render_widget(
    Paragraph::new("Compute BMI")
      .alignment(Alignment::Center)
      .style(style)
      .block(
        Block::default()
          .borders(Borders::ALL)
          .border_style(border_style(focused)),
      ),
    area,
  );
}

fn draw_result(f: &mut Frame, area: Rect, result: &str) {
  let lines: Vec<Line> = result
    .lines()
    .map(|l| {
      Line::from(Span::styled(
        l.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
      ))
    })
    .collect();

  f.render_widget(
    Paragraph::new(lines)
      .alignment(Alignment::Center)
      .block(Block::default().borders(Borders::NONE)),
    Rect {
      y: area.y + 1,
      height: area.height.saturating_sub(1),
      ..area
    },
  );
}
