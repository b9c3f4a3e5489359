//! History pane — one line per stored computation.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem},
};

use crate::app::App;

/// Render the history into `area`. Nothing is drawn while it is empty.
pub fn draw<S>(f: &mut Frame, area: Rect, app: &App<S>) {
  if app.history.is_empty() {
    return;
  }

  let block = Block::default()
    .title(Span::styled(
      " BMI History ",
      Style::default().add_modifier(Modifier::BOLD),
    ))
    .borders(Borders::TOP)
    .border_style(Style::default().fg(Color::DarkGray));

  let items: Vec<ListItem> = app
    .history
    .iter()
    .map(|rec| ListItem::new(Line::from(rec.to_string())))
    .collect();

  f.render_widget(List::new(items).block(block), area);
}
