use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Layout, Rect},
  style::{Modifier, Style, Stylize},
  text::{Line, Span},
  widgets::{Block, Clear, List, ListItem, ListState, Padding, Paragraph},
};

use crate::app::{App, AppMode, PickerDim};
use crate::channel::{Channel, format_count};
use crate::constants::constants;
use crate::filter::Section;
use crate::logo::LogoWidget;
use crate::player::PlayerState;
use crate::theme::Theme;

// --- Helpers ---

/// Compute the display width of the first `n` chars (accounting for double-width CJK).
pub fn display_width(s: &str, n: usize) -> usize {
  use unicode_width::UnicodeWidthChar;
  s.chars().take(n).map(|c| c.width().unwrap_or(0)).sum()
}

/// Truncate a string to `max_width` characters, appending "…" if truncated.
fn truncate_str(s: &str, max_width: usize) -> String {
  if s.chars().count() <= max_width {
    s.to_string()
  } else {
    let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    format!("{}…", truncated)
  }
}

/// Centered sub-rect with the given width/height, clamped to `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect { x: area.x + (area.width - width) / 2, y: area.y + (area.height - height) / 2, width, height }
}

/// Second card line: "category • country • language", empty parts dropped.
fn card_meta(channel: &Channel) -> String {
  let mut parts = vec![channel.category_label()];
  if !channel.country.is_empty() {
    parts.push(&channel.country);
  }
  if !channel.language.is_empty() {
    parts.push(&channel.language);
  }
  parts.join(" • ")
}

fn stats_line(app: &App) -> String {
  format!(
    "{} channels · {} categories · {} countries",
    format_count(app.stats.total),
    format_count(app.stats.categories),
    format_count(app.stats.countries)
  )
}

// --- UI Rendering ---

pub fn ui(frame: &mut Frame, app: &mut App) {
  let theme = app.theme();

  frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), frame.area());

  let [header_area, tabs_area, title_area, main_area, status_area, input_area, footer_area] = Layout::vertical([
    Constraint::Length(1),
    Constraint::Length(1),
    Constraint::Length(1),
    Constraint::Min(3),
    Constraint::Length(1),
    Constraint::Length(3),
    Constraint::Length(1),
  ])
  .areas(frame.area());

  render_header(frame, theme, header_area);
  render_tabs(frame, app, tabs_area);
  render_title(frame, app, title_area);
  render_main(frame, app, main_area);
  render_status(frame, app, status_area);
  render_input(frame, app, input_area);
  render_footer(frame, app, footer_area);

  match app.mode {
    AppMode::Picker(dim) => render_picker(frame, app, main_area, dim),
    AppMode::Player => render_player(frame, app, main_area),
    _ => {}
  }
}

fn render_header(frame: &mut Frame, theme: &Theme, area: Rect) {
  let left = Line::from(Span::styled(" ▶ telly ", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)));
  frame.render_widget(left, area);

  let version = format!("v{} ", env!("CARGO_PKG_VERSION"));
  let right = Line::from(Span::styled(&version, Style::default().fg(theme.muted)));
  let right_area =
    Rect { x: area.x + area.width.saturating_sub(version.len() as u16), width: version.len() as u16, ..area };
  frame.render_widget(right, right_area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let mut spans = vec![Span::raw(" ")];
  for (i, section) in Section::ALL.iter().enumerate() {
    let active = app.filter.section == *section;
    let style = if active {
      Style::default().fg(theme.key_fg).bg(theme.key_bg).add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(theme.muted)
    };
    spans.push(Span::styled(format!(" {} {} ", i + 1, section.label()), style));
    spans.push(Span::raw(" "));
  }
  frame.render_widget(Line::from(spans), area);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let left = Line::from(Span::styled(
    format!(" {}", app.section_title),
    Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
  ));
  frame.render_widget(left, area);

  let stats = format!("{} ", stats_line(app));
  let right = Line::from(Span::styled(&stats, Style::default().fg(theme.muted)));
  let right_area =
    Rect { x: area.x + area.width.saturating_sub(stats.len() as u16), width: stats.len() as u16, ..area };
  frame.render_widget(right, right_area);
}

fn render_main(frame: &mut Frame, app: &mut App, area: Rect) {
  if let Some(msg) = app.init_error.clone() {
    render_banner(frame, app.theme(), area, &msg, true);
  } else if app.loading && app.channels.is_empty() {
    render_banner(frame, app.theme(), area, "Loading channels…", false);
  } else if app.visible_indices().is_empty() {
    render_banner(frame, app.theme(), area, &constants().msg_no_results, false);
  } else {
    render_grid(frame, app, area);
  }
}

fn render_banner(frame: &mut Frame, theme: &Theme, area: Rect, message: &str, is_error: bool) {
  let style = if is_error { Style::default().fg(theme.error) } else { Style::default().fg(theme.muted) };
  let text = vec![Line::from(""), Line::from(Span::styled(message.to_string(), style))];
  let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
    Block::bordered()
      .border_type(ratatui::widgets::BorderType::Rounded)
      .border_style(Style::default().fg(theme.border)),
  );
  frame.render_widget(paragraph, area);
}

fn render_grid(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();

  // Inner width: area minus 2 borders minus 2 chars for highlight symbol ("▶ ")
  let inner_w = area.width.saturating_sub(4) as usize;

  let mut items: Vec<ListItem> = app
    .visible_indices()
    .iter()
    .enumerate()
    .map(|(i, &idx)| {
      let channel = &app.channels[idx];
      let is_selected = i == app.selected;
      let fg = if is_selected { theme.highlight_fg } else { theme.fg };
      let bg = if is_selected {
        theme.highlight_bg
      } else if i % 2 == 1 {
        theme.stripe_bg
      } else {
        theme.bg
      };
      let meta_fg = if is_selected { theme.highlight_fg } else { theme.muted };

      let name = truncate_str(&channel.name, inner_w);
      let meta = truncate_str(&card_meta(channel), inner_w);
      let lines = vec![
        Line::from(Span::styled(name, Style::default().fg(fg).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(format!("  {}", meta), Style::default().fg(meta_fg))),
      ];
      ListItem::new(lines).bg(bg)
    })
    .collect();

  if app.has_more() {
    let showing = app.visible_indices().len();
    let total = app.filtered.len();
    items.push(ListItem::new(Line::from(Span::styled(
      format!("  ↓ showing {} of {} · press m for more", format_count(showing), format_count(total)),
      Style::default().fg(theme.accent),
    ))));
  }

  let list = List::new(items)
    .block(
      Block::bordered()
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(theme.border)),
    )
    .highlight_symbol("▶ ")
    .highlight_style(Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg).add_modifier(Modifier::BOLD));

  let mut list_state = ListState::default();
  list_state.select(Some(app.selected));
  frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_picker(frame: &mut Frame, app: &mut App, area: Rect, dim: PickerDim) {
  let theme = app.theme();
  let options = app.picker_options(dim);
  let height = (options.len() as u16 + 3).clamp(5, area.height.max(5));
  let overlay = centered_rect(area, 40.min(area.width), height);

  let mut items: Vec<ListItem> =
    vec![ListItem::new(Line::from(Span::styled("Any", Style::default().fg(theme.muted))))];
  items.extend(
    options.iter().map(|option| ListItem::new(Line::from(Span::styled(option.clone(), Style::default().fg(theme.fg))))),
  );

  let list = List::new(items)
    .block(
      Block::bordered()
        .title(format!(" {} ", dim.label()))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.bg)),
    )
    .highlight_symbol("▶ ")
    .highlight_style(Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg).add_modifier(Modifier::BOLD));

  frame.render_widget(Clear, overlay);
  frame.render_stateful_widget(list, overlay, &mut app.picker_state);
}

fn render_player(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();
  let overlay = centered_rect(area, area.width.saturating_sub(8).max(30), area.height.saturating_sub(2).max(10));
  frame.render_widget(Clear, overlay);

  let block = Block::bordered()
    .title(" Now Playing ")
    .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
    .border_type(ratatui::widgets::BorderType::Rounded)
    .border_style(Style::default().fg(theme.accent))
    .padding(Padding::horizontal(1))
    .style(Style::default().bg(theme.bg));
  let inner = block.inner(overlay);
  frame.render_widget(block, overlay);

  let [logo_area, info_area] = Layout::vertical([Constraint::Min(4), Constraint::Length(4)]).areas(inner);

  if let Some(logo) = &app.logo {
    // Keep the 2:1 logo aspect; a half-block cell is roughly two square pixels.
    let mut logo_area = logo_area;
    let ideal_h = (logo_area.width / 4).max(1);
    if ideal_h < logo_area.height {
      let diff = logo_area.height - ideal_h;
      logo_area.y += diff / 2;
      logo_area.height = ideal_h;
    }
    frame.render_widget(LogoWidget { image: logo }, logo_area);
  }

  let inner_w = inner.width.saturating_sub(2) as usize;
  let mut lines = vec![Line::from("")];
  if let Some(channel) = &app.player.current {
    lines.push(Line::from(Span::styled(
      truncate_str(&channel.name, inner_w),
      Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(truncate_str(&card_meta(channel), inner_w), Style::default().fg(theme.muted))));
  }
  let state_line = match &app.player.state {
    PlayerState::Idle => Line::from(""),
    PlayerState::Loading => Line::from(Span::styled("⏳ Loading stream…", Style::default().fg(theme.status))),
    PlayerState::Playing => Line::from(Span::styled("♪ Playing", Style::default().fg(theme.status))),
    PlayerState::Fatal(msg) => {
      Line::from(Span::styled(format!("⚠  {}", truncate_str(msg, inner_w)), Style::default().fg(theme.error)))
    }
  };
  lines.push(state_line);

  frame.render_widget(Paragraph::new(lines), info_area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let (text, style) = if let Some(msg) = &app.status_message {
    (format!(" ⏳ {}", msg), Style::default().fg(theme.status))
  } else if let Some(err) = &app.last_error {
    (format!(" ⚠  {}", err), Style::default().fg(theme.error))
  } else if app.debounce.is_pending() {
    (" ⏳ Searching…".to_string(), Style::default().fg(theme.status))
  } else {
    (" Ready".to_string(), Style::default().fg(theme.muted))
  };
  frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_input(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();
  let border_color = if app.mode == AppMode::Search { theme.accent } else { theme.border };
  let input_block = Block::bordered()
    .title(" Search Channels ")
    .title_style(Style::default().fg(border_color))
    .border_type(ratatui::widgets::BorderType::Rounded)
    .border_style(Style::default().fg(border_color))
    .padding(Padding::horizontal(1));

  let inner_w = area.width.saturating_sub(4) as usize;
  let cursor_col = display_width(&app.search_input, app.search_cursor);

  if cursor_col < app.input_scroll {
    app.input_scroll = cursor_col;
  } else if cursor_col >= app.input_scroll + inner_w {
    app.input_scroll = cursor_col.saturating_sub(inner_w) + 1;
  }

  let visible: String = app
    .search_input
    .chars()
    .scan(0usize, |col, c| {
      let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
      let start = *col;
      *col += w;
      Some((start, *col, c))
    })
    .skip_while(|(_, end, _)| *end <= app.input_scroll)
    .take_while(|(start, _, _)| *start < app.input_scroll + inner_w)
    .map(|(_, _, c)| c)
    .collect();

  let paragraph = Paragraph::new(visible).style(Style::default().fg(theme.fg)).block(input_block);
  frame.render_widget(paragraph, area);

  if app.mode == AppMode::Search {
    let cursor_x = area.x + 2 + (cursor_col - app.input_scroll) as u16;
    frame.set_cursor_position((cursor_x, area.y + 1));
  }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let keys: Vec<(&str, &str)> = match app.mode {
    AppMode::Browse => vec![
      ("Enter", "Play"),
      ("j/k", "Navigate"),
      ("/", "Search"),
      ("1-6", "Sections"),
      ("c/y/l", "Filter"),
      ("m", "More"),
      ("r", "Reload"),
      ("q", "Quit"),
    ],
    AppMode::Search => vec![("Enter", "Apply"), ("Esc", "Back")],
    AppMode::Picker(_) => vec![("j/k", "Navigate"), ("Enter", "Select"), ("Esc", "Cancel")],
    AppMode::Player => vec![("f", "Fullscreen"), ("Esc", "Close")],
  };

  let spans: Vec<Span> = keys
    .iter()
    .enumerate()
    .flat_map(|(i, (key, action))| {
      let mut s = vec![
        Span::styled(format!(" {} ", key), Style::default().fg(theme.key_fg).bg(theme.key_bg)),
        Span::styled(format!(" {} ", action), Style::default().fg(theme.muted)),
      ];
      if i < keys.len() - 1 {
        s.push(Span::raw("  "));
      }
      s
    })
    .collect();

  frame.render_widget(Line::from(spans), area);

  let theme_label = format!("{} ", theme.name);
  let right = Line::from(Span::styled(&theme_label, Style::default().fg(theme.muted)));
  let right_area =
    Rect { x: area.x + area.width.saturating_sub(theme_label.len() as u16), width: theme_label.len() as u16, ..area };
  frame.render_widget(right, right_area);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::channel::test_channel;

  #[test]
  fn card_meta_drops_empty_parts() {
    let mut ch = test_channel("BBC One", "Entertainment");
    assert_eq!(card_meta(&ch), "Entertainment");
    ch.country = "UK".to_string();
    ch.language = "English".to_string();
    assert_eq!(card_meta(&ch), "Entertainment • UK • English");
  }

  #[test]
  fn card_meta_defaults_empty_category_to_other() {
    let ch = test_channel("Mystery", "");
    assert_eq!(card_meta(&ch), "Other");
  }

  #[test]
  fn truncate_appends_ellipsis() {
    assert_eq!(truncate_str("abcdef", 6), "abcdef");
    assert_eq!(truncate_str("abcdefg", 6), "abcde…");
  }

  #[test]
  fn centered_rect_is_clamped() {
    let area = Rect::new(0, 0, 20, 10);
    let r = centered_rect(area, 40, 40);
    assert_eq!((r.width, r.height), (20, 10));
    let r = centered_rect(area, 10, 4);
    assert_eq!((r.x, r.y), (5, 3));
  }
}
