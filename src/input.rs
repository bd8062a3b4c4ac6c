use ratatui::crossterm::event::{self, KeyCode, KeyModifiers};

use crate::app::{App, AppMode, PickerDim};
use crate::filter::Section;

// --- Helpers ---

/// Convert a char index to a byte offset within the string.
pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
  s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

// --- Event Handling ---

pub fn handle_key_event(app: &mut App, key: event::KeyEvent) {
  if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
    app.should_quit = true;
    return;
  }

  match app.mode {
    AppMode::Browse => handle_browse_key(app, key),
    AppMode::Search => handle_search_key(app, key),
    AppMode::Picker(dim) => handle_picker_key(app, key, dim),
    AppMode::Player => handle_player_key(app, key),
  }
}

fn handle_browse_key(app: &mut App, key: event::KeyEvent) {
  app.clear_error();
  match key.code {
    KeyCode::Enter => {
      app.play_selected();
    }
    KeyCode::Down | KeyCode::Char('j') => {
      app.move_selection(1);
    }
    KeyCode::Up | KeyCode::Char('k') => {
      app.move_selection(-1);
    }
    KeyCode::Char('/') => {
      app.mode = AppMode::Search;
    }
    KeyCode::Char(c @ '1'..='6') => {
      let idx = c as usize - '1' as usize;
      app.select_section(Section::ALL[idx]);
    }
    KeyCode::Char('c') => {
      app.open_picker(PickerDim::Category);
    }
    KeyCode::Char('y') => {
      app.open_picker(PickerDim::Country);
    }
    KeyCode::Char('l') => {
      app.open_picker(PickerDim::Language);
    }
    KeyCode::Char('m') => {
      app.load_more();
    }
    KeyCode::Char('r') => {
      app.trigger_init();
    }
    KeyCode::Char('t') => {
      app.next_theme();
    }
    KeyCode::Char('q') => {
      app.should_quit = true;
    }
    _ => {}
  }
}

fn handle_search_key(app: &mut App, key: event::KeyEvent) {
  app.clear_error();
  match key.code {
    KeyCode::Enter => {
      app.flush_search();
      app.mode = AppMode::Browse;
    }
    KeyCode::Char(c) => {
      let byte_idx = char_to_byte_index(&app.search_input, app.search_cursor);
      app.search_input.insert(byte_idx, c);
      app.search_cursor += 1;
      app.schedule_search();
    }
    KeyCode::Backspace => {
      if app.search_cursor > 0 {
        app.search_cursor -= 1;
        let byte_idx = char_to_byte_index(&app.search_input, app.search_cursor);
        app.search_input.remove(byte_idx);
        app.schedule_search();
      }
    }
    KeyCode::Delete => {
      if app.search_cursor < app.search_input.chars().count() {
        let byte_idx = char_to_byte_index(&app.search_input, app.search_cursor);
        app.search_input.remove(byte_idx);
        app.schedule_search();
      }
    }
    KeyCode::Left => {
      app.search_cursor = app.search_cursor.saturating_sub(1);
    }
    KeyCode::Right => {
      if app.search_cursor < app.search_input.chars().count() {
        app.search_cursor += 1;
      }
    }
    KeyCode::Home => {
      app.search_cursor = 0;
    }
    KeyCode::End => {
      app.search_cursor = app.search_input.chars().count();
    }
    KeyCode::Esc => {
      if !app.search_input.is_empty() {
        app.search_input.clear();
        app.search_cursor = 0;
        app.input_scroll = 0;
        app.flush_search();
      }
      app.mode = AppMode::Browse;
    }
    _ => {}
  }
}

fn handle_picker_key(app: &mut App, key: event::KeyEvent, dim: PickerDim) {
  // Entry 0 is "Any", so the list has options + 1 rows.
  let count = app.picker_options(dim).len() + 1;
  match key.code {
    KeyCode::Down | KeyCode::Char('j') => {
      let i = app.picker_state.selected().map_or(0, |i| (i + 1) % count);
      app.picker_state.select(Some(i));
    }
    KeyCode::Up | KeyCode::Char('k') => {
      let i = app.picker_state.selected().map_or(0, |i| if i == 0 { count - 1 } else { i - 1 });
      app.picker_state.select(Some(i));
    }
    KeyCode::Enter => {
      app.apply_picker_choice(dim);
    }
    KeyCode::Esc => {
      app.mode = AppMode::Browse;
    }
    _ => {}
  }
}

fn handle_player_key(app: &mut App, key: event::KeyEvent) {
  match key.code {
    KeyCode::Char('f') => {
      app.player.toggle_fullscreen();
    }
    KeyCode::Esc | KeyCode::Char('q') => {
      app.close_player();
    }
    _ => {}
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // --- char_to_byte_index ---

  #[test]
  fn char_to_byte_ascii() {
    assert_eq!(char_to_byte_index("hello", 0), 0);
    assert_eq!(char_to_byte_index("hello", 3), 3);
    assert_eq!(char_to_byte_index("hello", 5), 5); // past end
  }

  #[test]
  fn char_to_byte_multibyte() {
    let s = "aé日"; // a=1 byte, é=2 bytes, 日=3 bytes
    assert_eq!(char_to_byte_index(s, 0), 0);
    assert_eq!(char_to_byte_index(s, 1), 1);
    assert_eq!(char_to_byte_index(s, 2), 3);
    assert_eq!(char_to_byte_index(s, 3), 6); // past end
  }

  #[test]
  fn char_to_byte_empty() {
    assert_eq!(char_to_byte_index("", 0), 0);
    assert_eq!(char_to_byte_index("", 5), 0);
  }
}
