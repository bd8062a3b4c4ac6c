use anyhow::{Context, Result};
use image::DynamicImage;
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tracing::{error, info, warn};

use crate::api::Api;
use crate::channel::{CatalogStats, Channel};
use crate::config::Config;
use crate::constants::constants;
use crate::debounce::Debouncer;
use crate::filter::{self, FilterState, Section};
use crate::logo::fetch_logo;
use crate::page::Pager;
use crate::player::Player;
use crate::theme::{THEMES, Theme};

// --- Types ---

/// Everything the init sequence brings back: the catalog plus the three
/// independently fetched picker option lists.
#[derive(Debug)]
pub struct InitData {
  pub channels: Vec<Channel>,
  pub categories: Vec<String>,
  pub countries: Vec<String>,
  pub languages: Vec<String>,
}

/// Which structured filter a picker overlay is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerDim {
  Category,
  Country,
  Language,
}

impl PickerDim {
  pub fn label(self) -> &'static str {
    match self {
      PickerDim::Category => "Category",
      PickerDim::Country => "Country",
      PickerDim::Language => "Language",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
  Browse,
  Search,
  Picker(PickerDim),
  Player,
}

/// In-flight async task receivers.
#[derive(Default)]
pub(crate) struct AsyncTasks {
  pub(crate) init_rx: Option<oneshot::Receiver<Result<InitData>>>,
  pub(crate) logo_rx: Option<oneshot::Receiver<DynamicImage>>,
}

// --- App state ---

pub struct App {
  pub api: Api,
  pub mode: AppMode,
  pub theme_index: usize,

  // Catalog and the view derived from it
  pub channels: Vec<Channel>,
  /// Indices into `channels`; recomputed from the full catalog on every
  /// filter change, never filtered incrementally.
  pub filtered: Vec<usize>,
  pub filter: FilterState,
  pub pager: Pager,
  pub section_title: String,
  pub stats: CatalogStats,

  // Picker option lists (populated at init, possibly empty on partial failure)
  pub categories: Vec<String>,
  pub countries: Vec<String>,
  pub languages: Vec<String>,
  pub picker_state: ListState,

  // Search box
  pub search_input: String,
  pub search_cursor: usize,
  pub input_scroll: usize,
  pub debounce: Debouncer<String>,

  /// Grid selection: index into the visible slice.
  pub selected: usize,

  pub player: Player,
  /// Logo for the channel in the player pane, resolved via fallback chain.
  pub logo: Option<DynamicImage>,

  // Messages
  pub init_error: Option<String>,
  pub status_message: Option<String>,
  pub last_error: Option<String>,
  /// When the last error was set, for auto-dismiss after 5 seconds.
  error_time: Option<Instant>,
  pub loading: bool,
  pub should_quit: bool,

  pub(crate) tasks: AsyncTasks,
}

impl App {
  pub fn new(api: Api) -> Self {
    let config = Config::load();
    let theme_index =
      config.theme_name.as_deref().and_then(|name| THEMES.iter().position(|t| t.name == name)).unwrap_or(0);

    Self {
      api,
      mode: AppMode::Browse,
      theme_index,
      channels: Vec::new(),
      filtered: Vec::new(),
      filter: FilterState::default(),
      pager: Pager::new(constants().page_size),
      section_title: filter::title(&FilterState::default()),
      stats: CatalogStats::default(),
      categories: Vec::new(),
      countries: Vec::new(),
      languages: Vec::new(),
      picker_state: ListState::default(),
      search_input: String::new(),
      search_cursor: 0,
      input_scroll: 0,
      debounce: Debouncer::new(Duration::from_millis(constants().search_debounce_ms)),
      selected: 0,
      player: Player::new(),
      logo: None,
      init_error: None,
      status_message: None,
      last_error: None,
      error_time: None,
      loading: false,
      should_quit: false,
      tasks: AsyncTasks::default(),
    }
  }

  pub fn theme(&self) -> &'static Theme {
    &THEMES[self.theme_index % THEMES.len()]
  }

  pub fn next_theme(&mut self) {
    self.theme_index = (self.theme_index + 1) % THEMES.len();
    self.save_config();
  }

  fn save_config(&self) {
    let config = Config { api_base: Some(self.api.base().to_string()), theme_name: Some(self.theme().name.to_string()) };
    config.save();
  }

  // --- Messages ---

  /// Set an error message with auto-dismiss tracking.
  pub fn set_error(&mut self, msg: String) {
    self.last_error = Some(msg);
    self.error_time = Some(Instant::now());
  }

  pub fn clear_error(&mut self) {
    self.last_error = None;
    self.error_time = None;
  }

  /// Clear stale error messages after 5 seconds.
  pub fn expire_error(&mut self) {
    if let Some(t) = self.error_time
      && t.elapsed() >= Duration::from_secs(5)
    {
      self.clear_error();
    }
  }

  // --- Initialization ---

  /// Kick off the init sequence; also serves as the full-catalog reload.
  pub fn trigger_init(&mut self) {
    self.loading = true;
    self.status_message = Some("Loading channels…".to_string());
    let api = self.api.clone();
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
      let _ = tx.send(load_initial(api).await);
    });
    self.tasks.init_rx = Some(rx);
  }

  /// Drain finished background work. Called once per UI tick.
  pub fn check_pending(&mut self) {
    if let Some(mut rx) = self.tasks.init_rx.take() {
      match rx.try_recv() {
        Ok(result) => {
          self.loading = false;
          self.status_message = None;
          match result {
            Ok(data) => self.finish_init(data),
            Err(e) => {
              error!(err = %format!("{:#}", e), "init: catalog load failed");
              if self.channels.is_empty() {
                self.init_error = Some(constants().msg_init_failed.clone());
              } else {
                // A failed reload keeps the catalog we already have.
                self.set_error("Reload failed; showing the previous catalog.".to_string());
              }
            }
          }
        }
        Err(oneshot::error::TryRecvError::Empty) => {
          self.tasks.init_rx = Some(rx);
        }
        Err(oneshot::error::TryRecvError::Closed) => {
          self.loading = false;
          self.status_message = None;
          self.init_error = Some(constants().msg_init_failed.clone());
        }
      }
    }

    if let Some(mut rx) = self.tasks.logo_rx.take() {
      match rx.try_recv() {
        Ok(logo) => self.logo = Some(logo),
        Err(oneshot::error::TryRecvError::Empty) => self.tasks.logo_rx = Some(rx),
        Err(oneshot::error::TryRecvError::Closed) => {}
      }
    }
  }

  /// Install a freshly loaded catalog: full replace, filters back to their
  /// defaults, stats recomputed.
  fn finish_init(&mut self, data: InitData) {
    info!(
      channels = data.channels.len(),
      categories = data.categories.len(),
      countries = data.countries.len(),
      languages = data.languages.len(),
      "init: catalog loaded"
    );
    self.init_error = None;
    self.channels = data.channels;
    self.categories = data.categories;
    self.countries = data.countries;
    self.languages = data.languages;
    self.stats = CatalogStats::compute(&self.channels);
    self.filter = FilterState::default();
    self.search_input.clear();
    self.search_cursor = 0;
    self.input_scroll = 0;
    self.debounce.cancel();
    self.after_filter_change();
  }

  /// Per-tick housekeeping: fire the debounced search, expire stale errors,
  /// drop the player pane if the session closed itself (stream ended).
  pub fn tick(&mut self) {
    if let Some(term) = self.debounce.poll() {
      self.apply_search(term);
    }
    if self.mode == AppMode::Player && !self.player.is_active() {
      self.close_player();
    }
    self.expire_error();
  }

  // --- Filter transitions ---

  /// Section navigation: explicit filter reset, then scope to the section.
  pub fn select_section(&mut self, section: Section) {
    self.filter.reset_filters();
    self.search_input.clear();
    self.search_cursor = 0;
    self.input_scroll = 0;
    self.debounce.cancel();
    self.filter.section = section;
    self.after_filter_change();
  }

  /// Apply a search term. Search and structured selections are mutually
  /// exclusive interaction modes, so selections are cleared here.
  pub fn apply_search(&mut self, term: String) {
    self.filter.reset_selections();
    self.filter.search = term.trim().to_string();
    self.after_filter_change();
  }

  /// Debounce the current search box contents; called on every keystroke.
  pub fn schedule_search(&mut self) {
    self.debounce.schedule(self.search_input.clone());
  }

  /// Apply the search box contents immediately, skipping the quiet period.
  pub fn flush_search(&mut self) {
    self.debounce.cancel();
    self.apply_search(self.search_input.clone());
  }

  /// Apply one structured selection (empty value = "Any"). Clears any active
  /// search for the same mutual-exclusion reason as `apply_search`.
  pub fn set_selection(&mut self, dim: PickerDim, value: String) {
    self.filter.search.clear();
    self.search_input.clear();
    self.search_cursor = 0;
    self.input_scroll = 0;
    self.debounce.cancel();
    match dim {
      PickerDim::Category => self.filter.category = value,
      PickerDim::Country => self.filter.country = value,
      PickerDim::Language => self.filter.language = value,
    }
    self.after_filter_change();
  }

  /// Every filter/search/section change funnels through here: recompute the
  /// filtered view from the full catalog and reset pagination to page 1.
  fn after_filter_change(&mut self) {
    self.filtered = filter::apply(&self.channels, &self.filter);
    self.section_title = filter::title(&self.filter);
    self.pager.reset();
    self.selected = 0;
  }

  // --- Grid view ---

  /// Indices (into `channels`) of the currently visible slice.
  pub fn visible_indices(&self) -> &[usize] {
    &self.filtered[..self.pager.visible_len(self.filtered.len())]
  }

  pub fn has_more(&self) -> bool {
    self.pager.has_more(self.filtered.len())
  }

  pub fn load_more(&mut self) {
    if self.has_more() {
      self.pager.load_more();
    }
  }

  pub fn selected_channel(&self) -> Option<&Channel> {
    self.visible_indices().get(self.selected).map(|&i| &self.channels[i])
  }

  pub fn move_selection(&mut self, delta: isize) {
    let count = self.visible_indices().len();
    if count == 0 {
      return;
    }
    let current = self.selected as isize;
    self.selected = (current + delta).rem_euclid(count as isize) as usize;
  }

  // --- Pickers ---

  pub fn picker_options(&self, dim: PickerDim) -> &[String] {
    match dim {
      PickerDim::Category => &self.categories,
      PickerDim::Country => &self.countries,
      PickerDim::Language => &self.languages,
    }
  }

  pub fn open_picker(&mut self, dim: PickerDim) {
    let current = match dim {
      PickerDim::Category => &self.filter.category,
      PickerDim::Country => &self.filter.country,
      PickerDim::Language => &self.filter.language,
    };
    // Entry 0 is "Any"; options follow.
    let position = if current.is_empty() {
      0
    } else {
      self.picker_options(dim).iter().position(|o| o == current).map_or(0, |i| i + 1)
    };
    self.picker_state.select(Some(position));
    self.mode = AppMode::Picker(dim);
  }

  /// Commit the highlighted picker entry (0 = "Any").
  pub fn apply_picker_choice(&mut self, dim: PickerDim) {
    let value = match self.picker_state.selected() {
      Some(0) | None => String::new(),
      Some(i) => self.picker_options(dim).get(i - 1).cloned().unwrap_or_default(),
    };
    self.set_selection(dim, value);
    self.mode = AppMode::Browse;
  }

  // --- Playback ---

  /// Open the player for the selected card. The channel's catalog index is
  /// the selection token; it identifies the card but playback only needs
  /// the channel record.
  pub fn play_selected(&mut self) {
    let Some(channel) = self.selected_channel().cloned() else { return };
    self.trigger_logo_fetch(&channel);
    self.player.open(channel);
    self.mode = AppMode::Player;
  }

  fn trigger_logo_fetch(&mut self, channel: &Channel) {
    self.logo = None;
    let candidates: Vec<String> = channel.logo_url().map(|u| vec![u.to_string()]).unwrap_or_default();
    let client = self.api.client().clone();
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
      let _ = tx.send(fetch_logo(&client, &candidates).await);
    });
    self.tasks.logo_rx = Some(rx);
  }

  /// Close the player pane and release the session.
  pub fn close_player(&mut self) {
    self.player.close();
    self.logo = None;
    self.tasks.logo_rx = None;
    self.mode = AppMode::Browse;
  }
}

/// Catalog first (fatal on failure), then the three option lists as
/// sequential fetches, each individually tolerant of failure.
async fn load_initial(api: Api) -> Result<InitData> {
  let channels = api.channels().await.context("catalog fetch failed")?;
  let categories = api.categories().await.unwrap_or_else(|e| {
    warn!(err = %format!("{:#}", e), "init: categories list failed, picker degrades to Any");
    Vec::new()
  });
  let countries = api.countries().await.unwrap_or_else(|e| {
    warn!(err = %format!("{:#}", e), "init: countries list failed, picker degrades to Any");
    Vec::new()
  });
  let languages = api.languages().await.unwrap_or_else(|e| {
    warn!(err = %format!("{:#}", e), "init: languages list failed, picker degrades to Any");
    Vec::new()
  });
  Ok(InitData { channels, categories, countries, languages })
}
