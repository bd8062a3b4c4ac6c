use crate::channel::Channel;

// --- Sections ---

/// Coarse navigation scope for the channel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
  #[default]
  All,
  LiveTv,
  Radio,
  Categories,
  Countries,
  Languages,
}

impl Section {
  pub const ALL: [Section; 6] =
    [Section::All, Section::LiveTv, Section::Radio, Section::Categories, Section::Countries, Section::Languages];

  pub fn label(self) -> &'static str {
    match self {
      Section::All => "All",
      Section::LiveTv => "Live TV",
      Section::Radio => "Radio",
      Section::Categories => "Categories",
      Section::Countries => "Countries",
      Section::Languages => "Languages",
    }
  }
}

// --- Filter state ---

/// Search term, structured selections and nav section.
///
/// Empty strings mean "ignore this dimension". Search and structured
/// selections are kept mutually exclusive by the explicit transitions in
/// `App`; the predicate below composes whatever is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
  pub search: String,
  pub category: String,
  pub country: String,
  pub language: String,
  pub section: Section,
}

impl FilterState {
  /// Clear the structured selections, leaving search and section alone.
  pub fn reset_selections(&mut self) {
    self.category.clear();
    self.country.clear();
    self.language.clear();
  }

  /// The explicit filter-reset transition: clears search and selections.
  /// Section navigation goes through here before scoping the catalog.
  pub fn reset_filters(&mut self) {
    self.search.clear();
    self.reset_selections();
  }

  /// Non-empty structured selections, in display order.
  pub fn active_selections(&self) -> Vec<&str> {
    [&self.category, &self.country, &self.language].into_iter().map(String::as_str).filter(|s| !s.is_empty()).collect()
  }
}

// --- Radio classifier ---

/// Heuristic radio/TV split on name and category text.
///
/// A channel counts as radio when its category mentions radio, music or
/// audio, or its name contains "radio", "fm" or "am" (all case-insensitive
/// substrings). Substring matching means false positives are possible
/// ("Amsterdam News" lands in radio); the nav split tolerates that.
pub fn is_radio(channel: &Channel) -> bool {
  let category = channel.category.to_lowercase();
  let name = channel.name.to_lowercase();
  ["radio", "music", "audio"].iter().any(|kw| category.contains(kw))
    || ["radio", "fm", "am"].iter().any(|kw| name.contains(kw))
}

// --- Filtering ---

/// Apply the full filter state to the catalog, returning indices into it.
/// Always derives from the complete catalog; a filtered result is never
/// filtered again.
pub fn apply(channels: &[Channel], state: &FilterState) -> Vec<usize> {
  channels.iter().enumerate().filter(|(_, ch)| matches(ch, state)).map(|(i, _)| i).collect()
}

fn matches(channel: &Channel, state: &FilterState) -> bool {
  match state.section {
    Section::LiveTv if is_radio(channel) => return false,
    Section::Radio if !is_radio(channel) => return false,
    _ => {}
  }

  if !state.search.is_empty() {
    let needle = state.search.to_lowercase();
    if !channel.name.to_lowercase().contains(&needle) && !channel.category.to_lowercase().contains(&needle) {
      return false;
    }
  }

  (state.category.is_empty() || channel.category == state.category)
    && (state.country.is_empty() || channel.country == state.country)
    && (state.language.is_empty() || channel.language == state.language)
}

/// Human-readable heading for the current filter state.
pub fn title(state: &FilterState) -> String {
  if !state.search.is_empty() {
    return format!("Search Results for \"{}\"", state.search);
  }
  let selections = state.active_selections();
  if !selections.is_empty() {
    return format!("Filtered Channels ({})", selections.join(", "));
  }
  match state.section {
    Section::All => "All Channels".to_string(),
    Section::LiveTv => "Live TV Channels".to_string(),
    Section::Radio => "Radio Channels".to_string(),
    Section::Categories => "Browse by Category".to_string(),
    Section::Countries => "Browse by Country".to_string(),
    Section::Languages => "Browse by Language".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::channel::test_channel;

  fn catalog() -> Vec<Channel> {
    let mut channels = vec![
      test_channel("World News", "General"),
      test_channel("Music Hour", "24/7 News Radio"),
      test_channel("Sports Live", "Sports"),
      test_channel("KISS FM", "Music"),
      test_channel("BBC One", "Entertainment"),
    ];
    channels[0].country = "US".to_string();
    channels[0].language = "English".to_string();
    channels[2].country = "US".to_string();
    channels[2].language = "Spanish".to_string();
    channels[4].country = "UK".to_string();
    channels[4].language = "English".to_string();
    channels
  }

  // --- is_radio ---

  #[test]
  fn is_radio_by_category() {
    assert!(is_radio(&test_channel("Top Hits", "Music")));
    assert!(is_radio(&test_channel("Talk Now", "News Radio")));
    assert!(is_radio(&test_channel("Podcasts", "Audio")));
  }

  #[test]
  fn is_radio_by_name() {
    assert!(is_radio(&test_channel("KISS FM", "Entertainment")));
    assert!(is_radio(&test_channel("Radio Uno", "General")));
  }

  #[test]
  fn is_radio_substring_false_positive() {
    // "am" matches inside "Amsterdam"; documented heuristic behavior.
    assert!(is_radio(&test_channel("Amsterdam News", "News")));
  }

  #[test]
  fn is_radio_tv_channel() {
    assert!(!is_radio(&test_channel("BBC One", "Entertainment")));
  }

  #[test]
  fn is_radio_is_pure() {
    let ch = test_channel("KISS FM", "Music");
    assert_eq!(is_radio(&ch), is_radio(&ch));
  }

  // --- apply: search ---

  #[test]
  fn search_matches_name_or_category() {
    let channels = catalog();
    let state = FilterState { search: "news".to_string(), ..Default::default() };
    let hits: Vec<&str> = apply(&channels, &state).into_iter().map(|i| channels[i].name.as_str()).collect();
    assert_eq!(hits, vec!["World News", "Music Hour"]);
  }

  #[test]
  fn empty_search_matches_all() {
    let channels = catalog();
    assert_eq!(apply(&channels, &FilterState::default()).len(), channels.len());
  }

  #[test]
  fn search_is_case_insensitive() {
    let channels = catalog();
    let state = FilterState { search: "NEWS".to_string(), ..Default::default() };
    assert_eq!(apply(&channels, &state).len(), 2);
  }

  // --- apply: sections ---

  #[test]
  fn radio_section_keeps_only_radio() {
    let channels = vec![test_channel("KISS FM", "Music"), test_channel("BBC One", "Entertainment")];
    let state = FilterState { section: Section::Radio, ..Default::default() };
    let hits = apply(&channels, &state);
    assert_eq!(hits, vec![0]);
  }

  #[test]
  fn live_tv_section_excludes_radio() {
    let channels = catalog();
    let state = FilterState { section: Section::LiveTv, ..Default::default() };
    for i in apply(&channels, &state) {
      assert!(!is_radio(&channels[i]));
    }
  }

  #[test]
  fn browse_sections_show_everything() {
    let channels = catalog();
    for section in [Section::Categories, Section::Countries, Section::Languages] {
      let state = FilterState { section, ..Default::default() };
      assert_eq!(apply(&channels, &state).len(), channels.len());
    }
  }

  // --- apply: structured selections ---

  #[test]
  fn selections_are_exact_match_and_conjoined() {
    let channels = catalog();
    let state = FilterState { country: "US".to_string(), language: "English".to_string(), ..Default::default() };
    let hits: Vec<&str> = apply(&channels, &state).into_iter().map(|i| channels[i].name.as_str()).collect();
    assert_eq!(hits, vec!["World News"]);
  }

  #[test]
  fn empty_selection_ignores_dimension() {
    let channels = catalog();
    let state = FilterState { country: "US".to_string(), ..Default::default() };
    assert_eq!(apply(&channels, &state).len(), 2);
  }

  #[test]
  fn filtered_is_subset_satisfying_predicates() {
    let channels = catalog();
    let state = FilterState { search: "s".to_string(), section: Section::LiveTv, ..Default::default() };
    for i in apply(&channels, &state) {
      let ch = &channels[i];
      assert!(i < channels.len());
      assert!(!is_radio(ch));
      assert!(ch.name.to_lowercase().contains('s') || ch.category.to_lowercase().contains('s'));
    }
  }

  // --- reset transitions ---

  #[test]
  fn reset_filters_clears_search_and_selections() {
    let mut state = FilterState {
      search: "news".to_string(),
      category: "Sports".to_string(),
      country: "US".to_string(),
      language: "English".to_string(),
      section: Section::Radio,
    };
    state.reset_filters();
    assert_eq!(state.search, "");
    assert!(state.active_selections().is_empty());
    // Section is navigation, not a filter selection.
    assert_eq!(state.section, Section::Radio);
  }

  #[test]
  fn reset_selections_keeps_search() {
    let mut state =
      FilterState { search: "news".to_string(), category: "Sports".to_string(), ..Default::default() };
    state.reset_selections();
    assert_eq!(state.search, "news");
    assert!(state.active_selections().is_empty());
  }

  // --- titles ---

  #[test]
  fn titles_follow_filter_state() {
    assert_eq!(title(&FilterState::default()), "All Channels");
    assert_eq!(title(&FilterState { section: Section::Radio, ..Default::default() }), "Radio Channels");
    assert_eq!(title(&FilterState { section: Section::Categories, ..Default::default() }), "Browse by Category");
    assert_eq!(
      title(&FilterState { search: "news".to_string(), ..Default::default() }),
      "Search Results for \"news\""
    );
    assert_eq!(
      title(&FilterState { category: "Sports".to_string(), country: "US".to_string(), ..Default::default() }),
      "Filtered Channels (Sports, US)"
    );
  }
}
