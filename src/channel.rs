use serde::Deserialize;
use std::collections::HashSet;

/// One streamable catalog entry (live TV or radio station).
///
/// Server-supplied and read-only. The backend emits empty strings for
/// missing metadata, so optional fields are plain `String`s with accessors
/// that apply the display defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Channel {
  pub name: String,
  /// Stream endpoint handed to the playback engine.
  pub url: String,
  #[serde(default)]
  pub tvg_id: String,
  #[serde(default)]
  pub tvg_logo: String,
  #[serde(default)]
  pub category: String,
  #[serde(default)]
  pub country: String,
  #[serde(default)]
  pub language: String,
}

impl Channel {
  /// Category label for display; empty categories render as "Other".
  pub fn category_label(&self) -> &str {
    if self.category.is_empty() { "Other" } else { &self.category }
  }

  /// Logo URL, if the backend supplied one.
  pub fn logo_url(&self) -> Option<&str> {
    if self.tvg_logo.is_empty() { None } else { Some(&self.tvg_logo) }
  }
}

// --- Aggregate stats ---

/// Catalog-wide counts shown in the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
  pub total: usize,
  pub categories: usize,
  pub countries: usize,
}

impl CatalogStats {
  /// Count total channels plus distinct non-empty categories and countries.
  pub fn compute(channels: &[Channel]) -> Self {
    let categories: HashSet<&str> =
      channels.iter().map(|ch| ch.category.as_str()).filter(|s| !s.is_empty()).collect();
    let countries: HashSet<&str> =
      channels.iter().map(|ch| ch.country.as_str()).filter(|s| !s.is_empty()).collect();
    Self { total: channels.len(), categories: categories.len(), countries: countries.len() }
  }
}

/// Group digits with thousands separators: 12345 -> "12,345".
pub fn format_count(n: usize) -> String {
  let digits = n.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, c) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(c);
  }
  out
}

#[cfg(test)]
pub(crate) fn test_channel(name: &str, category: &str) -> Channel {
  Channel {
    name: name.to_string(),
    url: format!("http://example.com/{}.m3u8", name.to_lowercase().replace(' ', "-")),
    tvg_id: String::new(),
    tvg_logo: String::new(),
    category: category.to_string(),
    country: String::new(),
    language: String::new(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // --- display labels ---

  #[test]
  fn category_label_defaults_to_other() {
    let ch = test_channel("BBC One", "");
    assert_eq!(ch.category_label(), "Other");
  }

  #[test]
  fn category_label_passes_through() {
    let ch = test_channel("BBC One", "Entertainment");
    assert_eq!(ch.category_label(), "Entertainment");
  }

  #[test]
  fn logo_url_empty_is_none() {
    let mut ch = test_channel("BBC One", "Entertainment");
    assert_eq!(ch.logo_url(), None);
    ch.tvg_logo = "http://example.com/logo.png".to_string();
    assert_eq!(ch.logo_url(), Some("http://example.com/logo.png"));
  }

  // --- deserialization ---

  #[test]
  fn channel_deserializes_with_missing_optionals() {
    let ch: Channel =
      serde_json::from_str(r#"{"name":"News 24","url":"http://example.com/live.m3u8"}"#).unwrap();
    assert_eq!(ch.name, "News 24");
    assert_eq!(ch.category, "");
    assert_eq!(ch.category_label(), "Other");
    assert_eq!(ch.logo_url(), None);
  }

  #[test]
  fn channel_deserializes_full_record() {
    let ch: Channel = serde_json::from_str(
      r#"{"name":"KISS FM","url":"http://example.com/kiss.m3u8","tvg_id":"kiss.uk",
          "tvg_logo":"http://example.com/kiss.png","category":"Music","country":"UK","language":"English"}"#,
    )
    .unwrap();
    assert_eq!(ch.country, "UK");
    assert_eq!(ch.logo_url(), Some("http://example.com/kiss.png"));
  }

  // --- stats ---

  #[test]
  fn stats_count_distinct_non_empty() {
    let mut channels = vec![
      test_channel("A", "News"),
      test_channel("B", "News"),
      test_channel("C", "Sports"),
      test_channel("D", ""),
    ];
    channels[0].country = "US".to_string();
    channels[1].country = "US".to_string();
    channels[2].country = "FR".to_string();
    let stats = CatalogStats::compute(&channels);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.categories, 2);
    assert_eq!(stats.countries, 2);
  }

  #[test]
  fn stats_empty_catalog() {
    assert_eq!(CatalogStats::compute(&[]), CatalogStats::default());
  }

  // --- format_count ---

  #[test]
  fn format_count_groups_digits() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1000), "1,000");
    assert_eq!(format_count(1234567), "1,234,567");
  }
}
