//! Application constants loaded from `constants.ron` at compile time.
//!
//! The RON file is embedded via `include_str!`, so no runtime file I/O.
//! Parsed once on first access via `LazyLock`.

use serde::Deserialize;
use std::sync::LazyLock;

/// All tuneable application constants.
#[derive(Debug, Deserialize)]
pub struct Constants {
  // Catalog backend
  pub default_api_base: String,
  pub channels_path: String,
  pub categories_path: String,
  pub countries_path: String,
  pub languages_path: String,

  // Grid
  pub page_size: usize,
  pub search_debounce_ms: u64,

  // Playback engine
  pub back_buffer_secs: u32,
  pub low_latency: bool,
  pub worker_decoding: bool,
  pub max_network_retries: u32,
  pub max_media_recoveries: u32,

  // Logos
  pub logo_width: u32,
  pub logo_height: u32,

  // User-facing messages
  pub msg_engine_unsupported: String,
  pub msg_playback_failed: String,
  pub msg_init_failed: String,
  pub msg_no_results: String,
}

static CONSTANTS: LazyLock<Constants> = LazyLock::new(|| {
  ron::from_str(include_str!("../constants.ron")).expect("constants.ron must be valid RON (embedded at compile time)")
});

/// Returns a reference to the parsed application constants.
pub fn constants() -> &'static Constants {
  &CONSTANTS
}
