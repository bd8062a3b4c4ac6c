use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::channel::Channel;
use crate::constants::constants;

// --- Response envelopes ---

#[derive(Debug, Deserialize)]
struct ChannelsResponse {
  success: bool,
  #[serde(default)]
  channels: Vec<Channel>,
  #[serde(default)]
  error: Option<String>,
}

/// Shared envelope for the three filter-option endpoints; each names its
/// list field differently, hence the aliases.
#[derive(Debug, Deserialize)]
struct OptionsResponse {
  success: bool,
  #[serde(default, alias = "categories", alias = "countries", alias = "languages")]
  options: Vec<String>,
  #[serde(default)]
  error: Option<String>,
}

// --- Client ---

/// REST client for the channel catalog backend.
#[derive(Debug, Clone)]
pub struct Api {
  client: Client,
  base: String,
}

impl Api {
  pub fn new(client: Client, base: &str) -> Self {
    Self { client, base: base.trim_end_matches('/').to_string() }
  }

  pub fn base(&self) -> &str {
    &self.base
  }

  pub fn client(&self) -> &Client {
    &self.client
  }

  // Error payloads come back with non-2xx statuses but still carry a JSON
  // envelope, so parse the body regardless of status and let `success`
  // decide.
  async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    let url = format!("{}{}", self.base, path);
    let response = self.client.get(&url).send().await.with_context(|| format!("GET {} failed", url))?;
    response.json::<T>().await.with_context(|| format!("GET {} returned an unreadable body", url))
  }

  /// Fetch the full channel catalog. A `success: false` payload is an error.
  pub async fn channels(&self) -> Result<Vec<Channel>> {
    let response: ChannelsResponse = self.get_json(&constants().channels_path).await?;
    if !response.success {
      return Err(anyhow!(response.error.unwrap_or_else(|| "backend reported failure".to_string())));
    }
    Ok(response.channels)
  }

  pub async fn categories(&self) -> Result<Vec<String>> {
    self.options(&constants().categories_path).await
  }

  pub async fn countries(&self) -> Result<Vec<String>> {
    self.options(&constants().countries_path).await
  }

  pub async fn languages(&self) -> Result<Vec<String>> {
    self.options(&constants().languages_path).await
  }

  async fn options(&self, path: &str) -> Result<Vec<String>> {
    let response: OptionsResponse = self.get_json(path).await?;
    if !response.success {
      return Err(anyhow!(response.error.unwrap_or_else(|| "backend reported failure".to_string())));
    }
    // The pickers only list non-empty values.
    Ok(response.options.into_iter().filter(|option| !option.is_empty()).collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // --- envelope parsing ---

  #[test]
  fn channels_envelope_parses() {
    let body = r#"{
      "success": true,
      "channels": [{"name": "BBC One", "url": "http://example.com/bbc.m3u8", "category": "Entertainment"}],
      "total": 1
    }"#;
    let response: ChannelsResponse = serde_json::from_str(body).unwrap();
    assert!(response.success);
    assert_eq!(response.channels.len(), 1);
    assert_eq!(response.channels[0].name, "BBC One");
  }

  #[test]
  fn failure_envelope_carries_error() {
    let body = r#"{"success": false, "error": "playlist parse error"}"#;
    let response: ChannelsResponse = serde_json::from_str(body).unwrap();
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("playlist parse error"));
    assert!(response.channels.is_empty());
  }

  #[test]
  fn options_envelope_accepts_each_field_name() {
    for field in ["categories", "countries", "languages"] {
      let body = format!(r#"{{"success": true, "{}": ["General", "Sports"]}}"#, field);
      let response: OptionsResponse = serde_json::from_str(&body).unwrap();
      assert_eq!(response.options, vec!["General", "Sports"], "field {}", field);
    }
  }

  // --- base URL handling ---

  #[test]
  fn base_url_trailing_slash_is_trimmed() {
    let api = Api::new(Client::new(), "http://localhost:5000/");
    assert_eq!(api.base(), "http://localhost:5000");
  }
}
