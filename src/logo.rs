use anyhow::{Context, Result, bail};
use image::{DynamicImage, Rgb, RgbImage, imageops::FilterType};
use ratatui::{
  buffer::Buffer,
  layout::Rect,
  style::{Color, Style},
  widgets::Widget,
};
use reqwest::Client;
use tracing::debug;

use crate::constants::constants;

// --- Fallback chain ---

/// Fetch a channel logo, walking the fallback chain: every candidate URL in
/// order, then the locally generated placeholder. Never fails and never
/// surfaces an error to the user; failed candidates are logged.
pub async fn fetch_logo(client: &Client, candidates: &[String]) -> DynamicImage {
  for url in candidates {
    match fetch_one(client, url).await {
      Ok(image) => return image,
      Err(e) => debug!(url = %url, err = %e, "logo: candidate failed"),
    }
  }
  placeholder_logo()
}

async fn fetch_one(client: &Client, url: &str) -> Result<DynamicImage> {
  let response = client.get(url).send().await.with_context(|| format!("logo fetch failed: {}", url))?;
  if !response.status().is_success() {
    bail!("logo fetch returned {}", response.status());
  }
  let bytes = response.bytes().await.context("failed to read logo bytes")?;
  image::load_from_memory(&bytes).context("failed to decode logo image")
}

/// Flat indigo card with a lighter inner panel, used when no logo could be
/// fetched or the channel has none.
pub fn placeholder_logo() -> DynamicImage {
  let (width, height) = (constants().logo_width, constants().logo_height);
  let outer = Rgb([0x66, 0x7e, 0xea]);
  let inner = Rgb([0x8a, 0x9c, 0xf0]);
  let margin_x = width / 8;
  let margin_y = height / 8;
  let image = RgbImage::from_fn(width, height, |x, y| {
    let inside =
      x >= margin_x && x < width - margin_x && y >= margin_y && y < height - margin_y;
    if inside { inner } else { outer }
  });
  DynamicImage::ImageRgb8(image)
}

// --- Terminal rendering ---

/// Renders an image into a terminal area with half-block cells: each cell
/// carries two vertical pixels ("▀" foreground over background).
pub struct LogoWidget<'a> {
  pub image: &'a DynamicImage,
}

impl Widget for LogoWidget<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
      return;
    }
    let target_w = area.width as u32;
    let target_h = area.height as u32 * 2;
    // resize_exact guarantees the buffer dimensions below.
    let rgb = self.image.resize_exact(target_w, target_h, FilterType::Triangle).into_rgb8();
    for row in 0..area.height {
      for col in 0..area.width {
        let top = rgb.get_pixel(col as u32, row as u32 * 2);
        let bottom = rgb.get_pixel(col as u32, row as u32 * 2 + 1);
        buf.set_string(
          area.x + col,
          area.y + row,
          "▀",
          Style::default().fg(Color::Rgb(top[0], top[1], top[2])).bg(Color::Rgb(bottom[0], bottom[1], bottom[2])),
        );
      }
    }
  }
}
