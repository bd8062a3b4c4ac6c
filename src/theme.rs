use ratatui::style::Color;

/// A named UI color palette.
pub struct Theme {
  pub name: &'static str,
  pub bg: Color,
  pub fg: Color,
  pub accent: Color,
  pub muted: Color,
  pub border: Color,
  pub error: Color,
  pub status: Color,
  pub highlight_fg: Color,
  pub highlight_bg: Color,
  pub stripe_bg: Color,
  pub key_fg: Color,
  pub key_bg: Color,
}

pub const THEMES: [Theme; 3] = [
  Theme {
    name: "indigo",
    bg: Color::Rgb(0x14, 0x16, 0x20),
    fg: Color::Rgb(0xd8, 0xdc, 0xe8),
    accent: Color::Rgb(0x66, 0x7e, 0xea),
    muted: Color::Rgb(0x6b, 0x72, 0x85),
    border: Color::Rgb(0x2c, 0x31, 0x42),
    error: Color::Rgb(0xe7, 0x4c, 0x3c),
    status: Color::Rgb(0x8a, 0x9c, 0xf0),
    highlight_fg: Color::Rgb(0xff, 0xff, 0xff),
    highlight_bg: Color::Rgb(0x3c, 0x47, 0x7a),
    stripe_bg: Color::Rgb(0x19, 0x1c, 0x28),
    key_fg: Color::Rgb(0x14, 0x16, 0x20),
    key_bg: Color::Rgb(0x66, 0x7e, 0xea),
  },
  Theme {
    name: "paper",
    bg: Color::Rgb(0xf4, 0xf1, 0xea),
    fg: Color::Rgb(0x2e, 0x2a, 0x24),
    accent: Color::Rgb(0xb0, 0x4a, 0x2f),
    muted: Color::Rgb(0x8a, 0x84, 0x78),
    border: Color::Rgb(0xd6, 0xd0, 0xc4),
    error: Color::Rgb(0xc0, 0x2d, 0x2d),
    status: Color::Rgb(0x4a, 0x6a, 0x42),
    highlight_fg: Color::Rgb(0xf4, 0xf1, 0xea),
    highlight_bg: Color::Rgb(0xb0, 0x4a, 0x2f),
    stripe_bg: Color::Rgb(0xec, 0xe8, 0xdf),
    key_fg: Color::Rgb(0xf4, 0xf1, 0xea),
    key_bg: Color::Rgb(0x2e, 0x2a, 0x24),
  },
  Theme {
    name: "phosphor",
    bg: Color::Rgb(0x0a, 0x10, 0x0a),
    fg: Color::Rgb(0x7d, 0xd8, 0x7d),
    accent: Color::Rgb(0xb8, 0xff, 0xb8),
    muted: Color::Rgb(0x3f, 0x6e, 0x3f),
    border: Color::Rgb(0x24, 0x40, 0x24),
    error: Color::Rgb(0xff, 0x7a, 0x5c),
    status: Color::Rgb(0x9d, 0xe8, 0x9d),
    highlight_fg: Color::Rgb(0x0a, 0x10, 0x0a),
    highlight_bg: Color::Rgb(0x7d, 0xd8, 0x7d),
    stripe_bg: Color::Rgb(0x0e, 0x17, 0x0e),
    key_fg: Color::Rgb(0x0a, 0x10, 0x0a),
    key_bg: Color::Rgb(0x7d, 0xd8, 0x7d),
  },
];
