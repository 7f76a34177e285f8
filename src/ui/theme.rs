use ratatui::style::Color;

pub const TITLE: Color = Color::Rgb(0xff, 0xd7, 0x8a);
pub const PANEL_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FOCUS_BORDER: Color = Color::Rgb(0xff, 0xd7, 0x8a);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HINT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ACTIVE_BG: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_FG: Color = Color::Rgb(0x1a, 0x1a, 0x1a);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
