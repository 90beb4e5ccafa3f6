use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xff, 0xc6, 0x00);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DIM_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PAD_LIT: Color = Color::Rgb(0xff, 0xc6, 0x00);
pub const PAD_IDLE: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const PROGRESS: Color = Color::Rgb(0xff, 0xc6, 0x00);
pub const VOLUME: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const INTERIM_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const NAV_BG: Color = Color::Rgb(0x11, 0x11, 0x11);
