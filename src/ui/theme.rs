use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x7c, 0x9e, 0xd9);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const VALUE_SET: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const VALUE_UNSET: Color = Color::Rgb(0x6b, 0x72, 0x80);
