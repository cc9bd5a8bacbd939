use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const DONE_TEXT: Color = Color::Rgb(0x73, 0x73, 0x73);
pub const SELECTION_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
