use crossterm::style::Color;

pub const WINDOW_TITLE: &str = "MranDvX — Francisco Mancuello";

// Palette, lifted from the page design: light canvas, white cards with a
// thin border, near-black ink, green for money, dark cards for aggregates.
pub const PAGE_BG: Color = Color::Rgb { r: 244, g: 244, b: 245 };
pub const CARD_BG: Color = Color::Rgb { r: 255, g: 255, b: 255 };
pub const CARD_BORDER: Color = Color::Rgb { r: 212, g: 212, b: 216 };
pub const INK: Color = Color::Rgb { r: 24, g: 24, b: 27 };
pub const INK_SOFT: Color = Color::Rgb { r: 113, g: 113, b: 122 };
pub const ACCENT_GREEN: Color = Color::Rgb { r: 22, g: 163, b: 74 };
pub const DARK_BG: Color = Color::Rgb { r: 24, g: 24, b: 27 };
pub const DARK_TEXT: Color = Color::Rgb { r: 250, g: 250, b: 250 };
pub const DARK_TEXT_SOFT: Color = Color::Rgb { r: 161, g: 161, b: 170 };
pub const BADGE_BG: Color = Color::Rgb { r: 228, g: 228, b: 231 };
