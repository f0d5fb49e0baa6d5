//! iOS system colours used by the mockups

use crate::rendering::Color;

pub const BACKGROUND: Color = Color::rgb(242, 242, 247);
pub const CARD: Color = Color::rgb(255, 255, 255);
pub const BLUE: Color = Color::rgb(0, 122, 255);
pub const GREEN: Color = Color::rgb(52, 199, 89);
pub const ORANGE: Color = Color::rgb(255, 149, 0);
pub const RED: Color = Color::rgb(255, 59, 48);
pub const PURPLE: Color = Color::rgb(175, 82, 222);
pub const YELLOW: Color = Color::rgb(255, 204, 0);
pub const TEXT_PRIMARY: Color = Color::rgb(0, 0, 0);
pub const TEXT_SECONDARY: Color = Color::rgb(142, 142, 147);
pub const BAR: Color = Color::rgb(249, 249, 249);
pub const SEPARATOR: Color = Color::rgb(200, 200, 200);
pub const FILL_GRAY: Color = Color::rgb(229, 229, 234);
pub const TRACK_GRAY: Color = Color::rgb(230, 230, 230);
pub const BANNER_PURPLE: Color = Color::rgb(255, 252, 252);
