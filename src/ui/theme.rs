// Theme constants.
// Colors, text sizes, spacing and widths shared by all screens.

use ratatui::style::Color;

pub struct AppColors;

impl AppColors {
    pub const PRIMARY: Color = Color::Blue;
    pub const ACCENT: Color = Color::Cyan;
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const MUTED: Color = Color::DarkGray;
    pub const HIGHLIGHT: Color = Color::Yellow;
}

/// Text sizes. A terminal has one font size, so sizes map to emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    Header,
    #[default]
    Body,
    Caption,
}

pub struct AppTypography;

impl AppTypography {
    pub const HEADER_SIZE: TextSize = TextSize::Header;
    pub const BODY_SIZE: TextSize = TextSize::Body;
    pub const CAPTION_SIZE: TextSize = TextSize::Caption;
}

/// Vertical spacing in rows.
pub struct AppSpacing;

impl AppSpacing {
    pub const SMALL: u16 = 1;
    pub const MEDIUM: u16 = 1;
    pub const LARGE: u16 = 2;
}

pub struct AppInputs;

impl AppInputs {
    pub const FIELD_WIDTH: u16 = 50;
}

pub struct AppTabs;

impl AppTabs {
    pub const HEIGHT: u16 = 3;
}
