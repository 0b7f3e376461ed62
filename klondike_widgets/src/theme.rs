use ratatui::style::Color;

/// Card-table color theme for the TUI
pub struct Theme;

impl Theme {
    // Table
    pub const FELT_RGB: (u8, u8, u8) = (18, 74, 44);
    pub const FELT: Color = Color::Rgb(Self::FELT_RGB.0, Self::FELT_RGB.1, Self::FELT_RGB.2);
    pub const OUTLINE: Color = Color::Rgb(200, 210, 200);

    // Card colors
    pub const CARD_FACE: Color = Color::Rgb(240, 240, 240);
    pub const CARD_BORDER: Color = Color::Rgb(108, 117, 125);
    pub const CARD_BACK: Color = Color::Rgb(60, 60, 120);
    pub const CARD_BACK_ALT: Color = Color::Rgb(90, 90, 160);

    // Suit colors
    pub const RED_SUIT: Color = Color::Rgb(200, 30, 45);
    pub const BLACK_SUIT: Color = Color::Rgb(20, 20, 24);

    // UI elements
    pub const GOLD: Color = Color::Rgb(255, 183, 3);
    pub const BRIGHT_TEXT: Color = Color::Rgb(255, 255, 255);
    pub const BUTTON_BG: Color = Color::Rgb(255, 255, 255);
    pub const BUTTON_FG: Color = Color::Rgb(0, 0, 0);
    pub const BANNER_BG: Color = Color::Rgb(13, 17, 23);
}
