use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,      // Yellow
    pub accent_soft: Color, // Pale yellow for tags
    pub muted: Color,       // Grey body text
    pub faint: Color,       // Dim grey captions
    pub panel: Color,       // Darkest section background
    pub surface: Color,     // Alternate section background
    pub border_normal: Color,
    pub border_focused: Color,
    pub on_accent: Color,   // Text drawn on an accent background
    pub highlight: Color,   // Active nav entry
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(0, 0, 0),
    fg: Color::Rgb(255, 255, 255),
    accent: Color::Rgb(250, 204, 21),
    accent_soft: Color::Rgb(253, 224, 71),
    muted: Color::Rgb(209, 213, 219),
    faint: Color::Rgb(107, 114, 128),
    panel: Color::Rgb(17, 24, 39),
    surface: Color::Rgb(31, 41, 55),
    border_normal: Color::Rgb(55, 65, 81),
    border_focused: Color::Rgb(255, 255, 255),
    on_accent: Color::Rgb(0, 0, 0),
    highlight: Color::Rgb(255, 255, 255),
};
