use ratatui::style::Color;
use vitrine_types::ThemeMode;

/// Colours for one theme. Views never pick colours on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub selection: Color,
    pub price: Color,
    pub discount: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(249, 250, 251),
        text: Color::Rgb(17, 24, 39),
        muted: Color::Rgb(107, 114, 128),
        border: Color::Rgb(209, 213, 219),
        accent: Color::Rgb(234, 88, 12),
        selection: Color::Rgb(255, 237, 213),
        price: Color::Rgb(234, 88, 12),
        discount: Color::Rgb(220, 38, 38),
        success: Color::Rgb(22, 163, 74),
        warning: Color::Rgb(202, 138, 4),
        error: Color::Rgb(220, 38, 38),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(17, 24, 39),
        text: Color::Rgb(243, 244, 246),
        muted: Color::Rgb(156, 163, 175),
        border: Color::Rgb(55, 65, 81),
        accent: Color::Rgb(249, 115, 22),
        selection: Color::Rgb(31, 41, 55),
        price: Color::Rgb(249, 115, 22),
        discount: Color::Rgb(248, 113, 113),
        success: Color::Rgb(74, 222, 128),
        warning: Color::Rgb(250, 204, 21),
        error: Color::Rgb(248, 113, 113),
    };

    pub fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            ThemeMode::Light => Self::LIGHT,
            ThemeMode::Dark => Self::DARK,
        }
    }
}
