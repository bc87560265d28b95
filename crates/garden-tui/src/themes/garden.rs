//! Garden palettes: warm paper and its night counterpart

use ratatui::style::Color;
use crate::theme::Theme;

/// Light theme (default)
pub fn light() -> Theme {
    Theme {
        base: Color::Rgb(0xf4, 0xf1, 0xea),
        surface: Color::Rgb(0xfb, 0xfa, 0xf6),
        raised: Color::Rgb(0xe8, 0xe4, 0xda),
        ink: Color::Rgb(0x1d, 0x1c, 0x1a),
        dark: Color::Rgb(0x4a, 0x47, 0x42),
        muted: Color::Rgb(0x8a, 0x85, 0x7c),
        pale: Color::Rgb(0xcf, 0xca, 0xbf),
        accent: Color::Rgb(0x3f, 0x6b, 0x4e),
        focus: Color::Rgb(0x2f, 0x55, 0x8c),
        success: Color::Rgb(0x4f, 0x7f, 0x3a),
        warning: Color::Rgb(0xb0, 0x6a, 0x1f),
        danger: Color::Rgb(0xa8, 0x3a, 0x32),
    }
}

/// Dark theme
pub fn dark() -> Theme {
    Theme {
        base: Color::Rgb(0x1b, 0x1d, 0x1a),
        surface: Color::Rgb(0x23, 0x26, 0x22),
        raised: Color::Rgb(0x2e, 0x32, 0x2d),
        ink: Color::Rgb(0xee, 0xeb, 0xe3),
        dark: Color::Rgb(0xc4, 0xc0, 0xb6),
        muted: Color::Rgb(0x8c, 0x89, 0x80),
        pale: Color::Rgb(0x4a, 0x4e, 0x47),
        accent: Color::Rgb(0x8f, 0xc0, 0x9c),
        focus: Color::Rgb(0x89, 0xb4, 0xe8),
        success: Color::Rgb(0xa9, 0xcf, 0x86),
        warning: Color::Rgb(0xe3, 0xa8, 0x5c),
        danger: Color::Rgb(0xe8, 0x7a, 0x70),
    }
}
