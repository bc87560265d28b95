//! Theme registry and loader

mod garden;

use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

pub use garden::{dark as garden_dark, light as garden_light};

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name, applying the optional accent override
pub fn load_theme(name: &str, accent: Option<&str>) -> Theme {
    let mut theme = match name.to_lowercase().as_str() {
        "garden-light" | "light" => garden::light(),
        "garden-dark" | "dark" => garden::dark(),
        other => {
            warn!("Unknown theme '{}', using garden-light", other);
            garden::light()
        }
    };

    if let Some(hex) = accent {
        match parse_hex_color(hex) {
            Some(color) => theme.accent = color,
            None => warn!("Invalid accent color '{}', keeping theme accent", hex),
        }
    }

    theme
}
