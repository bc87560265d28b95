use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Surfaces
    pub base: Color,
    pub surface: Color,
    pub raised: Color,

    // Text
    pub ink: Color,
    pub dark: Color,
    pub muted: Color,
    pub pale: Color,

    // Semantic colors
    pub accent: Color,
    pub focus: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::garden_light()
    }
}

impl Theme {
    /// Blend `color` toward the surface it sits on.
    ///
    /// Terminals have no alpha channel, so opacity is rendered by mixing the
    /// RGB value with `background`. Named colors are returned unchanged above
    /// half opacity and as the background below it.
    pub fn fade(&self, color: Color, background: Color, opacity: f64) -> Color {
        let opacity = if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) };
        match (color, background) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
                mix(r, br, opacity),
                mix(g, bg, opacity),
                mix(b, bb, opacity),
            ),
            _ if opacity >= 0.5 => color,
            _ => background,
        }
    }
}

fn mix(fg: u8, bg: u8, opacity: f64) -> u8 {
    (bg as f64 + (fg as f64 - bg as f64) * opacity).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        let theme = Theme::default();
        let fg = Color::Rgb(0, 0, 0);
        let bg = Color::Rgb(200, 100, 50);
        assert_eq!(theme.fade(fg, bg, 1.0), fg);
        assert_eq!(theme.fade(fg, bg, 0.0), bg);
        assert_eq!(theme.fade(fg, bg, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_fade_named_colors() {
        let theme = Theme::default();
        assert_eq!(theme.fade(Color::Red, Color::Black, 0.8), Color::Red);
        assert_eq!(theme.fade(Color::Red, Color::Black, 0.2), Color::Black);
    }
}
