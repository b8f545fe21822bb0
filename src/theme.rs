// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "auto" uses terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Chrome
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,

    // Tab bar
    pub tab_active: Color,
    pub tab_inactive: Color,

    // Content
    pub text: Color,
    pub muted: Color,
    pub code: Color,
    pub code_header: Color,
}

/// Theme names in cycle order (the `t` key walks this list)
pub const THEME_NAMES: &[&str] = &["auto", "dracula", "nord", "gruvbox"];

impl Theme {
    /// Load theme by name; unknown names fall back to "auto"
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(),
        }
    }

    /// Next theme in cycle order
    pub fn next(&self) -> Self {
        let idx = THEME_NAMES
            .iter()
            .position(|n| *n == self.name)
            .unwrap_or(0);
        Self::by_name(THEME_NAMES[(idx + 1) % THEME_NAMES.len()])
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            title: Color::Cyan,
            border: Color::White,
            highlight: Color::Yellow,
            status_bar: Color::Green,
            tab_active: Color::Cyan,
            tab_inactive: Color::Gray,
            text: Color::White,
            muted: Color::DarkGray,
            code: Color::LightGreen,
            code_header: Color::Cyan,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            title: Color::Rgb(0x8b, 0xe9, 0xfd),       // cyan
            border: Color::Rgb(0x62, 0x72, 0xa4),      // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),   // yellow
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b),  // green
            tab_active: Color::Rgb(0x8b, 0xe9, 0xfd),  // cyan
            tab_inactive: Color::Rgb(0x62, 0x72, 0xa4), // comment
            text: Color::Rgb(0xf8, 0xf8, 0xf2),        // foreground
            muted: Color::Rgb(0x62, 0x72, 0xa4),       // comment
            code: Color::Rgb(0x50, 0xfa, 0x7b),        // green
            code_header: Color::Rgb(0xbd, 0x93, 0xf9), // purple
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(0x88, 0xc0, 0xd0),       // frost
            border: Color::Rgb(0x4c, 0x56, 0x6a),      // polar night
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),   // aurora yellow
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c),  // aurora green
            tab_active: Color::Rgb(0x88, 0xc0, 0xd0),  // frost
            tab_inactive: Color::Rgb(0x4c, 0x56, 0x6a), // polar night
            text: Color::Rgb(0xd8, 0xde, 0xe9),        // snow storm
            muted: Color::Rgb(0x4c, 0x56, 0x6a),       // polar night
            code: Color::Rgb(0xa3, 0xbe, 0x8c),        // aurora green
            code_header: Color::Rgb(0x81, 0xa1, 0xc1), // frost blue
        }
    }

    /// Gruvbox theme
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(0x83, 0xa5, 0x98),       // aqua
            border: Color::Rgb(0x92, 0x83, 0x74),      // gray
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),   // yellow
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26),  // green
            tab_active: Color::Rgb(0x83, 0xa5, 0x98),  // aqua
            tab_inactive: Color::Rgb(0x92, 0x83, 0x74), // gray
            text: Color::Rgb(0xeb, 0xdb, 0xb2),        // fg
            muted: Color::Rgb(0x92, 0x83, 0x74),       // gray
            code: Color::Rgb(0xb8, 0xbb, 0x26),        // green
            code_header: Color::Rgb(0xd3, 0x86, 0x9b), // purple
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_falls_back_to_auto() {
        assert_eq!(Theme::by_name("solarized").name, "auto");
        assert_eq!(Theme::by_name("").name, "auto");
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("Dracula").name, "dracula");
        assert_eq!(Theme::by_name("NORD").name, "nord");
    }

    #[test]
    fn test_cycle_visits_every_theme() {
        let mut theme = Theme::auto();
        let mut seen = Vec::new();
        for _ in 0..THEME_NAMES.len() {
            theme = theme.next();
            seen.push(theme.name.clone());
        }
        for name in THEME_NAMES {
            assert!(seen.contains(&name.to_string()), "missing {}", name);
        }
        assert_eq!(theme.name, "auto");
    }
}
