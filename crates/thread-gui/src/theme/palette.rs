//! Light and dark palettes.

use iced::Color;
use iced::theme::Palette;
use serde::{Deserialize, Serialize};

// =============================================================================
// THEME MODE
// =============================================================================

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// All available modes, in toggle order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// The mode after this one in [`ThemeMode::ALL`], wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Check if this is a dark mode (or resolves to dark).
    pub fn is_dark(&self, system_is_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_is_dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// PALETTES
// =============================================================================

/// The Iced palette for light or dark mode.
///
/// Iced derives its `ExtendedPalette` (weak/strong variants) from this.
pub fn thread_palette(is_dark: bool) -> Palette {
    if is_dark { dark() } else { light() }
}

fn light() -> Palette {
    Palette {
        background: Color::from_rgb(0.98, 0.98, 0.99),
        text: Color::from_rgb(0.10, 0.10, 0.12),
        primary: Color::from_rgb(0.23, 0.42, 0.85), // Indigo
        success: Color::from_rgb(0.20, 0.70, 0.40),
        warning: Color::from_rgb(0.95, 0.65, 0.05),
        danger: Color::from_rgb(0.85, 0.25, 0.25),
    }
}

fn dark() -> Palette {
    Palette {
        background: Color::from_rgb(0.08, 0.08, 0.10),
        text: Color::from_rgb(0.95, 0.95, 0.97),
        primary: Color::from_rgb(0.45, 0.60, 0.98),
        success: Color::from_rgb(0.35, 0.80, 0.55),
        warning: Color::from_rgb(1.0, 0.75, 0.20),
        danger: Color::from_rgb(0.95, 0.40, 0.40),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_through_all_modes() {
        let mut mode = ThemeMode::Light;
        for expected in [ThemeMode::Dark, ThemeMode::System, ThemeMode::Light] {
            mode = mode.next();
            assert_eq!(mode, expected);
        }
    }

    #[test]
    fn system_follows_os() {
        assert!(ThemeMode::System.is_dark(true));
        assert!(!ThemeMode::System.is_dark(false));
        assert!(ThemeMode::Dark.is_dark(false));
    }
}
