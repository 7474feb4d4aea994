//! App-specific colors on top of Iced's `ExtendedPalette`.
//!
//! ```rust,ignore
//! use crate::theme::ThreadColors;
//!
//! .style(|theme: &Theme| container::Style {
//!     border: Border { color: theme.thread().border_default, ..Default::default() },
//!     ..Default::default()
//! })
//! ```

use iced::{Color, Theme};

// =============================================================================
// COLOR SET
// =============================================================================

/// Colors not covered by Iced's `ExtendedPalette`.
#[derive(Debug, Clone, Copy)]
pub struct ThreadColorSet {
    // === Danger Button States ===
    pub danger_hover: Color,
    pub danger_pressed: Color,

    // === Accent ===
    pub accent_hover: Color,
    pub accent_pressed: Color,
    pub accent_disabled: Color,
    /// Light tint of the primary color, for hover backgrounds
    pub accent_primary_light: Color,
    /// Medium tint of the primary color, for text selection
    pub accent_primary_medium: Color,

    // === Status ===
    pub status_error_light: Color,

    // === Borders ===
    pub border_default: Color,
    pub border_subtle: Color,
    pub border_focused: Color,

    // === Backgrounds ===
    /// Cards and inputs; white in light mode
    pub background_elevated: Color,

    // === Text ===
    pub text_secondary: Color,
    /// Metadata such as ids and reply counts
    pub text_muted: Color,
    pub text_disabled: Color,
    pub text_on_accent: Color,

    // === Thread ===
    /// Vertical guide drawn left of nested replies
    pub reply_guide: Color,
    pub shadow: Color,
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

/// Access to [`ThreadColorSet`] from any `&Theme`.
pub trait ThreadColors {
    fn thread(&self) -> ThreadColorSet;
}

impl ThreadColors for Theme {
    fn thread(&self) -> ThreadColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;
        let primary = palette.primary.base.color;
        let danger = palette.danger.base.color;

        ThreadColorSet {
            danger_hover: if is_dark {
                blend_color(danger, Color::WHITE, 0.15)
            } else {
                blend_color(danger, Color::BLACK, 0.12)
            },
            danger_pressed: if is_dark {
                blend_color(danger, Color::BLACK, 0.15)
            } else {
                blend_color(danger, Color::BLACK, 0.25)
            },

            accent_hover: palette.primary.strong.color,
            accent_pressed: blend_color(primary, Color::BLACK, if is_dark { 0.20 } else { 0.15 }),
            accent_disabled: if is_dark {
                Color::from_rgb(0.30, 0.30, 0.35)
            } else {
                Color::from_rgb(0.82, 0.82, 0.86)
            },
            accent_primary_light: if is_dark {
                Color { a: 0.15, ..primary }
            } else {
                blend_color(primary, Color::WHITE, 0.88)
            },
            accent_primary_medium: if is_dark {
                Color { a: 0.25, ..primary }
            } else {
                blend_color(primary, Color::WHITE, 0.70)
            },

            status_error_light: if is_dark {
                Color { a: 0.15, ..danger }
            } else {
                blend_color(danger, Color::WHITE, 0.85)
            },

            border_default: palette.background.strong.color,
            border_subtle: if is_dark {
                Color::from_rgb(0.20, 0.20, 0.22)
            } else {
                Color::from_rgb(0.90, 0.90, 0.93)
            },
            border_focused: primary,

            background_elevated: if is_dark {
                Color::from_rgb(0.16, 0.16, 0.18)
            } else {
                Color::WHITE
            },

            text_secondary: if is_dark {
                Color::from_rgb(0.80, 0.80, 0.85)
            } else {
                Color::from_rgb(0.30, 0.30, 0.35)
            },
            text_muted: if is_dark {
                Color::from_rgb(0.60, 0.60, 0.65)
            } else {
                Color::from_rgb(0.50, 0.50, 0.55)
            },
            text_disabled: if is_dark {
                Color::from_rgb(0.40, 0.40, 0.45)
            } else {
                Color::from_rgb(0.65, 0.65, 0.70)
            },
            text_on_accent: Color::WHITE,

            reply_guide: if is_dark {
                Color { a: 0.45, ..primary }
            } else {
                blend_color(primary, Color::WHITE, 0.60)
            },
            shadow: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.25 } else { 0.08 }),
        }
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Blend two colors. `factor` 0.0 returns `base`, 1.0 returns `blend`.
fn blend_color(base: Color, blend: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (blend.r - base.r) * factor,
        base.g + (blend.g - base.g) * factor,
        base.b + (blend.b - base.b) * factor,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let base = Color::from_rgb(0.25, 0.5, 0.75);
        assert_eq!(blend_color(base, Color::WHITE, 0.0), base);
        assert_eq!(blend_color(base, Color::WHITE, 1.0), Color::WHITE);
    }
}
