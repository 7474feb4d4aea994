//! Theme for the comment tree app.
//!
//! - Light and dark palettes, with System following the OS (`palette`)
//! - Extra semantic colors via the [`ThreadColors`] extension trait (`colors`)
//! - Widget style functions (`styles`)
//! - Spacing and sizing constants (`spacing`)
//!
//! Style functions receive `&Theme`, so colors always follow the active mode:
//!
//! ```rust,ignore
//! use crate::theme::{ThreadColors, button_primary};
//!
//! button(text("Save")).style(button_primary);
//! text(body).style(|theme: &Theme| text::Style {
//!     color: Some(theme.thread().text_muted),
//! });
//! ```

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod styles;

use iced::Theme;

pub use colors::{ThreadColorSet, ThreadColors};
pub use palette::{ThemeMode, thread_palette};
pub use spacing::{
    BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM, BORDER_WIDTH_THIN, CONTENT_MAX_WIDTH,
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
};
pub use styles::{
    button_danger, button_ghost, button_primary, button_secondary, card_container,
    error_banner_container, text_input_default,
};

/// Build the Iced theme for the given mode.
///
/// `system_is_dark` is only consulted for [`ThemeMode::System`].
pub fn thread_theme(theme_mode: ThemeMode, system_is_dark: bool) -> Theme {
    let is_dark = theme_mode.is_dark(system_is_dark);
    let name = if is_dark {
        "Comment Tree Dark"
    } else {
        "Comment Tree Light"
    };
    Theme::custom(name.to_string(), thread_palette(is_dark))
}
