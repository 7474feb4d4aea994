//! Widget style functions.
//!
//! Each function has the signature Iced expects for `.style(...)`, so they
//! can be passed directly: `button(content).style(button_primary)`.

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use super::colors::ThreadColors;
use super::spacing::{BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM, BORDER_WIDTH_THIN};

// =============================================================================
// BUTTON STYLES
// =============================================================================

fn filled(background: Color, text_color: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow,
        ..Default::default()
    }
}

fn raised(color: Color) -> Shadow {
    Shadow {
        color,
        offset: Vector::new(0.0, 1.0),
        blur_radius: 2.0,
    }
}

/// Primary button: Comment and Save.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let colors = theme.thread();

    match status {
        button::Status::Active => filled(
            palette.primary.base.color,
            colors.text_on_accent,
            raised(colors.shadow),
        ),
        button::Status::Hovered => filled(
            colors.accent_hover,
            colors.text_on_accent,
            raised(colors.shadow),
        ),
        button::Status::Pressed => filled(
            colors.accent_pressed,
            colors.text_on_accent,
            Shadow::default(),
        ),
        button::Status::Disabled => filled(
            colors.accent_disabled,
            colors.text_muted,
            Shadow::default(),
        ),
    }
}

/// Secondary button: Cancel.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let colors = theme.thread();

    let (background, text_color, border_color) = match status {
        button::Status::Active => (
            colors.background_elevated,
            colors.text_secondary,
            colors.border_default,
        ),
        button::Status::Hovered => (
            palette.background.base.color,
            colors.text_secondary,
            colors.text_disabled,
        ),
        button::Status::Pressed => (
            palette.background.weak.color,
            colors.text_secondary,
            colors.border_default,
        ),
        button::Status::Disabled => (
            palette.background.weak.color,
            colors.text_disabled,
            colors.border_subtle,
        ),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: BORDER_WIDTH_THIN,
            color: border_color,
        },
        ..Default::default()
    }
}

/// Danger button: Delete.
pub fn button_danger(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let colors = theme.thread();

    match status {
        button::Status::Active => filled(
            palette.danger.base.color,
            colors.text_on_accent,
            raised(colors.shadow),
        ),
        button::Status::Hovered => filled(
            colors.danger_hover,
            colors.text_on_accent,
            raised(colors.shadow),
        ),
        button::Status::Pressed => filled(
            colors.danger_pressed,
            colors.text_on_accent,
            Shadow::default(),
        ),
        button::Status::Disabled => filled(
            colors.accent_disabled,
            colors.text_muted,
            Shadow::default(),
        ),
    }
}

/// Ghost button: per-comment Edit and Reply links.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let colors = theme.thread();

    let (background, text_color): (Option<Background>, Color) = match status {
        button::Status::Active => (None, palette.primary.base.color),
        button::Status::Hovered => (
            Some(colors.accent_primary_light.into()),
            palette.primary.base.color,
        ),
        button::Status::Pressed => (
            Some(colors.accent_primary_medium.into()),
            colors.accent_pressed,
        ),
        button::Status::Disabled => (None, colors.text_disabled),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// One comment.
pub fn card_container(theme: &Theme) -> container::Style {
    let colors = theme.thread();

    container::Style {
        background: Some(colors.background_elevated.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: BORDER_WIDTH_THIN,
            color: colors.border_subtle,
        },
        shadow: Shadow {
            color: colors.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Banner shown above the thread when an operation was rejected.
pub fn error_banner_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let colors = theme.thread();

    container::Style {
        background: Some(colors.status_error_light.into()),
        text_color: Some(palette.danger.strong.color),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: BORDER_WIDTH_THIN,
            color: palette.danger.base.color,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Composer and draft inputs.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let colors = theme.thread();

    let (border_width, border_color) = match status {
        text_input::Status::Active | text_input::Status::Disabled => {
            (BORDER_WIDTH_THIN, colors.border_default)
        }
        text_input::Status::Hovered => (BORDER_WIDTH_THIN, colors.text_disabled),
        text_input::Status::Focused { .. } => (BORDER_WIDTH_MEDIUM, colors.border_focused),
    };
    let disabled = matches!(status, text_input::Status::Disabled);

    text_input::Style {
        background: if disabled {
            palette.background.weak.color.into()
        } else {
            colors.background_elevated.into()
        },
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: border_width,
            color: border_color,
        },
        icon: colors.text_muted,
        placeholder: colors.text_disabled,
        value: if disabled {
            colors.text_muted
        } else {
            palette.background.base.text
        },
        selection: colors.accent_primary_medium,
    }
}
