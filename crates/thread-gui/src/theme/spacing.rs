//! Spacing constants for consistent layout.
//!
//! All values are in pixels.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Icon margins, gaps between buttons
pub const SPACING_SM: f32 = 8.0;

/// Default padding
pub const SPACING_MD: f32 = 16.0;

/// Section padding
pub const SPACING_LG: f32 = 24.0;

/// Page margins
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDERS
// =============================================================================

/// Buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Cards, banners
pub const BORDER_RADIUS_MD: f32 = 6.0;

pub const BORDER_WIDTH_THIN: f32 = 1.0;

pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// LAYOUT
// =============================================================================

/// Maximum width of the thread column.
pub const CONTENT_MAX_WIDTH: f32 = 760.0;
