//! Styling for container decorations and reference widgets
//!
//! - [`colors`] - color constants and palettes
//! - [`style`] - style configuration and button variants
//!
//! # Examples
//!
//! ```ignore
//! use ratio_ui::ui::styling::*;
//!
//! let palette = ColorPalette::default();
//! let panel = Style::new()
//!     .with_background(palette.surface)
//!     .with_border(palette.border, 1);
//!
//! let button_style = ButtonVariant::Primary.to_style(&palette);
//! ```

pub mod colors;
pub mod style;

pub use colors::{
    COLOR_ACCENT, COLOR_ACCENT_MUTED, COLOR_BACKGROUND, COLOR_ERROR, COLOR_PRESSED,
    COLOR_STROKE, COLOR_SURFACE, ColorPalette, DARK_GRAY, GRAY, LIGHT_GRAY, WHITE,
};
pub use style::{ButtonVariant, Style};
