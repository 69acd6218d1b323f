//! Color definitions and palette management
//!
//! All colors are RGB565, the native format of the framebuffer. To convert
//! from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Base Colors
// ============================================================================

/// Screen background - very dark gray-blue
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);

/// Panel / card surface - slightly lighter than the background
pub const COLOR_SURFACE: Rgb565 = Rgb565::new(26 >> 3, 32 >> 2, 33 >> 3);

/// Outline color - medium gray
pub const COLOR_STROKE: Rgb565 = Rgb565::new(43 >> 3, 55 >> 2, 57 >> 3);

/// Accent for primary actions - teal-green
pub const COLOR_ACCENT: Rgb565 = Rgb565::new(95 >> 3, 185 >> 2, 141 >> 3);

/// Accent for secondary actions - moderate green
pub const COLOR_ACCENT_MUTED: Rgb565 = Rgb565::new(76 >> 3, 154 >> 2, 113 >> 3);

/// Highlight for a pressed widget - dark teal
pub const COLOR_PRESSED: Rgb565 = Rgb565::new(29 >> 3, 47 >> 2, 43 >> 3);

/// Error and alert color - muted red
pub const COLOR_ERROR: Rgb565 = Rgb565::new(190 >> 3, 95 >> 2, 95 >> 3);

// ============================================================================
// Text Colors
// ============================================================================

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Light gray - for secondary text
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// Medium gray - for disabled widgets
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);

/// Dark gray - for subtle text
pub const DARK_GRAY: Rgb565 = Rgb565::new(10, 20, 10);

// ============================================================================
// Color Palette
// ============================================================================

/// Colors shared by the reference widgets.
///
/// # Examples
///
/// ```ignore
/// let palette = ColorPalette::default();
/// let light_palette = ColorPalette::light();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Key interactive elements
    pub primary: Rgb565,

    /// Less prominent actions
    pub secondary: Rgb565,

    pub background: Rgb565,

    /// Cards, panels and outlined buttons
    pub surface: Rgb565,

    /// Fill of a widget while it is pressed
    pub pressed: Rgb565,

    /// Fill of a disabled widget
    pub disabled: Rgb565,

    pub error: Rgb565,

    pub text_primary: Rgb565,

    pub text_secondary: Rgb565,

    /// Separators and outlines
    pub border: Rgb565,
}

impl Default for ColorPalette {
    /// Returns the dark palette
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Light text on dark backgrounds
    pub fn dark() -> Self {
        Self {
            primary: COLOR_ACCENT,
            secondary: COLOR_ACCENT_MUTED,
            background: COLOR_BACKGROUND,
            surface: COLOR_SURFACE,
            pressed: COLOR_PRESSED,
            disabled: GRAY,
            error: COLOR_ERROR,
            text_primary: WHITE,
            text_secondary: LIGHT_GRAY,
            border: COLOR_STROKE,
        }
    }

    /// Dark text on light backgrounds
    pub fn light() -> Self {
        Self {
            background: WHITE,
            text_primary: COLOR_BACKGROUND,
            text_secondary: DARK_GRAY,
            ..Self::dark()
        }
    }
}
