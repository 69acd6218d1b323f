//! Style configuration for UI elements
//!
//! Provides the core `Style` struct used for container decorations and leaf
//! widgets, plus the predefined `ButtonVariant`s.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment};

use super::colors::{ColorPalette, WHITE};

// ============================================================================
// Style
// ============================================================================

/// Visual style configuration for a UI element
///
/// Defines fill, text and outline colors. Use the builder pattern to
/// construct styles incrementally.
///
/// # Examples
///
/// ```ignore
/// use ratio_ui::ui::styling::*;
///
/// // Card with a 2px outline
/// let card_style = Style::new()
///     .with_background(COLOR_FOREGROUND)
///     .with_border(COLOR_STROKE, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Background fill color (if any)
    pub background_color: Option<Rgb565>,

    /// Foreground/text color (if any)
    pub foreground_color: Option<Rgb565>,

    /// Border color (if any)
    pub border_color: Option<Rgb565>,

    /// Border width in pixels (0 = no border)
    pub border_width: u32,
}

impl Default for Style {
    /// Returns a minimal default style with white text and no background or border
    fn default() -> Self {
        Self {
            background_color: None,
            foreground_color: Some(WHITE),
            border_color: None,
            border_width: 0,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background color
    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets the foreground (text) color
    pub fn with_foreground(mut self, color: Rgb565) -> Self {
        self.foreground_color = Some(color);
        self
    }

    /// Sets the border color and width
    ///
    /// A width of 0 effectively disables the border.
    pub fn with_border(mut self, color: Rgb565, width: u32) -> Self {
        self.border_color = Some(color);
        self.border_width = width;
        self
    }

    /// True if drawing this style would put any pixel on screen.
    pub fn is_visible(&self) -> bool {
        self.background_color.is_some() || (self.border_color.is_some() && self.border_width > 0)
    }

    /// Converts this style to a `PrimitiveStyle` for embedded-graphics drawing
    ///
    /// The border is drawn outside the shape so it never eats into the area
    /// that children are laid out in.
    pub fn to_primitive_style(&self) -> PrimitiveStyle<Rgb565> {
        let mut builder = PrimitiveStyleBuilder::new();

        if let Some(bg) = self.background_color {
            builder = builder.fill_color(bg);
        }

        if let Some(border) = self.border_color
            && self.border_width > 0
        {
            builder = builder
                .stroke_color(border)
                .stroke_width(self.border_width)
                .stroke_alignment(StrokeAlignment::Outside);
        }

        builder.build()
    }
}

// ============================================================================
// Button Variants
// ============================================================================

/// Predefined button style variants for consistent button appearances
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Primary action button - most prominent, used for main actions
    Primary,

    /// Secondary action button - less prominent than primary
    Secondary,

    /// Outlined button - subtle emphasis with border
    Outline,

    /// Pill-shaped button with custom background color
    Pill(Rgb565),
}

impl ButtonVariant {
    /// Converts the variant to a concrete style based on a color palette
    pub fn to_style(&self, palette: &ColorPalette) -> Style {
        match self {
            ButtonVariant::Primary => Style::new()
                .with_background(palette.primary)
                .with_foreground(WHITE),

            ButtonVariant::Secondary => Style::new()
                .with_background(palette.secondary)
                .with_foreground(WHITE),

            ButtonVariant::Outline => Style::new()
                .with_background(palette.surface)
                .with_foreground(palette.text_primary)
                .with_border(palette.border, 2),

            ButtonVariant::Pill(color) => Style::new().with_background(*color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;

    #[test]
    fn test_default_style_draws_nothing() {
        assert!(!Style::default().is_visible());
        assert!(!Style::new().with_border(Rgb565::RED, 0).is_visible());
        assert!(Style::new().with_border(Rgb565::RED, 1).is_visible());
    }

    #[test]
    fn test_primitive_style_outline_outside() {
        let style = Style::new()
            .with_background(Rgb565::BLUE)
            .with_border(Rgb565::RED, 3)
            .to_primitive_style();

        assert_eq!(style.fill_color, Some(Rgb565::BLUE));
        assert_eq!(style.stroke_color, Some(Rgb565::RED));
        assert_eq!(style.stroke_width, 3);
        assert_eq!(style.stroke_alignment, StrokeAlignment::Outside);
    }

    #[test]
    fn test_outline_variant_has_border() {
        let palette = ColorPalette::default();
        let style = ButtonVariant::Outline.to_style(&palette);
        assert_eq!(style.border_color, Some(palette.border));
        assert_eq!(style.border_width, 2);
    }
}
