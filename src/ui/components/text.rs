// src/ui/components/text.rs
//! Passive text label

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use super::leaf::{LeafState, fill_truncated};
use crate::framebuffer::FrameBuffer;
use crate::ui::core::{Element, Event, Leaf};
use crate::ui::geometry::Vec2;
use crate::ui::styling::Style;

/// Text size variants
///
/// - `Small`: 5x8 font
/// - `Medium`: 6x10 font (default)
/// - `Large`: 10x20 font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &embedded_graphics::mono_font::ascii::FONT_5X8,
            TextSize::Medium => &FONT_6X10,
            TextSize::Large => &embedded_graphics::mono_font::ascii::FONT_10X20,
        }
    }
}

/// Text centered in a proportional box. Never consumes events.
///
/// Holds up to 64 characters; longer text is truncated.
///
/// # Examples
/// ```ignore
/// let title = Label::new("Title", Vec2::new(1.0, 0.2), "Settings")
///     .with_size(TextSize::Large);
/// ```
pub struct Label {
    leaf: LeafState,
    text: heapless::String<64>,
    size: TextSize,
    style: Style,
}

impl Label {
    pub fn new(name: &str, size_proportions: Vec2, text: &str) -> Self {
        let mut text_string = heapless::String::new();
        fill_truncated(&mut text_string, text);

        Self {
            leaf: LeafState::new(name, size_proportions),
            text: text_string,
            size: TextSize::default(),
            style: Style::default(),
        }
    }

    pub fn with_size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replace the displayed text, truncated to the label's capacity.
    pub fn set_text(&mut self, text: &str) {
        fill_truncated(&mut self.text, text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.leaf.set_visible(visible);
    }
}

impl Element for Label {
    fn name(&self) -> &str {
        self.leaf.name()
    }

    fn position(&self) -> Vec2 {
        self.leaf.position()
    }

    fn size(&self) -> Vec2 {
        self.leaf.size()
    }

    fn set_position(&mut self, position: Vec2) {
        self.leaf.set_position(position);
    }

    fn update_position(&mut self, offset: Vec2) {
        self.leaf.update_position(offset);
    }

    fn set_parent_size(&mut self, parent_size: Vec2) {
        self.leaf.set_parent_size(parent_size);
    }

    fn draw(&mut self, surface: &mut FrameBuffer) {
        if !self.leaf.is_visible() {
            return;
        }

        let bounds = self.bounds();
        if self.style.background_color.is_some() {
            let Ok(()) = bounds
                .into_styled(self.style.to_primitive_style())
                .draw(surface);
        }

        let text_color = self.style.foreground_color.unwrap_or(Rgb565::WHITE);
        let character_style = MonoTextStyle::new(self.size.font(), text_color);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        let Ok(_) = Text::with_text_style(&self.text, bounds.center(), character_style, text_style)
            .draw(surface);
    }

    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }
}

impl Leaf for Label {}
