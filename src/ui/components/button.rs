// src/ui/components/button.rs
//! Proportional button with label, variants and press tracking

use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::RoundedRectangle;
use embedded_graphics::text::{Alignment as TextAlignment, Baseline, Text, TextStyleBuilder};
use log::debug;

use super::leaf::{LeafState, fill_truncated};
use crate::framebuffer::FrameBuffer;
use crate::ui::core::{Element, Event, Leaf};
use crate::ui::geometry::Vec2;
use crate::ui::styling::{ButtonVariant, ColorPalette, Style};

/// Button state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Pressed,
    Disabled,
}

/// Button component with label and callback
///
/// The callback fires on press. While a press that started on the button is
/// held, drags and the final release are consumed by the button even when
/// they leave its bounds.
///
/// # Examples
/// ```ignore
/// let ok = Button::new("Ok", Vec2::new(0.3, 0.2), "OK")
///     .with_variant(ButtonVariant::Outline)
///     .with_callback(|| log::info!("ok"));
/// ```
pub struct Button {
    leaf: LeafState,
    label: heapless::String<32>,
    state: ButtonState,
    held: bool,
    variant: ButtonVariant,
    palette: ColorPalette,
    border_radius: u32,
}

impl Button {
    pub fn new(name: &str, size_proportions: Vec2, label: &str) -> Self {
        let mut label_string = heapless::String::new();
        fill_truncated(&mut label_string, label);

        Self {
            leaf: LeafState::new(name, size_proportions),
            label: label_string,
            state: ButtonState::Normal,
            held: false,
            variant: ButtonVariant::Primary,
            palette: ColorPalette::default(),
            border_radius: 8,
        }
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_border_radius(mut self, radius: u32) -> Self {
        self.border_radius = radius;
        self
    }

    pub fn with_callback(mut self, callback: impl FnMut() + 'static) -> Self {
        self.leaf.set_callback(callback);
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.leaf.set_enabled(enabled);
        self.held = false;
        self.set_state(if enabled {
            ButtonState::Normal
        } else {
            ButtonState::Disabled
        });
    }

    pub fn is_enabled(&self) -> bool {
        self.leaf.is_enabled()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.leaf.set_visible(visible);
    }

    pub fn set_label(&mut self, label: &str) {
        fill_truncated(&mut self.label, label);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    fn set_state(&mut self, state: ButtonState) {
        self.state = state;
    }

    fn current_style(&self) -> Style {
        let base_style = self.variant.to_style(&self.palette);

        match self.state {
            ButtonState::Normal => base_style,
            ButtonState::Pressed => base_style.with_background(self.palette.pressed),
            ButtonState::Disabled => base_style
                .with_background(self.palette.disabled)
                .with_foreground(self.palette.text_secondary),
        }
    }
}

impl Element for Button {
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

        let style = self.current_style();
        let bounds = self.bounds();

        let corner_radius = Size::new(self.border_radius, self.border_radius);
        let Ok(()) = RoundedRectangle::with_equal_corners(bounds, corner_radius)
            .into_styled(style.to_primitive_style())
            .draw(surface);

        let text_color = style.foreground_color.unwrap_or(Rgb565::WHITE);
        let character_style = MonoTextStyle::new(&FONT_6X10, text_color);
        let text_style = TextStyleBuilder::new()
            .alignment(TextAlignment::Center)
            .baseline(Baseline::Middle)
            .build();

        let Ok(_) = Text::with_text_style(&self.label, bounds.center(), character_style, text_style)
            .draw(surface);
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.leaf.is_interactive() {
            return false;
        }

        match *event {
            Event::Press(point) if self.leaf.contains(point) => {
                self.held = true;
                self.set_state(ButtonState::Pressed);
                debug!("Button '{}' pressed", self.leaf.name());
                self.leaf.fire();
                true
            }
            Event::Drag(point) if self.held => {
                let hovering = self.leaf.contains(point);
                self.set_state(if hovering {
                    ButtonState::Pressed
                } else {
                    ButtonState::Normal
                });
                true
            }
            Event::Release(_) if self.held => {
                self.held = false;
                self.set_state(ButtonState::Normal);
                true
            }
            _ => false,
        }
    }
}

impl Leaf for Button {}
