// src/ui/components/leaf.rs
//! Bookkeeping shared by the reference leaf widgets

use alloc::boxed::Box;
use alloc::string::String;

use crate::ui::core::{Callback, TouchPoint};
use crate::ui::geometry::Vec2;

/// Name, proportional geometry and flags of a leaf widget.
///
/// Widgets embed a `LeafState` and forward the geometric half of
/// [`Element`](crate::ui::core::Element) to it, keeping only drawing and
/// event handling for themselves.
pub struct LeafState {
    name: String,
    size_proportions: Vec2,
    parent_size: Vec2,
    size: Vec2,
    position: Vec2,
    visible: bool,
    enabled: bool,
    callback: Option<Callback>,
}

impl LeafState {
    pub fn new(name: &str, size_proportions: Vec2) -> Self {
        Self {
            name: String::from(name),
            size_proportions,
            parent_size: Vec2::ZERO,
            size: Vec2::ZERO,
            position: Vec2::ZERO,
            visible: true,
            enabled: true,
            callback: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn parent_size(&self) -> Vec2 {
        self.parent_size
    }

    pub fn size_proportions(&self) -> Vec2 {
        self.size_proportions
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn update_position(&mut self, offset: Vec2) {
        self.position += offset;
    }

    /// Store the parent size and derive the absolute size from it.
    pub fn set_parent_size(&mut self, parent_size: Vec2) {
        self.parent_size = parent_size;
        self.size = parent_size.component_mul(self.size_proportions);
    }

    pub fn set_size_proportions(&mut self, proportions: Vec2) {
        self.size_proportions = proportions;
        self.set_parent_size(self.parent_size);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Visible and enabled.
    pub fn is_interactive(&self) -> bool {
        self.visible && self.enabled
    }

    pub fn set_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callback = Some(Box::new(callback));
    }

    /// Invoke the callback, if any.
    pub fn fire(&mut self) {
        if let Some(callback) = self.callback.as_mut() {
            callback();
        }
    }

    pub fn contains(&self, point: TouchPoint) -> bool {
        let p = point.to_vec2();
        let max = self.position + self.size;
        p.x >= self.position.x && p.x < max.x && p.y >= self.position.y && p.y < max.y
    }
}

/// Replace the contents of `target` with as much of `text` as fits.
pub(crate) fn fill_truncated<const N: usize>(target: &mut heapless::String<N>, text: &str) {
    target.clear();
    for c in text.chars() {
        if target.push(c).is_err() {
            break;
        }
    }
}
