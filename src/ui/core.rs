// src/ui/core.rs
//! Core UI traits and types shared by every member of the element tree

use core::any::Any;

use alloc::boxed::Box;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::framebuffer::FrameBuffer;
use crate::ui::geometry::Vec2;

/// Represents a 2D touch point on the display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }

    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Input events routed through the element tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Initial touch press at a point
    Press(TouchPoint),
    /// Touch drag to a new point
    Drag(TouchPoint),
    /// Touch lifted at a point
    Release(TouchPoint),
}

impl Event {
    /// The point the event occurred at.
    pub fn point(&self) -> TouchPoint {
        match *self {
            Event::Press(p) | Event::Drag(p) | Event::Release(p) => p,
        }
    }
}

/// Zero-argument action fired when an element consumes (or, for containers,
/// fails to route) an event.
pub type Callback = Box<dyn FnMut()>;

/// Operations every member of the element tree supports.
///
/// Geometry only flows top-down: a parent pushes its size through
/// [`set_parent_size`](Element::set_parent_size) and places the element with
/// [`set_position`](Element::set_position) /
/// [`update_position`](Element::update_position). Elements never hold a
/// reference to their parent.
pub trait Element {
    /// Name used to look the element up among its siblings.
    fn name(&self) -> &str;

    /// Absolute top-left anchor.
    fn position(&self) -> Vec2;

    /// Absolute size, derived from the parent size.
    fn size(&self) -> Vec2;

    /// Move the element to an absolute position.
    fn set_position(&mut self, position: Vec2);

    /// Shift the element by `offset`.
    fn update_position(&mut self, offset: Vec2);

    /// Receive the absolute size of the owning container.
    fn set_parent_size(&mut self, parent_size: Vec2);

    /// Render to the surface, recomputing any stale layout first.
    fn draw(&mut self, surface: &mut FrameBuffer);

    /// Handle an input event. Returns `true` if the event was consumed.
    fn handle_event(&mut self, event: &Event) -> bool;

    /// Pixel bounds of this element.
    fn bounds(&self) -> Rectangle {
        self.position().rect(self.size())
    }

    /// Check if a point is within this element's bounds.
    fn contains_point(&self, point: TouchPoint) -> bool {
        let p = point.to_vec2();
        let min = self.position();
        let max = min + self.size();
        p.x >= min.x && p.x < max.x && p.y >= min.y && p.y < max.y
    }
}

/// A leaf widget: an [`Element`] with no children of its own.
///
/// The `Any` supertrait lets containers hand a leaf back as its concrete type
/// (see [`Container::get_leaf_as`](crate::ui::layouts::Container::get_leaf_as)).
pub trait Leaf: Element + Any {}
