// src/ui/layouts/container.rs
//! Proportional container: the node that owns, sizes and aligns children
//!
//! A container only knows proportions. Its absolute size comes from the
//! parent size pushed into it, and that size is cascaded to every child as
//! soon as it changes. Placement and alignment are deferred: mutations set a
//! dirty flag and the next [`draw`](Element::draw) (or an explicit
//! [`refresh_layout`](Container::refresh_layout)) runs the layout once.
//!
//! # Examples
//! ```ignore
//! let mut row = Container::new("Row", Vec2::new(1.0, 0.2))
//!     .with_orientation(Orientation::Horizontal)
//!     .with_alignment(Alignment::Leading)
//!     .with_spacing_proportions(Vec2::new(0.05, 0.0));
//!
//! row.add_leaf(Box::new(Button::new("Ok", Vec2::new(0.3, 1.0), "OK")));
//! row.set_parent_size(Vec2::new(320.0, 240.0));
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::RoundedRectangle;
use log::{debug, warn};

use crate::framebuffer::FrameBuffer;
use crate::ui::core::{Callback, Element, Event, Leaf};
use crate::ui::error::{Diagnostic, LayoutError, NodeKind};
use crate::ui::geometry::Vec2;
use crate::ui::layouts::alignment::{Alignment, Orientation};
use crate::ui::layouts::box_model::BoxModel;
use crate::ui::layouts::placement::place;
use crate::ui::layouts::resolver::{Frame, resolve};
use crate::ui::layouts::tree::{ElementTree, Node};
use crate::ui::styling::Style;

/// Floating point slack allowed before proportions count as overflowing.
const OVERFLOW_EPSILON: f32 = 1e-3;

/// Container that sizes, places and aligns an ordered list of children
pub struct Container {
    name: String,
    geometry: BoxModel,
    position: Vec2,
    orientation: Orientation,
    alignment: Alignment,
    children: ElementTree,
    visible: bool,
    enabled: bool,
    callback: Option<Callback>,
    style: Option<Style>,
    corner_radius: u32,
    dirty: bool,
    layout_generation: u32,
}

impl Container {
    /// Create a container with the given size proportions.
    ///
    /// Defaults: no orientation, centered, visible, enabled, zero padding and
    /// spacing, no decoration. The size stays zero until a parent size is set.
    pub fn new(name: &str, size_proportions: Vec2) -> Self {
        Self {
            name: String::from(name),
            geometry: BoxModel::new(size_proportions),
            position: Vec2::ZERO,
            orientation: Orientation::default(),
            alignment: Alignment::default(),
            children: ElementTree::new(),
            visible: true,
            enabled: true,
            callback: None,
            style: None,
            corner_radius: 0,
            dirty: true,
            layout_generation: 0,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.set_orientation(orientation);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.set_alignment(alignment);
        self
    }

    pub fn with_padding_proportions(mut self, proportions: Vec2) -> Self {
        self.set_padding_proportions(proportions);
        self
    }

    pub fn with_spacing_proportions(mut self, proportions: Vec2) -> Self {
        self.set_spacing_proportions(proportions);
        self
    }

    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.set_background(color);
        self
    }

    pub fn with_outline(mut self, color: Rgb565, thickness: u32) -> Self {
        self.set_outline(color, thickness);
        self
    }

    /// Set the corner radius for rounded corners.
    ///
    /// A radius of 0 (default) produces square corners.
    pub fn with_corner_radius(mut self, radius: u32) -> Self {
        self.set_corner_radius(radius);
        self
    }

    /// Fired when an event reaches this container and no child consumes it.
    pub fn with_callback(mut self, callback: impl FnMut() + 'static) -> Self {
        self.set_callback(callback);
        self
    }

    // ------------------------------------------------------------------------
    // Proportions and layout policy
    // ------------------------------------------------------------------------

    /// Change the size proportions.
    ///
    /// The new size is cascaded to the children before padding and spacing
    /// are recomputed from it.
    pub fn set_size_proportions(&mut self, proportions: Vec2) {
        self.geometry.set_size_proportions(proportions);
        self.cascade_size();
        self.geometry.refresh_insets();
        self.dirty = true;
    }

    pub fn set_padding_proportions(&mut self, proportions: Vec2) {
        self.geometry.set_padding_proportions(proportions);
        self.dirty = true;
    }

    pub fn set_spacing_proportions(&mut self, proportions: Vec2) {
        self.geometry.set_spacing_proportions(proportions);
        self.dirty = true;
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.dirty = true;
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
        self.dirty = true;
    }

    pub fn size_proportions(&self) -> Vec2 {
        self.geometry.size_proportions()
    }

    pub fn padding_proportions(&self) -> Vec2 {
        self.geometry.padding_proportions()
    }

    pub fn spacing_proportions(&self) -> Vec2 {
        self.geometry.spacing_proportions()
    }

    pub fn parent_size(&self) -> Vec2 {
        self.geometry.parent_size()
    }

    pub fn padding(&self) -> Vec2 {
        self.geometry.padding()
    }

    pub fn spacing(&self) -> Vec2 {
        self.geometry.spacing()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    // ------------------------------------------------------------------------
    // State flags and callback
    // ------------------------------------------------------------------------

    /// Hide or show the decoration. Children are drawn either way.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.dirty = true;
        }
    }

    /// Stored for the host to query. Event routing ignores it; leaves gate
    /// themselves.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Force a layout pass on the next draw.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Number of layout passes this container has completed.
    pub fn layout_generation(&self) -> u32 {
        self.layout_generation
    }

    // ------------------------------------------------------------------------
    // Decoration
    // ------------------------------------------------------------------------

    pub fn set_background(&mut self, color: Rgb565) {
        let style = self.style.get_or_insert_with(undecorated);
        style.background_color = Some(color);
        self.dirty = true;
    }

    /// Outline drawn around (outside) the container bounds.
    pub fn set_outline(&mut self, color: Rgb565, thickness: u32) {
        let style = self.style.get_or_insert_with(undecorated);
        style.border_color = Some(color);
        style.border_width = thickness;
        self.dirty = true;
    }

    pub fn set_corner_radius(&mut self, radius: u32) {
        self.corner_radius = radius;
        self.dirty = true;
    }

    /// Remove background and outline.
    pub fn clear_decoration(&mut self) {
        self.style = None;
        self.dirty = true;
    }

    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    pub fn corner_radius(&self) -> u32 {
        self.corner_radius
    }

    // ------------------------------------------------------------------------
    // Children
    // ------------------------------------------------------------------------

    /// Append a nested container. It is sized against this container at once.
    pub fn add_container(&mut self, mut container: Container) {
        container.set_parent_size(self.size());
        self.children.push(Node::Container(Box::new(container)));
        self.dirty = true;
    }

    /// Append a leaf widget. It is sized against this container at once.
    pub fn add_leaf(&mut self, mut leaf: Box<dyn Leaf>) {
        leaf.set_parent_size(self.size());
        self.children.push(Node::Leaf(leaf));
        self.dirty = true;
    }

    pub fn get_container(&self, name: &str) -> Result<&Container, LayoutError> {
        self.children
            .get(name, NodeKind::Container)?
            .as_container()
            .ok_or_else(|| mismatch(name, NodeKind::Container))
    }

    pub fn get_container_mut(&mut self, name: &str) -> Result<&mut Container, LayoutError> {
        self.children
            .get_mut(name, NodeKind::Container)?
            .as_container_mut()
            .ok_or_else(|| mismatch(name, NodeKind::Container))
    }

    pub fn get_leaf(&self, name: &str) -> Result<&dyn Leaf, LayoutError> {
        self.children
            .get(name, NodeKind::Leaf)?
            .as_leaf()
            .ok_or_else(|| mismatch(name, NodeKind::Leaf))
    }

    pub fn get_leaf_mut(&mut self, name: &str) -> Result<&mut dyn Leaf, LayoutError> {
        self.children
            .get_mut(name, NodeKind::Leaf)?
            .as_leaf_mut()
            .ok_or_else(|| mismatch(name, NodeKind::Leaf))
    }

    /// Look up a leaf and hand it back as its concrete widget type.
    ///
    /// A leaf of another type is reported as a [`LayoutError::TypeMismatch`].
    pub fn get_leaf_as<T: Leaf>(&self, name: &str) -> Result<&T, LayoutError> {
        self.children
            .get(name, NodeKind::Leaf)?
            .as_any_leaf()
            .and_then(|leaf| leaf.downcast_ref::<T>())
            .ok_or_else(|| mismatch(name, NodeKind::Leaf))
    }

    pub fn get_leaf_as_mut<T: Leaf>(&mut self, name: &str) -> Result<&mut T, LayoutError> {
        self.children
            .get_mut(name, NodeKind::Leaf)?
            .as_any_leaf_mut()
            .and_then(|leaf| leaf.downcast_mut::<T>())
            .ok_or_else(|| mismatch(name, NodeKind::Leaf))
    }

    /// Detach a nested container, handing its whole subtree to the caller.
    pub fn remove_container(&mut self, name: &str) -> Result<Box<Container>, LayoutError> {
        let node = self.children.remove(name, NodeKind::Container)?;
        self.dirty = true;
        node.into_container()
            .ok_or_else(|| mismatch(name, NodeKind::Container))
    }

    /// Detach a leaf, handing it to the caller.
    pub fn remove_leaf(&mut self, name: &str) -> Result<Box<dyn Leaf>, LayoutError> {
        let node = self.children.remove(name, NodeKind::Leaf)?;
        self.dirty = true;
        node.into_leaf().ok_or_else(|| mismatch(name, NodeKind::Leaf))
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Node] {
        self.children.nodes()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------

    /// Non-fatal problems with the current geometry.
    pub fn validate(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if self.size().is_degenerate() {
            diagnostics.push(Diagnostic::DegenerateGeometry {
                name: self.name.clone(),
                size: self.size(),
            });
        }

        if self.orientation == Orientation::None && self.children.len() > 1 {
            diagnostics.push(Diagnostic::UnorientedChildren {
                name: self.name.clone(),
                count: self.children.len(),
            });
        }

        diagnostics
    }

    /// Check whether the children need more room than this container has.
    ///
    /// Sequential layouts sum the children and spacing along the primary
    /// axis; stacked and unoriented ones take the largest child. Padding is
    /// added on both sides. Nothing is corrected.
    pub fn overflow(&self) -> Option<Diagnostic> {
        let nodes = self.children.nodes();
        if nodes.is_empty() {
            return None;
        }

        let widest = nodes.iter().map(|n| n.size().x).fold(f32::MIN, f32::max);
        let tallest = nodes.iter().map(|n| n.size().y).fold(f32::MIN, f32::max);

        let content = match self.orientation.primary_axis() {
            Some(axis) => {
                let gaps = (nodes.len() - 1) as f32 * self.spacing().along(axis);
                let run = nodes.iter().map(|n| n.size().along(axis)).sum::<f32>() + gaps;
                let thickest = Vec2::new(widest, tallest).along(axis.other());
                Vec2::from_axes(axis, run, thickest)
            }
            None => Vec2::new(widest, tallest),
        };

        let required = content + self.padding() * 2.0;
        let available = self.size();

        let overflows = required.x > available.x + OVERFLOW_EPSILON
            || required.y > available.y + OVERFLOW_EPSILON;

        overflows.then(|| Diagnostic::OverflowingProportions {
            name: self.name.clone(),
            required,
            available,
        })
    }

    // ------------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------------

    /// Run the layout pass if anything changed since the last one.
    ///
    /// This is the only place placement and alignment happen; geometry read
    /// from children is final once it returns.
    pub fn refresh_layout(&mut self) {
        if self.dirty {
            self.layout();
        }
    }

    fn layout(&mut self) {
        for diagnostic in self.validate() {
            warn!("{}", diagnostic);
        }

        let frame = Frame {
            position: self.position,
            size: self.size(),
            padding: self.padding(),
            interior: self.geometry.interior(),
        };

        let children = self.children.nodes_mut();
        place(children, frame.position, self.orientation, self.geometry.spacing());
        resolve(children, &frame, self.orientation, self.alignment);

        self.layout_generation = self.layout_generation.wrapping_add(1);
        self.dirty = false;

        debug!(
            "Laid out '{}': {} children, generation {}",
            self.name,
            self.children.len(),
            self.layout_generation
        );
    }

    fn cascade_size(&mut self) {
        let size = self.size();
        for child in self.children.nodes_mut() {
            child.set_parent_size(size);
        }
    }

    fn draw_decoration(&self, surface: &mut FrameBuffer) {
        let Some(style) = self.style.filter(Style::is_visible) else {
            return;
        };

        let corner = Size::new(self.corner_radius, self.corner_radius);
        let Ok(()) = RoundedRectangle::with_equal_corners(self.bounds(), corner)
            .into_styled(style.to_primitive_style())
            .draw(surface);
    }
}

impl Element for Container {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn size(&self) -> Vec2 {
        self.geometry.size()
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.dirty = true;
    }

    fn update_position(&mut self, offset: Vec2) {
        self.position += offset;
        self.dirty = true;
    }

    /// Resize against a new parent size and cascade the result downwards.
    fn set_parent_size(&mut self, parent_size: Vec2) {
        self.geometry.set_parent_size(parent_size);
        self.cascade_size();
        self.geometry.refresh_insets();
        self.dirty = true;
    }

    fn draw(&mut self, surface: &mut FrameBuffer) {
        self.refresh_layout();

        if self.visible {
            self.draw_decoration(surface);
        }

        for child in self.children.nodes_mut() {
            child.draw(surface);
        }
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        let handled = self
            .children
            .nodes_mut()
            .iter_mut()
            .any(|child| child.handle_event(event));

        if !handled && let Some(callback) = self.callback.as_mut() {
            debug!("Event {:?} unhandled below '{}', firing callback", event, self.name);
            callback();
        }

        handled
    }
}

/// Style used when a decoration setter runs on an undecorated container.
fn undecorated() -> Style {
    Style {
        foreground_color: None,
        ..Style::default()
    }
}

fn mismatch(name: &str, expected: NodeKind) -> LayoutError {
    LayoutError::TypeMismatch {
        name: String::from(name),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::Button;
    use crate::ui::core::TouchPoint;
    use alloc::rc::Rc;
    use core::cell::Cell;

    /// Minimal proportional leaf that records the events it sees.
    struct Probe {
        name: &'static str,
        proportions: Vec2,
        parent_size: Vec2,
        position: Vec2,
        handles: bool,
        calls: Rc<Cell<u32>>,
    }

    impl Probe {
        fn new(name: &'static str, proportions: Vec2) -> Self {
            Self {
                name,
                proportions,
                parent_size: Vec2::ZERO,
                position: Vec2::ZERO,
                handles: false,
                calls: Rc::new(Cell::new(0)),
            }
        }

        fn handling(mut self, handles: bool) -> Self {
            self.handles = handles;
            self
        }

        fn counting(mut self, calls: &Rc<Cell<u32>>) -> Self {
            self.calls = Rc::clone(calls);
            self
        }
    }

    impl Element for Probe {
        fn name(&self) -> &str {
            self.name
        }
        fn position(&self) -> Vec2 {
            self.position
        }
        fn size(&self) -> Vec2 {
            self.parent_size.component_mul(self.proportions)
        }
        fn set_position(&mut self, position: Vec2) {
            self.position = position;
        }
        fn update_position(&mut self, offset: Vec2) {
            self.position += offset;
        }
        fn set_parent_size(&mut self, parent_size: Vec2) {
            self.parent_size = parent_size;
        }
        fn draw(&mut self, _surface: &mut FrameBuffer) {}
        fn handle_event(&mut self, _event: &Event) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.handles
        }
    }

    impl Leaf for Probe {}

    fn press() -> Event {
        Event::Press(TouchPoint::new(1, 1))
    }

    fn surface() -> FrameBuffer {
        FrameBuffer::new(Size::new(200, 100))
    }

    #[test]
    fn test_size_cascades_to_descendants() {
        let mut root = Container::new("Root", Vec2::new(0.5, 0.5));
        let mut middle = Container::new("Middle", Vec2::new(0.5, 1.0));
        middle.add_container(Container::new("Inner", Vec2::new(1.0, 0.5)));
        root.add_container(middle);

        root.set_parent_size(Vec2::new(800.0, 400.0));
        assert_eq!(root.size(), Vec2::new(400.0, 200.0));

        let middle = root.get_container("Middle").unwrap();
        assert_eq!(middle.parent_size(), root.size());
        assert_eq!(middle.size(), Vec2::new(200.0, 200.0));

        let inner = middle.get_container("Inner").unwrap();
        assert_eq!(inner.parent_size(), middle.size());
        assert_eq!(inner.size(), Vec2::new(200.0, 100.0));
    }

    #[test]
    fn test_children_added_late_are_sized() {
        let mut root = Container::new("Root", Vec2::splat(1.0));
        root.set_parent_size(Vec2::new(100.0, 50.0));
        root.add_leaf(Box::new(Probe::new("p", Vec2::new(0.5, 0.5))));

        assert_eq!(root.get_leaf("p").unwrap().size(), Vec2::new(50.0, 25.0));
    }

    #[test]
    fn test_size_proportions_refresh_insets() {
        let mut root = Container::new("Root", Vec2::splat(1.0))
            .with_padding_proportions(Vec2::new(0.1, 0.1))
            .with_spacing_proportions(Vec2::new(0.05, 0.0));
        root.add_container(Container::new("Child", Vec2::splat(0.5)));
        root.set_parent_size(Vec2::new(200.0, 100.0));
        assert_eq!(root.padding(), Vec2::new(20.0, 10.0));

        root.set_size_proportions(Vec2::splat(0.5));
        assert_eq!(root.size(), Vec2::new(100.0, 50.0));
        assert_eq!(root.padding(), Vec2::new(10.0, 5.0));
        assert_eq!(root.spacing(), Vec2::new(5.0, 0.0));
        assert_eq!(
            root.get_container("Child").unwrap().size(),
            Vec2::new(50.0, 25.0)
        );
    }

    #[test]
    fn test_lookup_by_name_and_kind() {
        let mut root = Container::new("Root", Vec2::splat(1.0));
        root.add_container(Container::new("A", Vec2::splat(0.5)));
        root.add_leaf(Box::new(Probe::new("A", Vec2::splat(0.5))));

        assert!(root.get_leaf("A").is_ok());
        assert!(root.get_container("A").is_ok());
        assert_eq!(
            root.get_container("B").err(),
            Some(LayoutError::NotFound("B".into()))
        );

        let mut only_container = Container::new("Root", Vec2::splat(1.0));
        only_container.add_container(Container::new("A", Vec2::splat(0.5)));
        assert_eq!(
            only_container.get_leaf("A").err(),
            Some(LayoutError::TypeMismatch {
                name: "A".into(),
                expected: NodeKind::Leaf,
            })
        );
    }

    #[test]
    fn test_get_leaf_as_downcasts() {
        let mut root = Container::new("Root", Vec2::splat(1.0));
        root.add_leaf(Box::new(Probe::new("p", Vec2::splat(0.5)).handling(true)));

        assert!(root.get_leaf_as::<Probe>("p").unwrap().handles);
        root.get_leaf_as_mut::<Probe>("p").unwrap().handles = false;
        assert!(!root.get_leaf_as::<Probe>("p").unwrap().handles);
    }

    #[test]
    fn test_remove_returns_subtree_and_keeps_order() {
        let mut root = Container::new("Root", Vec2::splat(1.0));
        let mut group = Container::new("Group", Vec2::splat(0.5));
        group.add_leaf(Box::new(Probe::new("inside", Vec2::splat(0.5))));
        root.add_leaf(Box::new(Probe::new("first", Vec2::splat(0.1))));
        root.add_container(group);
        root.add_leaf(Box::new(Probe::new("last", Vec2::splat(0.1))));
        root.refresh_layout();

        let group = root.remove_container("Group").unwrap();
        assert!(root.is_dirty());
        assert!(group.get_leaf("inside").is_ok());

        let names: Vec<&str> = root.children().iter().map(|n| n.name()).collect();
        assert_eq!(names, ["first", "last"]);

        let leaf = root.remove_leaf("last").unwrap();
        assert_eq!(leaf.name(), "last");
        assert_eq!(root.len(), 1);
        assert!(root.remove_leaf("last").is_err());
    }

    #[test]
    fn test_first_handler_stops_propagation() {
        let calls: [Rc<Cell<u32>>; 3] = Default::default();
        let fired = Rc::new(Cell::new(0));
        let fired_in_callback = Rc::clone(&fired);

        let mut root = Container::new("Root", Vec2::splat(1.0))
            .with_callback(move || fired_in_callback.set(fired_in_callback.get() + 1));
        root.add_leaf(Box::new(Probe::new("a", Vec2::ZERO).counting(&calls[0])));
        root.add_leaf(Box::new(
            Probe::new("b", Vec2::ZERO).handling(true).counting(&calls[1]),
        ));
        root.add_leaf(Box::new(Probe::new("c", Vec2::ZERO).counting(&calls[2])));

        assert!(root.handle_event(&press()));
        assert_eq!(calls[0].get(), 1);
        assert_eq!(calls[1].get(), 1);
        assert_eq!(calls[2].get(), 0);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_callback_fires_when_unhandled() {
        let fired = Rc::new(Cell::new(0));
        let fired_in_callback = Rc::clone(&fired);

        let mut root = Container::new("Root", Vec2::splat(1.0))
            .with_callback(move || fired_in_callback.set(fired_in_callback.get() + 1));
        root.add_leaf(Box::new(Probe::new("a", Vec2::ZERO)));
        root.add_leaf(Box::new(Probe::new("b", Vec2::ZERO)));

        assert!(!root.handle_event(&press()));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_disabled_container_still_routes_to_children() {
        let pressed = Rc::new(Cell::new(0));
        let pressed_in_callback = Rc::clone(&pressed);
        let fired = Rc::new(Cell::new(0));
        let fired_in_callback = Rc::clone(&fired);

        let mut root = Container::new("Root", Vec2::splat(1.0))
            .with_callback(move || fired_in_callback.set(fired_in_callback.get() + 1));
        root.add_leaf(Box::new(
            Button::new("Ok", Vec2::splat(1.0), "OK")
                .with_callback(move || pressed_in_callback.set(pressed_in_callback.get() + 1)),
        ));
        root.set_parent_size(Vec2::new(200.0, 100.0));
        root.set_enabled(false);
        root.refresh_layout();
        assert!(!root.is_enabled());

        let at = Event::Press(TouchPoint::new(5, 5));
        assert!(root.handle_event(&at));
        assert_eq!(pressed.get(), 1);
        assert_eq!(fired.get(), 0);

        // the leaf gates itself
        root.get_leaf_as_mut::<Button>("Ok").unwrap().set_enabled(false);
        assert!(!root.handle_event(&at));
        assert_eq!(pressed.get(), 1);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_nested_consumer_stops_outer_siblings() {
        let before = Rc::new(Cell::new(0));
        let inner = Rc::new(Cell::new(0));
        let after = Rc::new(Cell::new(0));
        let group_fired = Rc::new(Cell::new(0));
        let group_fired_in_callback = Rc::clone(&group_fired);

        let mut group = Container::new("Group", Vec2::splat(0.5)).with_callback(move || {
            group_fired_in_callback.set(group_fired_in_callback.get() + 1)
        });
        group.add_leaf(Box::new(Probe::new("idle", Vec2::ZERO)));
        group.add_leaf(Box::new(
            Probe::new("inner", Vec2::ZERO).handling(true).counting(&inner),
        ));

        let mut root = Container::new("Root", Vec2::splat(1.0));
        root.add_leaf(Box::new(Probe::new("before", Vec2::ZERO).counting(&before)));
        root.add_container(group);
        root.add_leaf(Box::new(Probe::new("after", Vec2::ZERO).counting(&after)));

        assert!(root.handle_event(&press()));
        assert_eq!(before.get(), 1);
        assert_eq!(inner.get(), 1);
        assert_eq!(after.get(), 0);
        assert_eq!(group_fired.get(), 0);
    }

    #[test]
    fn test_horizontal_leading_scenario() {
        let mut root = Container::new("Root", Vec2::splat(1.0))
            .with_orientation(Orientation::Horizontal)
            .with_alignment(Alignment::Leading)
            .with_spacing_proportions(Vec2::new(0.05, 0.0));
        root.add_leaf(Box::new(Probe::new("a", Vec2::new(0.25, 1.0))));
        root.add_leaf(Box::new(Probe::new("b", Vec2::new(0.15, 1.0))));
        root.set_parent_size(Vec2::new(200.0, 100.0));
        assert_eq!(root.spacing(), Vec2::new(10.0, 0.0));

        root.draw(&mut surface());

        let a = root.get_leaf("a").unwrap().position();
        let b = root.get_leaf("b").unwrap().position();
        assert_eq!(a, Vec2::new(0.0, 0.0));
        assert_eq!(b, Vec2::new(60.0, 0.0));
    }

    #[test]
    fn test_draw_is_idempotent() {
        let mut root = Container::new("Root", Vec2::splat(1.0))
            .with_orientation(Orientation::Vertical)
            .with_alignment(Alignment::BottomTrailing);
        root.add_leaf(Box::new(Probe::new("a", Vec2::new(0.5, 0.25))));
        root.add_leaf(Box::new(Probe::new("b", Vec2::new(0.25, 0.25))));
        root.set_parent_size(Vec2::new(200.0, 100.0));

        let mut fb = surface();
        root.draw(&mut fb);
        assert!(!root.is_dirty());
        assert_eq!(root.layout_generation(), 1);
        let first: Vec<Vec2> = root.children().iter().map(|n| n.position()).collect();

        root.draw(&mut fb);
        assert_eq!(root.layout_generation(), 1);
        let second: Vec<Vec2> = root.children().iter().map(|n| n.position()).collect();
        assert_eq!(first, second);
        assert_eq!(first, [Vec2::new(100.0, 50.0), Vec2::new(150.0, 75.0)]);
    }

    #[test]
    fn test_dirty_tracking() {
        let mut root = Container::new("Root", Vec2::splat(1.0));
        root.refresh_layout();
        assert!(!root.is_dirty());

        root.set_enabled(false);
        root.set_callback(|| {});
        assert!(!root.is_dirty());

        root.set_visible(true);
        assert!(!root.is_dirty());
        root.set_visible(false);
        assert!(root.is_dirty());

        root.refresh_layout();
        root.set_background(Rgb565::BLUE);
        assert!(root.is_dirty());

        root.refresh_layout();
        root.update_position(Vec2::new(1.0, 0.0));
        assert!(root.is_dirty());
    }

    #[test]
    fn test_nested_container_moves_with_parent() {
        let mut root = Container::new("Root", Vec2::splat(1.0))
            .with_orientation(Orientation::Horizontal)
            .with_alignment(Alignment::TopLeading);
        let mut right = Container::new("Right", Vec2::new(0.5, 1.0))
            .with_alignment(Alignment::TopLeading)
            .with_orientation(Orientation::Vertical);
        right.add_leaf(Box::new(Probe::new("dot", Vec2::new(0.1, 0.1))));
        root.add_container(Container::new("Left", Vec2::new(0.5, 1.0)));
        root.add_container(right);
        root.set_parent_size(Vec2::new(200.0, 100.0));

        root.draw(&mut surface());

        let right = root.get_container("Right").unwrap();
        assert_eq!(right.position(), Vec2::new(100.0, 0.0));
        assert_eq!(right.get_leaf("dot").unwrap().position(), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_validate_reports_degenerate_and_unoriented() {
        let mut root = Container::new("Root", Vec2::splat(1.0));
        root.add_leaf(Box::new(Probe::new("a", Vec2::ZERO)));
        root.add_leaf(Box::new(Probe::new("b", Vec2::ZERO)));

        let diagnostics = root.validate();
        assert_eq!(diagnostics.len(), 2);
        assert!(matches!(
            diagnostics[0],
            Diagnostic::DegenerateGeometry { .. }
        ));
        assert_eq!(
            diagnostics[1],
            Diagnostic::UnorientedChildren {
                name: "Root".into(),
                count: 2,
            }
        );

        root.set_orientation(Orientation::Stacked);
        root.set_parent_size(Vec2::new(10.0, 10.0));
        assert!(root.validate().is_empty());
    }

    #[test]
    fn test_overflow_detection_is_opt_in() {
        let mut root = Container::new("Root", Vec2::splat(1.0))
            .with_orientation(Orientation::Horizontal);
        root.add_leaf(Box::new(Probe::new("a", Vec2::new(0.625, 0.5))));
        root.add_leaf(Box::new(Probe::new("b", Vec2::new(0.375, 0.5))));
        root.set_parent_size(Vec2::new(200.0, 100.0));
        assert_eq!(root.overflow(), None);

        root.set_spacing_proportions(Vec2::new(0.1, 0.0));
        match root.overflow() {
            Some(Diagnostic::OverflowingProportions { required, available, .. }) => {
                assert_eq!(required, Vec2::new(220.0, 50.0));
                assert_eq!(available, Vec2::new(200.0, 100.0));
            }
            other => panic!("expected overflow, got {:?}", other),
        }

        // detection never alters the layout
        root.draw(&mut surface());
        assert_eq!(root.get_leaf("a").unwrap().position().x, -10.0);
    }

    #[test]
    fn test_stacked_overflow_uses_largest_child() {
        let mut root = Container::new("Root", Vec2::splat(1.0))
            .with_orientation(Orientation::Stacked)
            .with_padding_proportions(Vec2::new(0.1, 0.0));
        root.add_leaf(Box::new(Probe::new("a", Vec2::new(0.9, 0.5))));
        root.set_parent_size(Vec2::new(100.0, 100.0));

        assert!(root.overflow().is_some());
    }

    #[test]
    fn test_decoration_drawn_only_when_visible() {
        let mut root = Container::new("Root", Vec2::new(0.5, 0.5)).with_background(Rgb565::RED);
        root.set_parent_size(Vec2::new(200.0, 100.0));

        let mut fb = surface();
        root.draw(&mut fb);
        assert_eq!(fb.pixel(10, 10), Some(Rgb565::RED));
        assert_eq!(fb.pixel(150, 10), Some(Rgb565::BLACK));

        let mut hidden = Container::new("Hidden", Vec2::new(0.5, 0.5)).with_background(Rgb565::RED);
        hidden.set_parent_size(Vec2::new(200.0, 100.0));
        hidden.set_visible(false);
        let mut fb = surface();
        hidden.draw(&mut fb);
        assert_eq!(fb.pixel(10, 10), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_hidden_container_still_draws_children() {
        let mut root = Container::new("Root", Vec2::splat(1.0))
            .with_background(Rgb565::RED)
            .with_orientation(Orientation::Stacked);
        root.add_container(Container::new("Child", Vec2::splat(0.5)).with_background(Rgb565::BLUE));
        root.set_parent_size(Vec2::new(200.0, 100.0));
        root.set_visible(false);

        let mut fb = surface();
        root.draw(&mut fb);
        assert_eq!(fb.pixel(100, 50), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(5, 5), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_clear_decoration() {
        let mut root = Container::new("Root", Vec2::splat(1.0))
            .with_outline(Rgb565::GREEN, 2)
            .with_corner_radius(4);
        assert_eq!(root.style().map(|s| s.border_width), Some(2));
        assert_eq!(root.corner_radius(), 4);

        root.clear_decoration();
        assert!(root.style().is_none());
    }
}
