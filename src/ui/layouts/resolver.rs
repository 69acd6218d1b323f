// src/ui/layouts/resolver.rs
//! Second layout pass: shift placed children according to the alignment.
//!
//! Offsets are applied with [`Element::update_position`], so the placement
//! from the first pass is kept and moved, never replaced.

use alloc::vec::Vec;

use crate::ui::core::Element;
use crate::ui::geometry::{Axis, Vec2};
use crate::ui::layouts::alignment::{Alignment, Orientation};

/// Absolute geometry of the container whose children are being aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub position: Vec2,
    pub size: Vec2,
    pub padding: Vec2,
    /// `size` minus padding on both sides.
    pub interior: Vec2,
}

/// Run the alignment pass matching `orientation`.
///
/// Containers without an orientation share the stacked pass.
pub fn resolve<E: Element>(
    children: &mut [E],
    frame: &Frame,
    orientation: Orientation,
    alignment: Alignment,
) {
    if children.is_empty() {
        return;
    }

    match orientation.primary_axis() {
        Some(axis) => resolve_sequential(children, frame, axis, alignment),
        None => resolve_stacked(children, frame, alignment),
    }
}

/// Align a row (`axis == X`) or column (`axis == Y`) of children.
///
/// The whole run moves as one block on the primary axis. On the secondary
/// axis the run is aligned as if it were as thick as its thickest member,
/// and every child is then aligned inside that band individually.
fn resolve_sequential<E: Element>(
    children: &mut [E],
    frame: &Frame,
    axis: Axis,
    alignment: Alignment,
) {
    let Some(last) = children.last() else {
        return;
    };
    let cross = axis.other();

    let last_position = last.position();
    let last_extent = last.size().along(axis);
    let thickest = children
        .iter()
        .map(|child| child.size().along(cross))
        .fold(f32::MIN, f32::max);

    let inner_corner = frame.position + frame.size - frame.padding;
    let occupied = Vec2::from_axes(axis, last_extent, thickest);
    let buffer = inner_corner - last_position - occupied - frame.padding;

    let scale = alignment.scale();
    let primary_scale = scale.along(axis);
    let cross_scale = scale.along(cross);

    let primary_offset = frame.padding.along(axis) + buffer.along(axis) * primary_scale;
    let cross_base = frame.padding.along(cross) + buffer.along(cross) * cross_scale;

    for child in children.iter_mut() {
        let band_slack = thickest - child.size().along(cross);
        let cross_offset = cross_base + band_slack * cross_scale;
        child.update_position(Vec2::from_axes(axis, primary_offset, cross_offset));
    }
}

/// Align every child on its own inside the padded interior.
fn resolve_stacked<E: Element>(children: &mut [E], frame: &Frame, alignment: Alignment) {
    let scale = alignment.stacked_scale();

    let offsets: Vec<Vec2> = children
        .iter()
        .map(|child| frame.padding + (frame.interior - child.size()).component_mul(scale))
        .collect();

    for (child, offset) in children.iter_mut().zip(offsets) {
        child.update_position(offset);
    }
}
