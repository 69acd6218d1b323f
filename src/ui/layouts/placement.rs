// src/ui/layouts/placement.rs
//! First layout pass: sequential placement along the orientation axis.

use crate::ui::core::Element;
use crate::ui::geometry::{Axis, Vec2};
use crate::ui::layouts::alignment::Orientation;

/// Anchor every child at a cursor that starts at `origin`.
///
/// Horizontal and vertical orientations advance the cursor by each child's
/// extent plus the spacing on that axis. `None` and `Stacked` leave it in
/// place, so all children share the origin until alignment runs.
pub fn place<E: Element>(children: &mut [E], origin: Vec2, orientation: Orientation, spacing: Vec2) {
    let mut cursor = origin;

    for child in children.iter_mut() {
        child.set_position(cursor);

        match orientation.primary_axis() {
            Some(Axis::X) => cursor.x += child.size().x + spacing.x,
            Some(Axis::Y) => cursor.y += child.size().y + spacing.y,
            None => {}
        }
    }
}
