// src/ui/layouts/alignment.rs
//! Layout orientation and the nine-way alignment table

use serde::{Deserialize, Serialize};

use crate::ui::geometry::{Axis, Vec2};

/// Direction in which a container places its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// No orientation: every child lands on the container's anchor
    #[default]
    None,
    /// Children placed left to right
    Horizontal,
    /// Children placed top to bottom
    Vertical,
    /// Children overlap, each aligned on its own inside the container
    Stacked,
}

impl Orientation {
    /// Axis along which placement advances, if any.
    pub fn primary_axis(self) -> Option<Axis> {
        match self {
            Orientation::Horizontal => Some(Axis::X),
            Orientation::Vertical => Some(Axis::Y),
            Orientation::None | Orientation::Stacked => None,
        }
    }
}

/// Where children sit inside the container's free space.
///
/// The vertical part (Top / center / Bottom) and the horizontal part
/// (Leading / center / Trailing) are independent; a bare `Leading` or
/// `Trailing` is vertically centered and a bare `Top` or `Bottom` is
/// horizontally centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    TopLeading,
    Top,
    TopTrailing,
    Leading,
    #[default]
    Center,
    Trailing,
    BottomLeading,
    Bottom,
    BottomTrailing,
}

impl Alignment {
    /// Fraction of the free space placed before the children, per axis.
    ///
    /// `x` is 0 / 0.5 / 1 for Leading / center / Trailing and `y` is
    /// 0 / 0.5 / 1 for Top / center / Bottom.
    pub const fn scale(self) -> Vec2 {
        match self {
            Alignment::TopLeading => Vec2::new(0.0, 0.0),
            Alignment::Top => Vec2::new(0.5, 0.0),
            Alignment::TopTrailing => Vec2::new(1.0, 0.0),
            Alignment::Leading => Vec2::new(0.0, 0.5),
            Alignment::Center => Vec2::new(0.5, 0.5),
            Alignment::Trailing => Vec2::new(1.0, 0.5),
            Alignment::BottomLeading => Vec2::new(0.0, 1.0),
            Alignment::Bottom => Vec2::new(0.5, 1.0),
            Alignment::BottomTrailing => Vec2::new(1.0, 1.0),
        }
    }

    /// Scale used by stacked layouts.
    ///
    /// Horizontally identical to [`scale`](Self::scale). Vertically the Top
    /// row is treated like the center row, so `y` is only ever 0.5 or 1.
    pub fn stacked_scale(self) -> Vec2 {
        let scale = self.scale();
        let y = if scale.y < 1.0 { 0.5 } else { 1.0 };
        Vec2::new(scale.x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Alignment::default(), Alignment::Center);
        assert_eq!(Orientation::default(), Orientation::None);
    }

    #[test]
    fn test_scale_table_is_a_grid() {
        let grid = [
            Alignment::TopLeading,
            Alignment::Top,
            Alignment::TopTrailing,
            Alignment::Leading,
            Alignment::Center,
            Alignment::Trailing,
            Alignment::BottomLeading,
            Alignment::Bottom,
            Alignment::BottomTrailing,
        ];
        for (i, alignment) in grid.iter().enumerate() {
            let expected = Vec2::new((i % 3) as f32 * 0.5, (i / 3) as f32 * 0.5);
            assert_eq!(alignment.scale(), expected, "{:?}", alignment);
        }
    }

    #[test]
    fn test_stacked_scale_never_top() {
        assert_eq!(Alignment::TopLeading.stacked_scale(), Vec2::new(0.0, 0.5));
        assert_eq!(Alignment::Top.stacked_scale(), Vec2::new(0.5, 0.5));
        assert_eq!(Alignment::Trailing.stacked_scale(), Vec2::new(1.0, 0.5));
        assert_eq!(Alignment::Bottom.stacked_scale(), Vec2::new(0.5, 1.0));
    }

    #[test]
    fn test_primary_axis() {
        assert_eq!(Orientation::Horizontal.primary_axis(), Some(Axis::X));
        assert_eq!(Orientation::Vertical.primary_axis(), Some(Axis::Y));
        assert_eq!(Orientation::Stacked.primary_axis(), None);
    }
}
