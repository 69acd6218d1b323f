// src/ui/layouts/box_model.rs
//! Proportional box model: turns proportions into absolute geometry
//!
//! A box only stores proportions and the most recent parent size. Size,
//! padding and spacing are derived from those two inputs and recomputed
//! whenever either changes, so reads are always consistent.

use crate::ui::geometry::Vec2;

/// Proportions and derived absolute geometry of a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxModel {
    size_proportions: Vec2,
    padding_proportions: Vec2,
    spacing_proportions: Vec2,

    parent_size: Vec2,
    size: Vec2,
    padding: Vec2,
    spacing: Vec2,
}

impl BoxModel {
    /// New box with zero padding and spacing and no parent size yet.
    pub fn new(size_proportions: Vec2) -> Self {
        Self {
            size_proportions,
            padding_proportions: Vec2::ZERO,
            spacing_proportions: Vec2::ZERO,
            parent_size: Vec2::ZERO,
            size: Vec2::ZERO,
            padding: Vec2::ZERO,
            spacing: Vec2::ZERO,
        }
    }

    /// Store the parent size and recompute the size.
    ///
    /// Padding and spacing are *not* refreshed here; the owner first cascades
    /// the new size to its children and then calls
    /// [`refresh_insets`](Self::refresh_insets).
    pub fn set_parent_size(&mut self, parent_size: Vec2) {
        self.parent_size = parent_size;
        self.compute_size();
    }

    pub fn set_size_proportions(&mut self, proportions: Vec2) {
        self.size_proportions = proportions;
        self.compute_size();
    }

    pub fn set_padding_proportions(&mut self, proportions: Vec2) {
        self.padding_proportions = proportions;
        self.compute_padding();
    }

    pub fn set_spacing_proportions(&mut self, proportions: Vec2) {
        self.spacing_proportions = proportions;
        self.compute_spacing();
    }

    /// Recompute padding and spacing from the current size.
    pub fn refresh_insets(&mut self) {
        self.compute_padding();
        self.compute_spacing();
    }

    pub fn size_proportions(&self) -> Vec2 {
        self.size_proportions
    }

    pub fn padding_proportions(&self) -> Vec2 {
        self.padding_proportions
    }

    pub fn spacing_proportions(&self) -> Vec2 {
        self.spacing_proportions
    }

    pub fn parent_size(&self) -> Vec2 {
        self.parent_size
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn padding(&self) -> Vec2 {
        self.padding
    }

    pub fn spacing(&self) -> Vec2 {
        self.spacing
    }

    /// Size left for children once padding is removed from both sides.
    pub fn interior(&self) -> Vec2 {
        self.size - self.padding * 2.0
    }

    fn compute_size(&mut self) {
        self.size = self.parent_size.component_mul(self.size_proportions);
    }

    fn compute_padding(&mut self) {
        self.padding = self.size.component_mul(self.padding_proportions);
    }

    fn compute_spacing(&mut self) {
        self.spacing = self.size.component_mul(self.spacing_proportions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_from_parent() {
        let mut model = BoxModel::new(Vec2::new(0.5, 0.25));
        assert_eq!(model.size(), Vec2::ZERO);

        model.set_parent_size(Vec2::new(800.0, 600.0));
        assert_eq!(model.parent_size(), Vec2::new(800.0, 600.0));
        assert_eq!(model.size(), Vec2::new(400.0, 150.0));
    }

    #[test]
    fn test_insets_follow_size() {
        let mut model = BoxModel::new(Vec2::splat(1.0));
        model.set_parent_size(Vec2::new(200.0, 100.0));
        model.set_padding_proportions(Vec2::new(0.1, 0.1));
        model.set_spacing_proportions(Vec2::new(0.05, 0.0));
        assert_eq!(model.padding(), Vec2::new(20.0, 10.0));
        assert_eq!(model.spacing(), Vec2::new(10.0, 0.0));
        assert_eq!(model.interior(), Vec2::new(160.0, 80.0));

        model.set_size_proportions(Vec2::splat(0.5));
        model.refresh_insets();
        assert_eq!(model.size(), Vec2::new(100.0, 50.0));
        assert_eq!(model.padding(), Vec2::new(10.0, 5.0));
        assert_eq!(model.spacing(), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_zero_parent_is_degenerate() {
        let mut model = BoxModel::new(Vec2::splat(0.5));
        model.set_parent_size(Vec2::ZERO);
        assert!(model.size().is_degenerate());
    }
}
