//! Serializable layout and display configuration
//!
//! Configs are plain serde structs; the byte format is left to the host.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use serde::{Deserialize, Serialize};

use crate::ui::geometry::Vec2;
use crate::ui::layouts::{Alignment, Container, Orientation};

/// Layout parameters of a container, without its children.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ContainerConfig {
    pub size_proportions: Vec2,
    #[serde(default)]
    pub padding_proportions: Vec2,
    #[serde(default)]
    pub spacing_proportions: Vec2,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub alignment: Alignment,
}

impl Default for ContainerConfig {
    /// Fills the parent, no padding or spacing, centered
    fn default() -> Self {
        Self {
            size_proportions: Vec2::splat(1.0),
            padding_proportions: Vec2::ZERO,
            spacing_proportions: Vec2::ZERO,
            orientation: Orientation::default(),
            alignment: Alignment::default(),
        }
    }
}

impl ContainerConfig {
    /// Create an empty container from this config.
    pub fn build(&self, name: &str) -> Container {
        let mut container = Container::new(name, self.size_proportions);
        self.apply(&mut container);
        container
    }

    /// Overwrite the layout parameters of an existing container.
    pub fn apply(&self, container: &mut Container) {
        container.set_size_proportions(self.size_proportions);
        container.set_padding_proportions(self.padding_proportions);
        container.set_spacing_proportions(self.spacing_proportions);
        container.set_orientation(self.orientation);
        container.set_alignment(self.alignment);
    }
}

/// Physical display dimensions in pixels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for DisplayConfig {
    /// 320x240, the panel the simulator emulates
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
        }
    }
}

impl DisplayConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::core::Element;

    #[test]
    fn test_build_applies_every_field() {
        let config = ContainerConfig {
            size_proportions: Vec2::new(0.5, 0.25),
            padding_proportions: Vec2::new(0.1, 0.1),
            spacing_proportions: Vec2::new(0.0, 0.05),
            orientation: Orientation::Vertical,
            alignment: Alignment::BottomLeading,
        };

        let mut container = config.build("Panel");
        container.set_parent_size(Vec2::new(400.0, 400.0));

        assert_eq!(container.name(), "Panel");
        assert_eq!(container.size(), Vec2::new(200.0, 100.0));
        assert_eq!(container.padding(), Vec2::new(20.0, 10.0));
        assert_eq!(container.spacing(), Vec2::new(0.0, 5.0));
        assert_eq!(container.orientation(), Orientation::Vertical);
        assert_eq!(container.alignment(), Alignment::BottomLeading);
    }

    #[test]
    fn test_container_config_survives_postcard() {
        let config = ContainerConfig {
            orientation: Orientation::Stacked,
            alignment: Alignment::Trailing,
            ..ContainerConfig::default()
        };
        let bytes = postcard::to_allocvec(&config).unwrap();
        assert_eq!(postcard::from_bytes::<ContainerConfig>(&bytes), Ok(config));
    }

    #[test]
    fn test_truncated_blob_is_rejected() {
        let bytes = postcard::to_allocvec(&DisplayConfig::default()).unwrap();
        assert!(postcard::from_bytes::<DisplayConfig>(&bytes[..1]).is_err());
    }

    #[test]
    fn test_display_defaults() {
        let display = DisplayConfig::default();
        assert_eq!(display.size(), Size::new(320, 240));
        assert_eq!(display.bounds().top_left, Point::zero());
    }
}
