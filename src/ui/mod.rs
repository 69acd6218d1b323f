// src/ui/mod.rs
//! Ratio UI - proportional layout for retained-mode element trees
//!
//! This module provides:
//! - Core traits shared by containers and leaf widgets
//! - The proportional layout engine (box model, placement, alignment)
//! - Decoration styling
//! - Reference widgets (buttons, labels)

pub mod components;
pub mod core;
pub mod error;
pub mod geometry;
pub mod layouts;
pub mod styling;

// Re-export commonly used items
pub use components::{Button, ButtonState, Label, LeafState, TextSize};
pub use core::{Callback, Element, Event, Leaf, TouchPoint};
pub use error::{Diagnostic, LayoutError, NodeKind};
pub use geometry::{Axis, Vec2};
pub use layouts::{Alignment, BoxModel, Container, ElementTree, Node, Orientation};
pub use styling::{ButtonVariant, ColorPalette, Style};
