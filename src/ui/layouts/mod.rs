// src/ui/layouts/mod.rs
//! Proportional layout engine
//!
//! - [`box_model`] turns proportions into absolute size, padding and spacing
//! - [`tree`] owns the ordered children of a container
//! - [`placement`] and [`resolver`] are the two layout passes
//! - [`container`] ties them together behind a dirty flag

pub mod alignment;
pub mod box_model;
pub mod container;
pub mod placement;
pub mod resolver;
pub mod tree;

pub use alignment::{Alignment, Orientation};
pub use box_model::BoxModel;
pub use container::Container;
pub use tree::{ElementTree, Node};
