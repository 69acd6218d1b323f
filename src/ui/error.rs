// src/ui/error.rs
//! Error and diagnostic types for the element tree

use alloc::string::String;
use core::fmt;
use thiserror_no_std::Error;

use crate::ui::geometry::Vec2;

/// The two variants a child of a container can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Container,
    Leaf,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Container => f.write_str("container"),
            NodeKind::Leaf => f.write_str("leaf"),
        }
    }
}

/// Failures of child lookup and removal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No child carries the requested name.
    #[error("no element named '{0}'")]
    NotFound(String),
    /// A child carries the name, but it is the other kind of element.
    #[error("element '{name}' is not a {expected}")]
    TypeMismatch { name: String, expected: NodeKind },
}

/// Non-fatal findings about a container's geometry.
///
/// Diagnostics are logged when a container recomputes its layout; the layout
/// proceeds with whatever geometry resulted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Computed size is zero or negative on at least one axis.
    #[error("container '{name}' has faulty size {size}")]
    DegenerateGeometry { name: String, size: Vec2 },
    /// Several children share one anchor because no orientation is set.
    #[error("container '{name}' places {count} children without a layout orientation")]
    UnorientedChildren { name: String, count: usize },
    /// Children, spacing and padding need more room than the container has.
    #[error("container '{name}' needs {required} but only has {available}")]
    OverflowingProportions {
        name: String,
        required: Vec2,
        available: Vec2,
    },
}
