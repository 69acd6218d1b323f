// src/ui/layouts/tree.rs
//! Ordered, exclusively owned children of a container.
//!
//! Children are either nested [`Container`]s or [`Leaf`] widgets. Both are
//! stored in one vector because insertion order drives placement. Every
//! [`Element`] call on a [`Node`] is delegated to the concrete variant.

use core::any::Any;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use embedded_graphics::primitives::Rectangle;

use crate::framebuffer::FrameBuffer;
use crate::ui::core::{Element, Event, Leaf};
use crate::ui::error::{LayoutError, NodeKind};
use crate::ui::geometry::Vec2;
use crate::ui::layouts::container::Container;

/// One child of a container.
pub enum Node {
    Container(Box<Container>),
    Leaf(Box<dyn Leaf>),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Container(_) => NodeKind::Container,
            Node::Leaf(_) => NodeKind::Leaf,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Node::Container(container) => Some(container.as_ref()),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&dyn Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf.as_ref()),
            Node::Container(_) => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Node::Container(container) => Some(container.as_mut()),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_leaf_mut(&mut self) -> Option<&mut dyn Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf.as_mut()),
            Node::Container(_) => None,
        }
    }

    /// Leaf as `Any`, for downcasting to the concrete widget type.
    pub fn as_any_leaf(&self) -> Option<&dyn Any> {
        match self {
            Node::Leaf(leaf) => {
                let any: &dyn Any = &**leaf;
                Some(any)
            }
            Node::Container(_) => None,
        }
    }

    pub fn as_any_leaf_mut(&mut self) -> Option<&mut dyn Any> {
        match self {
            Node::Leaf(leaf) => {
                let any: &mut dyn Any = &mut **leaf;
                Some(any)
            }
            Node::Container(_) => None,
        }
    }

    pub fn into_container(self) -> Option<Box<Container>> {
        match self {
            Node::Container(container) => Some(container),
            Node::Leaf(_) => None,
        }
    }

    pub fn into_leaf(self) -> Option<Box<dyn Leaf>> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Container(_) => None,
        }
    }
}

impl Element for Node {
    fn name(&self) -> &str {
        match self {
            Node::Container(container) => container.name(),
            Node::Leaf(leaf) => leaf.name(),
        }
    }

    fn position(&self) -> Vec2 {
        match self {
            Node::Container(container) => container.position(),
            Node::Leaf(leaf) => leaf.position(),
        }
    }

    fn size(&self) -> Vec2 {
        match self {
            Node::Container(container) => container.size(),
            Node::Leaf(leaf) => leaf.size(),
        }
    }

    fn set_position(&mut self, position: Vec2) {
        match self {
            Node::Container(container) => container.set_position(position),
            Node::Leaf(leaf) => leaf.set_position(position),
        }
    }

    fn update_position(&mut self, offset: Vec2) {
        match self {
            Node::Container(container) => container.update_position(offset),
            Node::Leaf(leaf) => leaf.update_position(offset),
        }
    }

    fn set_parent_size(&mut self, parent_size: Vec2) {
        match self {
            Node::Container(container) => container.set_parent_size(parent_size),
            Node::Leaf(leaf) => leaf.set_parent_size(parent_size),
        }
    }

    fn draw(&mut self, surface: &mut FrameBuffer) {
        match self {
            Node::Container(container) => Element::draw(container.as_mut(), surface),
            Node::Leaf(leaf) => leaf.draw(surface),
        }
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        match self {
            Node::Container(container) => Element::handle_event(container.as_mut(), event),
            Node::Leaf(leaf) => leaf.handle_event(event),
        }
    }

    fn bounds(&self) -> Rectangle {
        match self {
            Node::Container(container) => container.bounds(),
            Node::Leaf(leaf) => leaf.bounds(),
        }
    }
}

/// Ordered collection of [`Node`]s with name based lookup.
#[derive(Default)]
pub struct ElementTree {
    nodes: Vec<Node>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Index of the first child named `name` that is of kind `kind`.
    ///
    /// A name that only matches children of the other kind is a
    /// [`LayoutError::TypeMismatch`]; a name that matches nothing is
    /// [`LayoutError::NotFound`].
    pub fn find(&self, name: &str, kind: NodeKind) -> Result<usize, LayoutError> {
        let mut name_matched = false;

        for (index, node) in self.nodes.iter().enumerate() {
            if node.name() != name {
                continue;
            }
            if node.kind() == kind {
                return Ok(index);
            }
            name_matched = true;
        }

        if name_matched {
            Err(LayoutError::TypeMismatch {
                name: String::from(name),
                expected: kind,
            })
        } else {
            Err(LayoutError::NotFound(String::from(name)))
        }
    }

    pub fn get(&self, name: &str, kind: NodeKind) -> Result<&Node, LayoutError> {
        let index = self.find(name, kind)?;
        Ok(&self.nodes[index])
    }

    pub fn get_mut(&mut self, name: &str, kind: NodeKind) -> Result<&mut Node, LayoutError> {
        let index = self.find(name, kind)?;
        Ok(&mut self.nodes[index])
    }

    /// Remove and return a child, keeping the order of the remaining ones.
    pub fn remove(&mut self, name: &str, kind: NodeKind) -> Result<Node, LayoutError> {
        let index = self.find(name, kind)?;
        Ok(self.nodes.remove(index))
    }
}
