//! Proportional layout for retained-mode UI trees on embedded-graphics
//! surfaces.
//!
//! Containers size, space and align their children purely from proportions
//! of the parent size, draw into an in-memory [`framebuffer::FrameBuffer`]
//! and route touch events depth-first through the tree.

#![no_std]

extern crate alloc;

pub mod config;
pub mod framebuffer;
pub mod screen;
pub mod ui;
