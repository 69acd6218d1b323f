// src/ui/components/mod.rs
//! Reference leaf widgets

pub mod button;
pub mod leaf;
pub mod text;

pub use button::{Button, ButtonState};
pub use leaf::LeafState;
pub use text::{Label, TextSize};
