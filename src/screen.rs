// src/screen.rs
//! Screens and screen navigation
//!
//! A [`Screen`] is a named root container sized to the display. The
//! [`ScreenManager`] owns every screen, draws the current one and routes
//! events to it. Screens never hold a reference to the manager; they ask for
//! transitions through a [`Navigator`], and the manager applies the request
//! once the event that caused it has been dispatched.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::Vec;
use log::{debug, warn};
use thiserror_no_std::Error;

use crate::framebuffer::FrameBuffer;
use crate::ui::core::{Element, Event, Leaf};
use crate::ui::error::LayoutError;
use crate::ui::geometry::Vec2;
use crate::ui::layouts::{Alignment, Container, Orientation};

/// Maximum number of screens a manager can hold
pub const MAX_SCREENS: usize = 8;

/// Name of the root container of every screen
pub const ROOT_NAME: &str = "Root";

/// Screen registration and navigation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    #[error("screen '{0}' already exists")]
    Duplicate(String),
    #[error("screen limit reached, cannot add '{0}'")]
    Full(String),
    #[error("no screen named '{0}'")]
    Unknown(String),
}

// ============================================================================
// Navigator
// ============================================================================

/// Cloneable handle for requesting a screen transition.
///
/// Widget callbacks capture a clone and call [`request`](Navigator::request);
/// the [`ScreenManager`] that handed it out performs the transition after the
/// current event has been dispatched. A later request replaces an earlier
/// one that has not been applied yet.
#[derive(Clone, Default)]
pub struct Navigator {
    pending: Rc<RefCell<Option<String>>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for a transition to the screen named `name`.
    pub fn request(&self, name: &str) {
        *self.pending.borrow_mut() = Some(String::from(name));
    }

    /// Name of the screen requested but not yet shown.
    pub fn pending(&self) -> Option<String> {
        self.pending.borrow().clone()
    }

    fn take(&self) -> Option<String> {
        self.pending.borrow_mut().take()
    }
}

// ============================================================================
// Screen
// ============================================================================

/// Named root container filling the display.
pub struct Screen {
    name: String,
    root: Container,
    navigator: Option<Navigator>,
}

impl Screen {
    /// Create a screen whose root container fills `display_size`.
    pub fn new(name: &str, display_size: Size) -> Self {
        let mut root = Container::new(ROOT_NAME, Vec2::splat(1.0));
        root.set_position(Vec2::ZERO);
        root.set_parent_size(display_size.into());

        Self {
            name: String::from(name),
            root,
            navigator: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Re-seed the root container with a new display size.
    pub fn resize(&mut self, display_size: Size) {
        self.root.set_parent_size(display_size.into());
    }

    pub fn root(&self) -> &Container {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Container {
        &mut self.root
    }

    /// Handle for requesting transitions, available once the screen has been
    /// added to a [`ScreenManager`].
    pub fn navigator(&self) -> Option<&Navigator> {
        self.navigator.as_ref()
    }

    fn set_navigator(&mut self, navigator: Navigator) {
        self.navigator = Some(navigator);
    }

    pub fn add_container(&mut self, container: Container) {
        self.root.add_container(container);
    }

    pub fn add_leaf(&mut self, leaf: Box<dyn Leaf>) {
        self.root.add_leaf(leaf);
    }

    pub fn remove_container(&mut self, name: &str) -> Result<Box<Container>, LayoutError> {
        self.root.remove_container(name)
    }

    pub fn remove_leaf(&mut self, name: &str) -> Result<Box<dyn Leaf>, LayoutError> {
        self.root.remove_leaf(name)
    }

    pub fn set_padding_proportions(&mut self, proportions: Vec2) {
        self.root.set_padding_proportions(proportions);
    }

    pub fn set_spacing_proportions(&mut self, proportions: Vec2) {
        self.root.set_spacing_proportions(proportions);
    }

    pub fn set_outline(&mut self, color: Rgb565, thickness: u32) {
        self.root.set_outline(color, thickness);
    }

    pub fn set_background(&mut self, color: Rgb565) {
        self.root.set_background(color);
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.root.set_alignment(alignment);
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.root.set_orientation(orientation);
    }

    pub fn draw(&mut self, surface: &mut FrameBuffer) {
        self.root.draw(surface);
    }

    pub fn handle_event(&mut self, event: &Event) -> bool {
        self.root.handle_event(event)
    }
}

// ============================================================================
// Screen manager
// ============================================================================

/// Owns the screens and tracks which one is shown.
///
/// The current screen is remembered by name, so adding or removing other
/// screens never changes which screen is current.
pub struct ScreenManager {
    screens: Vec<Screen, MAX_SCREENS>,
    current: Option<String>,
    navigator: Navigator,
}

impl Default for ScreenManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenManager {
    pub fn new() -> Self {
        Self {
            screens: Vec::new(),
            current: None,
            navigator: Navigator::new(),
        }
    }

    /// A handle that requests transitions on this manager.
    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    /// Register a screen. The first screen added becomes the current one.
    pub fn add_screen(&mut self, mut screen: Screen) -> Result<(), ScreenError> {
        if self.position(screen.name()).is_some() {
            return Err(ScreenError::Duplicate(String::from(screen.name())));
        }

        screen.set_navigator(self.navigator.clone());
        let name = String::from(screen.name());
        self.screens
            .push(screen)
            .map_err(|screen| ScreenError::Full(String::from(screen.name())))?;

        if self.current.is_none() {
            debug!("Start screen: {}", name);
            self.current = Some(name);
        }
        Ok(())
    }

    /// Unregister a screen and hand it back.
    ///
    /// Removing the current screen makes the first remaining screen current.
    pub fn remove_screen(&mut self, name: &str) -> Result<Screen, ScreenError> {
        let index = self
            .position(name)
            .ok_or_else(|| ScreenError::Unknown(String::from(name)))?;
        let screen = self.screens.remove(index);

        if self.current.as_deref() == Some(name) {
            self.current = self.screens.first().map(|s| String::from(s.name()));
            debug!("Removed current screen '{}', now {:?}", name, self.current);
        }
        Ok(screen)
    }

    /// Make the screen named `name` the current one.
    pub fn transition_to(&mut self, name: &str) -> Result<(), ScreenError> {
        if self.position(name).is_none() {
            return Err(ScreenError::Unknown(String::from(name)));
        }
        debug!("Navigating to screen: {}", name);
        self.current = Some(String::from(name));
        Ok(())
    }

    pub fn screen(&self, name: &str) -> Result<&Screen, ScreenError> {
        self.screens
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| ScreenError::Unknown(String::from(name)))
    }

    pub fn screen_mut(&mut self, name: &str) -> Result<&mut Screen, ScreenError> {
        self.screens
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| ScreenError::Unknown(String::from(name)))
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current(&self) -> Option<&Screen> {
        let name = self.current.as_deref()?;
        self.screens.iter().find(|s| s.name() == name)
    }

    pub fn current_mut(&mut self) -> Option<&mut Screen> {
        let name = self.current.as_deref()?;
        self.screens.iter_mut().find(|s| s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Re-seed every screen with a new display size.
    pub fn resize(&mut self, display_size: Size) {
        for screen in self.screens.iter_mut() {
            screen.resize(display_size);
        }
    }

    /// Draw the current screen, if any.
    pub fn draw(&mut self, surface: &mut FrameBuffer) {
        match self.current_mut() {
            Some(screen) => screen.draw(surface),
            None => warn!("No screen is set as the start screen"),
        }
    }

    /// Route an event to the current screen, then apply any transition it
    /// requested.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let handled = self
            .current_mut()
            .map(|screen| screen.handle_event(event))
            .unwrap_or(false);

        debug!("Event {:?} handled: {}", event, handled);
        self.apply_pending();
        handled
    }

    /// Perform a transition requested through the [`Navigator`].
    ///
    /// A request for an unknown screen is logged and dropped.
    pub fn apply_pending(&mut self) {
        if let Some(name) = self.navigator.take()
            && let Err(e) = self.transition_to(&name)
        {
            warn!("Couldn't transition: {}", e);
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.screens.iter().position(|s| s.name() == name)
    }
}
