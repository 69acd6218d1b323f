//! Desktop simulator for the ratio-ui layout engine.
//!
//! Builds a couple of demo screens and renders them in an SDL2 window via
//! `embedded-graphics-simulator`.
//!
//! # Key bindings
//!
//! | Key | Action             |
//! |-----|--------------------|
//! | 1   | Start screen       |
//! | 2   | Controls screen    |
//! | D   | Dump overflow info |
//! | Q   | Quit               |
//!
//! Mouse presses, drags and releases are forwarded as touch events.

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info, warn};

use ratio_ui::config::{ContainerConfig, DisplayConfig};
use ratio_ui::framebuffer::FrameBuffer;
use ratio_ui::screen::{Navigator, Screen, ScreenManager};
use ratio_ui::ui::styling::{ButtonVariant, ColorPalette, Style};
use ratio_ui::ui::{
    Alignment, Button, Container, Event, Label, Orientation, TextSize, TouchPoint, Vec2,
};

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

const START_SCREEN: &str = "Start";
const CONTROLS_SCREEN: &str = "Controls";

// ---------------------------------------------------------------------------
// Demo screens
// ---------------------------------------------------------------------------

/// Blue screen with a centered magenta panel and a button to the controls.
fn start_screen(display: &DisplayConfig, navigator: Navigator) -> Screen {
    let mut screen = Screen::new(START_SCREEN, display.size());
    screen.set_background(Rgb565::BLUE);
    screen.set_orientation(Orientation::Stacked);

    let mut panel = Container::new("Panel", Vec2::splat(0.5))
        .with_background(Rgb565::MAGENTA)
        .with_corner_radius(6)
        .with_orientation(Orientation::Vertical)
        .with_padding_proportions(Vec2::splat(0.05))
        .with_spacing_proportions(Vec2::new(0.0, 0.05));

    panel.add_leaf(Box::new(
        Label::new("Title", Vec2::new(1.0, 0.3), "ratio-ui").with_size(TextSize::Large),
    ));
    panel.add_leaf(Box::new(
        Button::new("Next", Vec2::new(0.6, 0.3), "Controls")
            .with_callback(move || navigator.request(CONTROLS_SCREEN)),
    ));

    screen.add_container(panel);
    screen
}

/// A row of buttons plus a label counting the presses.
fn controls_screen(display: &DisplayConfig, navigator: Navigator) -> Screen {
    let palette = ColorPalette::default();
    let mut screen = Screen::new(CONTROLS_SCREEN, display.size());
    screen.set_background(palette.background);
    screen.set_orientation(Orientation::Vertical);
    screen.set_spacing_proportions(Vec2::new(0.0, 0.05));

    let row_config = ContainerConfig {
        size_proportions: Vec2::new(0.9, 0.3),
        padding_proportions: Vec2::new(0.02, 0.1),
        spacing_proportions: Vec2::new(0.04, 0.0),
        orientation: Orientation::Horizontal,
        alignment: Alignment::Center,
    };

    let mut row = row_config.build("Buttons");
    row.set_outline(palette.border, 1);
    row.set_corner_radius(4);

    let variants = [
        ("Primary", ButtonVariant::Primary),
        ("Secondary", ButtonVariant::Secondary),
        ("Outline", ButtonVariant::Outline),
    ];
    for (name, variant) in variants {
        row.add_leaf(Box::new(
            Button::new(name, Vec2::new(0.28, 1.0), name)
                .with_variant(variant)
                .with_callback(move || info!("{} pressed", name)),
        ));
    }

    let back = Button::new("Back", Vec2::new(0.4, 0.2), "Back")
        .with_variant(ButtonVariant::Pill(palette.error))
        .with_callback(move || navigator.request(START_SCREEN));

    let header = Label::new("Header", Vec2::new(1.0, 0.2), "Controls")
        .with_style(Style::new().with_foreground(palette.text_secondary));
    screen.add_leaf(Box::new(header));
    screen.add_container(row);
    screen.add_leaf(Box::new(back));
    screen
}

/// Map an SDL keycode to a screen name.
fn keycode_to_screen(keycode: Keycode) -> Option<&'static str> {
    match keycode {
        Keycode::Num1 | Keycode::Kp1 => Some(START_SCREEN),
        Keycode::Num2 | Keycode::Kp2 => Some(CONTROLS_SCREEN),
        _ => None,
    }
}

fn touch_point(point: Point) -> TouchPoint {
    TouchPoint::new(point.x.max(0) as u16, point.y.max(0) as u16)
}

/// Log overflowing containers on the current screen.
fn report_overflow(manager: &ScreenManager) {
    let Some(screen) = manager.current() else {
        return;
    };

    let root = screen.root();
    let mut found = false;
    for diagnostic in root
        .overflow()
        .into_iter()
        .chain(root.children().iter().filter_map(|child| child.as_container()?.overflow()))
    {
        warn!("{}", diagnostic);
        found = true;
    }
    if !found {
        info!("No overflow on '{}'", screen.name());
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();

    let display_config = DisplayConfig::default();
    info!("Starting ratio-ui simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        display_config.width, display_config.height, WINDOW_SCALE
    );
    info!("Keys: 1=Start  2=Controls  D=Overflow  Q=Quit");

    let mut display = SimulatorDisplay::<Rgb565>::new(display_config.size());
    let mut framebuffer = FrameBuffer::new(display_config.size());

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Ratio Simulator", &output_settings);

    let mut manager = ScreenManager::new();
    let screens = [
        start_screen(&display_config, manager.navigator()),
        controls_screen(&display_config, manager.navigator()),
    ];
    for screen in screens {
        if let Err(e) = manager.add_screen(screen) {
            error!("{}", e);
        }
    }

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    manager.draw(&mut framebuffer);
    if let Err(e) = framebuffer.flush(&mut display) {
        error!("Flush error: {:?}", e);
    }
    window.update(&display);

    let mut mouse_down = false;
    let mut shown = manager.current_name().map(String::from);

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q || keycode == Keycode::Escape {
                        break 'running;
                    }
                    if keycode == Keycode::D {
                        report_overflow(&manager);
                    }
                    if let Some(target) = keycode_to_screen(keycode)
                        && let Err(e) = manager.transition_to(target)
                    {
                        error!("{}", e);
                    }
                }

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    mouse_down = true;
                    manager.handle_event(&Event::Press(touch_point(point)));
                }

                SimulatorEvent::MouseMove { point } if mouse_down => {
                    manager.handle_event(&Event::Drag(touch_point(point)));
                }

                SimulatorEvent::MouseButtonUp { point, .. } => {
                    mouse_down = false;
                    manager.handle_event(&Event::Release(touch_point(point)));
                }

                _ => {}
            }
        }

        // A new screen starts from a blank surface
        let current = manager.current_name().map(String::from);
        if current != shown {
            info!("Showing {:?}", current);
            let Ok(()) = framebuffer.clear(Rgb565::BLACK);
            if let Some(screen) = manager.current_mut() {
                screen.root_mut().mark_dirty();
            }
            shown = current;
        }

        manager.draw(&mut framebuffer);
        if let Err(e) = framebuffer.flush(&mut display) {
            error!("Flush error: {:?}", e);
        }
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
