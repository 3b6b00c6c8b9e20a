use core_graphics::geometry::{CGPoint, CGSize};

use crate::core::{to_top_left_origin, Point, Screen, WindowFrame};
use crate::macos;

/// Trait for querying display geometry and the pointer from the system.
/// This abstraction allows mocking in tests.
pub trait ScreenLocator {
    /// All screens in global bottom-left coordinates, primary screen first.
    fn screens(&self) -> Vec<Screen>;
    fn pointer_location(&self) -> Point;
}

/// Trait for moving the focused window (side effects).
/// This abstraction allows mocking in tests.
pub trait WindowController {
    /// Apply `frame` to the focused window of the frontmost application.
    /// Does nothing when no accessible focused window exists.
    fn set_focused_window_frame(&self, frame: &WindowFrame, primary_max_y: f64);
}

/// macOS implementation of ScreenLocator
#[derive(Default)]
pub struct MacOSScreenLocator;

impl ScreenLocator for MacOSScreenLocator {
    fn screens(&self) -> Vec<Screen> {
        macos::get_screens()
    }

    fn pointer_location(&self) -> Point {
        macos::mouse_location()
    }
}

/// macOS implementation of WindowController
#[derive(Default)]
pub struct MacOSWindowController;

impl WindowController for MacOSWindowController {
    fn set_focused_window_frame(&self, frame: &WindowFrame, primary_max_y: f64) {
        let window = match macos::get_focused_window() {
            Ok(w) => w,
            Err(e) => {
                tracing::debug!("No accessible focused window (AXError {}), skipping", e);
                return;
            }
        };

        let origin = to_top_left_origin(frame, primary_max_y);
        let new_pos = CGPoint::new(origin.x, origin.y);
        let new_size = CGSize::new(frame.width, frame.height);

        if let Err(e) = window.set_position(new_pos) {
            tracing::debug!(
                "Failed to move focused window to ({}, {}): {}",
                origin.x,
                origin.y,
                e
            );
            return;
        }
        if let Err(e) = window.set_size(new_size) {
            tracing::debug!(
                "Failed to resize focused window to {}x{}: {}",
                frame.width,
                frame.height,
                e
            );
            return;
        }

        tracing::debug!(
            "Set focused window frame to ({}, {}) {}x{}",
            origin.x,
            origin.y,
            frame.width,
            frame.height
        );
    }
}
