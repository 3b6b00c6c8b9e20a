use objc2::MainThreadMarker;
use objc2_app_kit::{NSEvent, NSScreen};
use objc2_foundation::NSRect;

use crate::core::{Point, Rect, Screen};

fn to_rect(rect: NSRect) -> Rect {
    Rect::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
}

/// Enumerate screens in Cocoa global coordinates (origin at the bottom-left
/// of the primary display). The primary display comes first.
///
/// Must run on the main thread.
pub fn get_screens() -> Vec<Screen> {
    let mtm = unsafe { MainThreadMarker::new_unchecked() };
    let screens = NSScreen::screens(mtm);

    screens
        .iter()
        .map(|screen| {
            Screen::new(
                screen.localizedName().to_string(),
                to_rect(screen.frame()),
                to_rect(screen.visibleFrame()),
            )
        })
        .collect()
}

/// Current pointer position in the same coordinates as [`get_screens`].
pub fn mouse_location() -> Point {
    let location = NSEvent::mouseLocation();
    Point::new(location.x, location.y)
}
