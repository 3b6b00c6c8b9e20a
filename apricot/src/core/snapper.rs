use apricot_ipc::{Direction, Settings, SnapTarget};

use super::{primary_max_y, rect_for, screen_under_pointer, transition, Action, AxisMemory};
use super::WindowFrame;
use crate::platform::{ScreenLocator, WindowController};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapOutcome {
    pub target: SnapTarget,
    /// Frame requested from the window controller; `None` when no screen
    /// was available to compute it against.
    pub frame: Option<WindowFrame>,
}

/// Sequences one action into one window move. Sole owner of the axis memory.
#[derive(Debug, Clone)]
pub struct Snapper {
    memory: AxisMemory,
    settings: Settings,
}

impl Snapper {
    pub fn new(settings: Settings) -> Self {
        Self {
            memory: AxisMemory::Empty,
            settings,
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn pending(&self) -> Option<Direction> {
        self.memory.pending()
    }

    /// Swap in a new settings value. The held press is forgotten whenever
    /// corners are off or the corner setting flips, so no chain spans a toggle.
    pub fn replace_settings(&mut self, settings: Settings) {
        let toggled = settings.corners_enabled != self.settings.corners_enabled;
        if (toggled || !settings.corners_enabled) && !self.memory.is_empty() {
            tracing::debug!("Corner setting changed, clearing pending {:?}", self.memory);
            self.memory = AxisMemory::Empty;
        }
        self.settings = settings;
    }

    /// Turn an action into a target. Only directional presses read or write
    /// the axis memory; fixed targets pass through and leave it untouched.
    pub fn resolve(&mut self, action: Action) -> SnapTarget {
        match action {
            Action::Direction(direction) => {
                let (target, next) =
                    transition(self.memory, direction, self.settings.corners_enabled);
                self.memory = next;
                target
            }
            Action::Fixed(target) => target,
        }
    }

    pub fn handle<L: ScreenLocator, C: WindowController>(
        &mut self,
        action: Action,
        locator: &L,
        controller: &C,
    ) -> SnapOutcome {
        let target = self.resolve(action);
        let frame = apply_target(target, locator, controller);
        SnapOutcome { target, frame }
    }
}

/// Place the focused window at `target` on the screen under the pointer.
pub fn apply_target<L: ScreenLocator, C: WindowController>(
    target: SnapTarget,
    locator: &L,
    controller: &C,
) -> Option<WindowFrame> {
    let screens = locator.screens();
    let pointer = locator.pointer_location();

    let Some(screen) = screen_under_pointer(&screens, pointer) else {
        tracing::debug!("No screens available, dropping snap to {}", target);
        return None;
    };
    let primary_top = primary_max_y(&screens)?;

    let frame = rect_for(target, &screen.visible_frame);
    tracing::debug!(
        "Snapping to {} on {}: ({}, {}) {}x{}",
        target,
        screen.name,
        frame.x,
        frame.y,
        frame.width,
        frame.height
    );

    controller.set_focused_window_frame(&frame, primary_top);
    Some(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rect;
    use crate::platform::mock::{create_test_screen, MockScreenLocator, MockWindowController};

    fn setup() -> (Snapper, MockScreenLocator, MockWindowController) {
        let locator = MockScreenLocator::new()
            .with_screens(vec![
                create_test_screen("Built-in", 0.0, 0.0, 1920.0, 1080.0),
                create_test_screen("External", 1920.0, 0.0, 2560.0, 1440.0),
            ])
            .with_pointer(100.0, 100.0);
        (
            Snapper::new(Settings::default()),
            locator,
            MockWindowController::new(),
        )
    }

    fn press(d: Direction) -> Action {
        Action::Direction(d)
    }

    #[test]
    fn test_left_snaps_to_left_half_of_visible_frame() {
        let (mut snapper, locator, controller) = setup();

        let outcome = snapper.handle(press(Direction::Left), &locator, &controller);

        assert_eq!(outcome.target, SnapTarget::Left);
        assert_eq!(outcome.frame, Some(Rect::new(0.0, 0.0, 960.0, 1055.0)));
        let applied = controller.applied.borrow();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0], (Rect::new(0.0, 0.0, 960.0, 1055.0), 1080.0));
    }

    #[test]
    fn test_chained_presses_snap_to_corner() {
        let (mut snapper, locator, controller) = setup();

        snapper.handle(press(Direction::Left), &locator, &controller);
        let outcome = snapper.handle(press(Direction::Up), &locator, &controller);

        assert_eq!(outcome.target, SnapTarget::TopLeft);
        assert_eq!(
            controller.last_frame(),
            Some(Rect::new(0.0, 527.5, 960.0, 527.5))
        );
        assert_eq!(controller.applied.borrow().len(), 2);
    }

    #[test]
    fn test_fixed_command_keeps_pending_press() {
        let (mut snapper, locator, controller) = setup();

        snapper.handle(press(Direction::Left), &locator, &controller);
        let max = snapper.handle(Action::Fixed(SnapTarget::Maximize), &locator, &controller);
        assert_eq!(max.target, SnapTarget::Maximize);
        assert_eq!(snapper.pending(), Some(Direction::Left));

        let outcome = snapper.handle(press(Direction::Up), &locator, &controller);
        assert_eq!(outcome.target, SnapTarget::TopLeft);
    }

    #[test]
    fn test_center_does_not_touch_memory() {
        let mut snapper = Snapper::new(Settings::default());
        assert_eq!(
            snapper.resolve(Action::Fixed(SnapTarget::Center70)),
            SnapTarget::Center70
        );
        assert_eq!(snapper.pending(), None);
    }

    #[test]
    fn test_uses_screen_under_pointer() {
        let (mut snapper, locator, controller) = setup();
        let locator = locator.with_pointer(3000.0, 700.0);

        let outcome = snapper.handle(Action::Fixed(SnapTarget::Maximize), &locator, &controller);

        assert_eq!(outcome.frame, Some(Rect::new(1920.0, 0.0, 2560.0, 1415.0)));
        // Coordinate flip always refers to the primary screen's top edge
        assert_eq!(controller.applied.borrow()[0].1, 1080.0);
    }

    #[test]
    fn test_pointer_off_screen_uses_primary() {
        let (mut snapper, locator, controller) = setup();
        let locator = locator.with_pointer(-500.0, -500.0);

        let outcome = snapper.handle(press(Direction::Right), &locator, &controller);

        assert_eq!(outcome.frame, Some(Rect::new(960.0, 0.0, 960.0, 1055.0)));
    }

    #[test]
    fn test_no_screens_drops_snap_but_advances_memory() {
        let mut snapper = Snapper::new(Settings::default());
        let locator = MockScreenLocator::new();
        let controller = MockWindowController::new();

        let outcome = snapper.handle(press(Direction::Down), &locator, &controller);

        assert_eq!(outcome.target, SnapTarget::Bottom);
        assert_eq!(outcome.frame, None);
        assert!(controller.applied.borrow().is_empty());
        assert_eq!(snapper.pending(), Some(Direction::Down));
    }

    #[test]
    fn test_no_focused_window_is_silent() {
        let (mut snapper, locator, _) = setup();
        let controller = MockWindowController::without_focused_window();

        let outcome = snapper.handle(press(Direction::Left), &locator, &controller);

        assert_eq!(outcome.target, SnapTarget::Left);
        assert!(outcome.frame.is_some());
        assert!(controller.applied.borrow().is_empty());
    }

    #[test]
    fn test_corners_disabled_yields_halves() {
        let mut snapper = Snapper::new(Settings::default().with_corners(false));

        assert_eq!(snapper.resolve(press(Direction::Left)), SnapTarget::Left);
        assert_eq!(snapper.resolve(press(Direction::Up)), SnapTarget::Top);
        assert_eq!(snapper.resolve(press(Direction::Right)), SnapTarget::Right);
    }

    #[test]
    fn test_disabling_corners_clears_pending_press() {
        let mut snapper = Snapper::new(Settings::default());
        snapper.resolve(press(Direction::Left));
        assert_eq!(snapper.pending(), Some(Direction::Left));

        snapper.replace_settings(Settings::default().with_corners(false));
        assert_eq!(snapper.pending(), None);

        snapper.replace_settings(Settings::default().with_corners(true));
        assert_eq!(snapper.resolve(press(Direction::Up)), SnapTarget::Top);
    }

    #[test]
    fn test_enabling_corners_forgets_press_made_while_off() {
        let mut snapper = Snapper::new(Settings::default().with_corners(false));
        assert_eq!(snapper.resolve(press(Direction::Left)), SnapTarget::Left);

        snapper.replace_settings(Settings::default().with_corners(true));
        assert_eq!(snapper.pending(), None);

        assert_eq!(snapper.resolve(press(Direction::Up)), SnapTarget::Top);
    }

    #[test]
    fn test_modifier_change_keeps_pending_press() {
        let mut snapper = Snapper::new(Settings::default());
        snapper.resolve(press(Direction::Right));

        snapper.replace_settings(
            Settings::default().with_modifiers(apricot_ipc::ModifierChoice::CmdCtrl),
        );

        assert_eq!(snapper.pending(), Some(Direction::Right));
        assert_eq!(snapper.resolve(press(Direction::Down)), SnapTarget::BottomRight);
    }
}
