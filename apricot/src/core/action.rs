use std::fmt;

use apricot_ipc::{Direction, ModifierChoice, Settings, SnapTarget};

use crate::macos::{keycode, Hotkey, Modifiers};

/// Identifier a hotkey is registered under and delivered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotkeyId(pub u32);

impl HotkeyId {
    pub const LEFT: HotkeyId = HotkeyId(1);
    pub const RIGHT: HotkeyId = HotkeyId(2);
    pub const UP: HotkeyId = HotkeyId(3);
    pub const DOWN: HotkeyId = HotkeyId(4);
    // 5-8 belonged to the shifted-arrow corner bindings, which chaining replaced.
    pub const MAXIMIZE: HotkeyId = HotkeyId(9);
    pub const CENTER: HotkeyId = HotkeyId(10);
}

/// What a hotkey asks for: a press that takes part in corner chaining,
/// or a target that is applied as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Direction(Direction),
    Fixed(SnapTarget),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Direction(direction) => write!(f, "{}", direction.half()),
            Action::Fixed(target) => write!(f, "{}", target),
        }
    }
}

/// Unknown identifiers map to `None` and are dropped by the caller.
pub fn classify(id: HotkeyId) -> Option<Action> {
    match id {
        HotkeyId::LEFT => Some(Action::Direction(Direction::Left)),
        HotkeyId::RIGHT => Some(Action::Direction(Direction::Right)),
        HotkeyId::UP => Some(Action::Direction(Direction::Up)),
        HotkeyId::DOWN => Some(Action::Direction(Direction::Down)),
        HotkeyId::MAXIMIZE => Some(Action::Fixed(SnapTarget::Maximize)),
        HotkeyId::CENTER => Some(Action::Fixed(SnapTarget::Center70)),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyBinding {
    pub hotkey: Hotkey,
    pub id: HotkeyId,
}

pub fn modifiers_for(choice: ModifierChoice) -> Modifiers {
    let base = Modifiers {
        cmd: true,
        ..Default::default()
    };
    match choice {
        ModifierChoice::CmdOpt => Modifiers { alt: true, ..base },
        ModifierChoice::CmdCtrl => Modifiers { ctrl: true, ..base },
        ModifierChoice::CmdShiftOpt => Modifiers {
            shift: true,
            alt: true,
            ..base
        },
        ModifierChoice::CmdOptCtrl => Modifiers {
            alt: true,
            ctrl: true,
            ..base
        },
    }
}

/// Build the hotkey table for `settings`. Every binding shares the chosen
/// modifier combo. Corner placement is reached by chaining arrow presses,
/// so the corner setting does not add bindings of its own.
pub fn binding_table(settings: &Settings) -> Vec<HotkeyBinding> {
    let modifiers = modifiers_for(settings.modifiers);
    [
        (keycode::LEFT, HotkeyId::LEFT),
        (keycode::RIGHT, HotkeyId::RIGHT),
        (keycode::UP, HotkeyId::UP),
        (keycode::DOWN, HotkeyId::DOWN),
        (keycode::RETURN, HotkeyId::MAXIMIZE),
        (keycode::C, HotkeyId::CENTER),
    ]
    .into_iter()
    .map(|(key_code, id)| HotkeyBinding {
        hotkey: Hotkey {
            key_code,
            modifiers,
        },
        id,
    })
    .collect()
}
