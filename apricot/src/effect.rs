use apricot_ipc::{Response, Settings, SnapTarget};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Move the focused window to the target on the screen under the pointer.
    ApplySnap(SnapTarget),
    PersistSettings(Settings),
    /// Re-register hotkeys once the debounce delay has passed.
    ScheduleRebind,
}

pub struct CommandResult {
    pub response: Response,
    pub effects: Vec<Effect>,
}

impl CommandResult {
    pub fn ok() -> Self {
        Self {
            response: Response::Ok,
            effects: vec![],
        }
    }

    pub fn with_response(response: Response) -> Self {
        Self {
            response,
            effects: vec![],
        }
    }

    pub fn with_effects(response: Response, effects: Vec<Effect>) -> Self {
        Self { response, effects }
    }
}
