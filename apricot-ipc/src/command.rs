use serde::{Deserialize, Serialize};

use crate::settings::{ModifierChoice, Settings};
use crate::snap::{Direction, SnapTarget};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    // Snapping
    Snap { target: SnapTarget },
    Press { direction: Direction },

    // Settings
    GetSettings,
    SetModifiers { modifiers: ModifierChoice },
    SetCorners { enabled: bool },

    // Queries
    ListBindings,
    GetState,

    // Control
    Quit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Ok,
    Error { message: String },
    Snapped { target: SnapTarget },
    Settings { settings: Settings },
    Bindings { bindings: Vec<BindingInfo> },
    State { state: StateInfo },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingInfo {
    pub id: u32,
    pub key: String,
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateInfo {
    /// Direction held by the corner-chaining memory, if any.
    pub pending: Option<Direction>,
    pub settings: Settings,
    pub binding_count: usize,
}
