use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Modifier combination applied to every hotkey binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModifierChoice {
    #[default]
    CmdOpt,
    CmdCtrl,
    CmdShiftOpt,
    CmdOptCtrl,
}

impl ModifierChoice {
    pub const ALL: [ModifierChoice; 4] = [
        ModifierChoice::CmdOpt,
        ModifierChoice::CmdCtrl,
        ModifierChoice::CmdShiftOpt,
        ModifierChoice::CmdOptCtrl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModifierChoice::CmdOpt => "cmd-opt",
            ModifierChoice::CmdCtrl => "cmd-ctrl",
            ModifierChoice::CmdShiftOpt => "cmd-shift-opt",
            ModifierChoice::CmdOptCtrl => "cmd-opt-ctrl",
        }
    }

    /// Symbol string as shown in macOS menus.
    pub fn symbol(self) -> &'static str {
        match self {
            ModifierChoice::CmdOpt => "⌘⌥",
            ModifierChoice::CmdCtrl => "⌘⌃",
            ModifierChoice::CmdShiftOpt => "⌘⇧⌥",
            ModifierChoice::CmdOptCtrl => "⌘⌥⌃",
        }
    }
}

impl fmt::Display for ModifierChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModifierChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ModifierChoice::ALL
            .into_iter()
            .find(|choice| choice.as_str() == lower || choice.symbol() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown modifier combo: {} \
                     (use cmd-opt, cmd-ctrl, cmd-shift-opt, cmd-opt-ctrl)",
                    s
                )
            })
    }
}

/// User preferences. Replaced wholesale whenever one of them changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub modifiers: ModifierChoice,
    pub corners_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            modifiers: ModifierChoice::default(),
            corners_enabled: true,
        }
    }
}

impl Settings {
    pub fn with_modifiers(self, modifiers: ModifierChoice) -> Self {
        Self { modifiers, ..self }
    }

    pub fn with_corners(self, corners_enabled: bool) -> Self {
        Self {
            corners_enabled,
            ..self
        }
    }
}
