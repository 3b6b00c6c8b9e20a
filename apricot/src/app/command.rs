use apricot_ipc::{BindingInfo, Command, Response, Settings, StateInfo};

use crate::core::{binding_table, classify, Action, Snapper};
use crate::effect::{CommandResult, Effect};
use crate::macos::{format_hotkey, HotkeyManager};

/// Pure function: processes a command and returns a response with effects.
/// Only the snapper's state is mutated; nothing touches the system here.
pub fn process_command(
    snapper: &mut Snapper,
    hotkey_manager: &HotkeyManager,
    cmd: &Command,
) -> CommandResult {
    match cmd {
        Command::Snap { target } => {
            let target = snapper.resolve(Action::Fixed(*target));
            CommandResult::with_effects(
                Response::Snapped { target },
                vec![Effect::ApplySnap(target)],
            )
        }
        Command::Press { direction } => {
            let target = snapper.resolve(Action::Direction(*direction));
            CommandResult::with_effects(
                Response::Snapped { target },
                vec![Effect::ApplySnap(target)],
            )
        }
        Command::GetSettings => CommandResult::with_response(Response::Settings {
            settings: snapper.settings(),
        }),
        Command::SetModifiers { modifiers } => {
            let settings = snapper.settings().with_modifiers(*modifiers);
            change_settings(snapper, settings)
        }
        Command::SetCorners { enabled } => {
            let settings = snapper.settings().with_corners(*enabled);
            change_settings(snapper, settings)
        }
        Command::ListBindings => CommandResult::with_response(Response::Bindings {
            bindings: list_bindings(&snapper.settings()),
        }),
        Command::GetState => CommandResult::with_response(Response::State {
            state: StateInfo {
                pending: snapper.pending(),
                settings: snapper.settings(),
                binding_count: hotkey_manager.active_binding_count(),
            },
        }),
        Command::Quit => CommandResult::ok(),
    }
}

fn change_settings(snapper: &mut Snapper, settings: Settings) -> CommandResult {
    let response = Response::Settings { settings };
    if settings == snapper.settings() {
        return CommandResult::with_response(response);
    }

    tracing::info!(
        "Settings changed: modifiers={}, corners={}",
        settings.modifiers,
        settings.corners_enabled
    );
    snapper.replace_settings(settings);
    CommandResult::with_effects(
        response,
        vec![Effect::PersistSettings(settings), Effect::ScheduleRebind],
    )
}

pub fn list_bindings(settings: &Settings) -> Vec<BindingInfo> {
    binding_table(settings)
        .iter()
        .filter_map(|binding| {
            let action = classify(binding.id)?;
            Some(BindingInfo {
                id: binding.id.0,
                key: format_hotkey(&binding.hotkey),
                action: action.to_string(),
            })
        })
        .collect()
}
