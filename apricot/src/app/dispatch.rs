use std::sync::mpsc as std_mpsc;

use apricot_ipc::{Command, Response};

use crate::core::{classify, HotkeyId, SettingsStore, SnapOutcome, Snapper};
use crate::event::MainEvent;
use crate::macos::HotkeyManager;
use crate::platform::{ScreenLocator, WindowController};

use super::command::process_command;
use super::effects::execute_effects;
use super::rebind::RebindSchedule;

/// Everything the main loop mutates while handling hotkeys and IPC commands.
pub struct Daemon<L: ScreenLocator, C: WindowController> {
    pub snapper: Snapper,
    pub store: SettingsStore,
    pub rebind: RebindSchedule,
    pub locator: L,
    pub controller: C,
}

impl<L: ScreenLocator, C: WindowController> Daemon<L, C> {
    pub fn new(snapper: Snapper, store: SettingsStore, locator: L, controller: C) -> Self {
        Self {
            snapper,
            store,
            rebind: RebindSchedule::default(),
            locator,
            controller,
        }
    }
}

/// Process command -> execute effects.
pub fn dispatch_command<L: ScreenLocator, C: WindowController>(
    cmd: &Command,
    daemon: &mut Daemon<L, C>,
    hotkey_manager: &HotkeyManager,
) -> Response {
    let result = process_command(&mut daemon.snapper, hotkey_manager, cmd);
    execute_effects(result.effects, daemon);
    result.response
}

/// Run one hotkey press through the snapper. Identifiers without an action
/// are ignored.
pub fn dispatch_hotkey<L: ScreenLocator, C: WindowController>(
    id: HotkeyId,
    daemon: &mut Daemon<L, C>,
) -> Option<SnapOutcome> {
    let Some(action) = classify(id) else {
        tracing::debug!("Ignoring unknown hotkey id {}", id.0);
        return None;
    };
    tracing::debug!("Hotkey {} -> {}", id.0, action);
    Some(
        daemon
            .snapper
            .handle(action, &daemon.locator, &daemon.controller),
    )
}

/// Handle every queued event in arrival order. Returns true once a quit
/// command has been answered; events queued behind it are left unhandled.
pub fn drain_events<L: ScreenLocator, C: WindowController>(
    event_rx: &std_mpsc::Receiver<MainEvent>,
    daemon: &mut Daemon<L, C>,
    hotkey_manager: &HotkeyManager,
) -> bool {
    while let Ok(event) = event_rx.try_recv() {
        match event {
            MainEvent::Hotkey(id) => {
                dispatch_hotkey(id, daemon);
            }
            MainEvent::Command((cmd, resp_tx)) => {
                tracing::debug!("Received IPC command: {:?}", cmd);
                let response = dispatch_command(&cmd, daemon, hotkey_manager);
                let _ = resp_tx.blocking_send(response);

                // Handle Quit command after sending response
                if matches!(cmd, Command::Quit) {
                    tracing::info!("Quit command received");
                    return true;
                }
            }
        }
    }
    false
}
