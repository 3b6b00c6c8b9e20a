use crate::core::HotkeyId;
use crate::ipc::CommandWithResponse;

/// Everything the main loop reacts to, queued on one channel so hotkeys and
/// IPC commands are handled in arrival order.
#[derive(Debug)]
pub enum MainEvent {
    Hotkey(HotkeyId),
    Command(CommandWithResponse),
}
