use std::time::Instant;

use crate::core::apply_target;
use crate::effect::Effect;
use crate::platform::{ScreenLocator, WindowController};

use super::dispatch::Daemon;

/// Execute side effects.
pub fn execute_effects<L: ScreenLocator, C: WindowController>(
    effects: Vec<Effect>,
    daemon: &mut Daemon<L, C>,
) {
    for effect in effects {
        match effect {
            Effect::ApplySnap(target) => {
                apply_target(target, &daemon.locator, &daemon.controller);
            }
            Effect::PersistSettings(settings) => {
                if let Err(e) = daemon.store.save(&settings) {
                    tracing::warn!("Failed to save settings: {:#}", e);
                }
            }
            Effect::ScheduleRebind => {
                daemon.rebind.schedule(Instant::now());
            }
        }
    }
}
