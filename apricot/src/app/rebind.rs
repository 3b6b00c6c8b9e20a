use std::time::{Duration, Instant};

/// Delay between a settings change and hotkey re-registration, so the tap
/// is not rebuilt while a key of the old combo is still held.
pub const REBIND_DELAY: Duration = Duration::from_millis(50);

/// Debounced re-registration request. Scheduling again pushes the deadline
/// back, so a burst of changes causes one rebuild.
#[derive(Debug, Default)]
pub struct RebindSchedule {
    due: Option<Instant>,
}

impl RebindSchedule {
    pub fn schedule(&mut self, now: Instant) {
        self.due = Some(now + REBIND_DELAY);
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// True once per schedule, on the first call at or after the deadline.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
