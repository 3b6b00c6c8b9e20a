use std::collections::HashMap;
use std::ffi::c_void;
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::mpsc;
use std::sync::Arc;

use core_foundation::base::TCFType;
use core_foundation::runloop::{kCFRunLoopCommonModes, CFRunLoop, CFRunLoopSource};
use core_graphics::event::{
    CGEventFlags, CGEventTap, CGEventTapLocation, CGEventTapOptions, CGEventTapPlacement,
    CGEventType, CallbackResult, EventField,
};

use crate::core::{HotkeyBinding, HotkeyId};
use crate::event::MainEvent;

extern "C" {
    fn CGEventTapEnable(tap: *mut c_void, enable: bool);
}

/// Virtual key codes for the keys apricot binds.
pub mod keycode {
    pub const C: u16 = 0x08;
    pub const RETURN: u16 = 0x24;
    pub const LEFT: u16 = 0x7B;
    pub const RIGHT: u16 = 0x7C;
    pub const DOWN: u16 = 0x7D;
    pub const UP: u16 = 0x7E;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub key_code: u16,
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub cmd: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    fn from_flags(flags: CGEventFlags) -> Self {
        Self {
            cmd: flags.contains(CGEventFlags::CGEventFlagCommand),
            alt: flags.contains(CGEventFlags::CGEventFlagAlternate),
            ctrl: flags.contains(CGEventFlags::CGEventFlagControl),
            shift: flags.contains(CGEventFlags::CGEventFlagShift),
        }
    }
}

pub fn format_hotkey(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.cmd {
        parts.push("cmd");
    }
    if hotkey.modifiers.alt {
        parts.push("alt");
    }
    if hotkey.modifiers.ctrl {
        parts.push("ctrl");
    }
    if hotkey.modifiers.shift {
        parts.push("shift");
    }
    parts.push(key_code_to_str(hotkey.key_code));
    parts.join("-")
}

fn key_code_to_str(code: u16) -> &'static str {
    match code {
        keycode::C => "c",
        keycode::RETURN => "return",
        keycode::LEFT => "left",
        keycode::RIGHT => "right",
        keycode::DOWN => "down",
        keycode::UP => "up",
        _ => "unknown",
    }
}

/// Owns the global key tap. Matching key presses are delivered as
/// [`MainEvent::Hotkey`]s on the channel given at construction.
pub struct HotkeyManager {
    bindings: HashMap<Hotkey, HotkeyId>,
    event_tx: mpsc::Sender<MainEvent>,
    tap: Option<HotkeyTap>,
}

impl HotkeyManager {
    pub fn new(event_tx: mpsc::Sender<MainEvent>) -> Self {
        Self {
            bindings: HashMap::new(),
            event_tx,
            tap: None,
        }
    }

    /// Replace every binding with `table` and rebuild the tap.
    ///
    /// On failure the old tap is already gone, so no binding stays active
    /// until the next successful registration.
    pub fn register(&mut self, table: &[HotkeyBinding]) -> Result<(), String> {
        self.tap = None;
        self.bindings = table.iter().map(|b| (b.hotkey, b.id)).collect();

        let tap = self.create_tap()?;
        self.tap = Some(tap);
        tracing::info!("Hotkey tap started with {} bindings", self.bindings.len());
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.tap.is_some()
    }

    pub fn active_binding_count(&self) -> usize {
        if self.is_active() {
            self.bindings.len()
        } else {
            0
        }
    }

    fn create_tap(&self) -> Result<HotkeyTap, String> {
        let bindings = self.bindings.clone();
        let tx = self.event_tx.clone();

        let mach_port_ptr: Arc<AtomicPtr<c_void>> = Arc::new(AtomicPtr::new(ptr::null_mut()));
        let mach_port_for_callback = Arc::clone(&mach_port_ptr);

        let tap = CGEventTap::new(
            CGEventTapLocation::Session,
            CGEventTapPlacement::HeadInsertEventTap,
            CGEventTapOptions::Default,
            vec![CGEventType::KeyDown],
            move |_proxy, event_type, event| {
                if matches!(
                    event_type,
                    CGEventType::TapDisabledByTimeout | CGEventType::TapDisabledByUserInput
                ) {
                    tracing::warn!("Hotkey tap disabled by the system, re-enabling");
                    let port = mach_port_for_callback.load(Ordering::Acquire);
                    if !port.is_null() {
                        unsafe { CGEventTapEnable(port, true) };
                    }
                    return CallbackResult::Keep;
                }

                let hotkey = Hotkey {
                    key_code: event.get_integer_value_field(EventField::KEYBOARD_EVENT_KEYCODE)
                        as u16,
                    modifiers: Modifiers::from_flags(event.get_flags()),
                };

                let Some(&id) = bindings.get(&hotkey) else {
                    return CallbackResult::Keep;
                };

                tracing::debug!("Hotkey matched: {} -> {:?}", format_hotkey(&hotkey), id);
                if tx.send(MainEvent::Hotkey(id)).is_err() {
                    tracing::error!("Failed to deliver hotkey {:?}", id);
                }
                CallbackResult::Drop
            },
        )
        .map_err(|_| {
            "Failed to create event tap. Make sure Accessibility permission is granted."
        })?;

        mach_port_ptr.store(
            tap.mach_port().as_concrete_TypeRef() as *mut c_void,
            Ordering::Release,
        );

        tap.enable();

        let source = tap
            .mach_port()
            .create_runloop_source(0)
            .map_err(|_| "Failed to create run loop source for hotkey tap")?;

        CFRunLoop::get_current().add_source(&source, unsafe { kCFRunLoopCommonModes });

        Ok(HotkeyTap {
            _tap: tap,
            source,
        })
    }
}

struct HotkeyTap {
    _tap: CGEventTap<'static>,
    source: CFRunLoopSource,
}

impl Drop for HotkeyTap {
    fn drop(&mut self) {
        // The run loop holds its own reference to the source
        CFRunLoop::get_current().remove_source(&self.source, unsafe { kCFRunLoopCommonModes });
    }
}
