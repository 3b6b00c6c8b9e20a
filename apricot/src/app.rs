mod channels;
mod command;
mod dispatch;
mod effects;
mod rebind;

use std::cell::RefCell;
use std::sync::mpsc as std_mpsc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use core_foundation::runloop::{kCFRunLoopDefaultMode, CFRunLoop};

use crate::core::{binding_table, SettingsStore, Snapper};
use crate::event::MainEvent;
use crate::ipc;
use crate::macos::{self, HotkeyManager};
use crate::platform::{MacOSScreenLocator, MacOSWindowController};

use channels::{create_channels, run_async, MainChannels};
use dispatch::{drain_events, Daemon};

/// How often the main loop drains the event channel.
const POLL_INTERVAL_SECS: f64 = 0.01;

struct RunLoopContext {
    event_rx: std_mpsc::Receiver<MainEvent>,
    hotkey_manager: RefCell<HotkeyManager>,
    daemon: RefCell<Daemon<MacOSScreenLocator, MacOSWindowController>>,
}

pub struct App {}

impl App {
    pub fn run() -> Result<()> {
        if ipc::daemon_listening(ipc::SOCKET_PATH) {
            bail!("apricot is already running ({})", ipc::SOCKET_PATH);
        }

        if !macos::is_trusted() {
            tracing::warn!("Accessibility permission not granted, requesting...");
            macos::is_trusted_with_prompt();
            tracing::warn!("Snapping stays inactive until permission is granted");
        }

        let store = SettingsStore::from_home();
        match store.path() {
            Some(path) => tracing::info!("Settings file: {}", path.display()),
            None => tracing::warn!("No home directory, settings will not persist"),
        }
        let settings = store.load_or_default();
        tracing::info!(
            "Loaded settings: modifiers={}, corners={}",
            settings.modifiers,
            settings.corners_enabled
        );

        let (tokio_channels, main_channels) = create_channels();

        // Spawn tokio runtime in separate thread
        let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
        std::thread::spawn(move || {
            rt.block_on(run_async(tokio_channels));
        });

        let daemon = Daemon::new(
            Snapper::new(settings),
            store,
            MacOSScreenLocator,
            MacOSWindowController,
        );

        let app = App {};
        app.run_main_loop(main_channels, daemon);

        Ok(())
    }

    fn run_main_loop(
        self,
        channels: MainChannels,
        daemon: Daemon<MacOSScreenLocator, MacOSWindowController>,
    ) {
        tracing::info!("Starting main loop");

        let MainChannels { event_tx, event_rx } = channels;

        let mut hotkey_manager = HotkeyManager::new(event_tx);
        if let Err(e) = hotkey_manager.register(&binding_table(&daemon.snapper.settings())) {
            tracing::warn!("Failed to register hotkeys: {}", e);
        }

        let context = Box::new(RunLoopContext {
            event_rx,
            hotkey_manager: RefCell::new(hotkey_manager),
            daemon: RefCell::new(daemon),
        });
        let mut timer_context = core_foundation::runloop::CFRunLoopTimerContext {
            version: 0,
            info: Box::into_raw(context) as *mut _,
            retain: None,
            release: None,
            copyDescription: None,
        };

        extern "C" fn timer_callback(
            _timer: core_foundation::runloop::CFRunLoopTimerRef,
            info: *mut std::ffi::c_void,
        ) {
            let ctx = unsafe { &*(info as *const RunLoopContext) };

            let quit = drain_events(
                &ctx.event_rx,
                &mut *ctx.daemon.borrow_mut(),
                &ctx.hotkey_manager.borrow(),
            );
            if quit {
                CFRunLoop::get_current().stop();
                return;
            }

            let mut daemon = ctx.daemon.borrow_mut();
            if daemon.rebind.take_due(Instant::now()) {
                let table = binding_table(&daemon.snapper.settings());
                if let Err(e) = ctx.hotkey_manager.borrow_mut().register(&table) {
                    tracing::warn!("Failed to re-register hotkeys: {}", e);
                }
            }
        }

        let timer = unsafe {
            core_foundation::runloop::CFRunLoopTimer::new(
                core_foundation::date::CFAbsoluteTimeGetCurrent(),
                POLL_INTERVAL_SECS,
                0,
                0,
                timer_callback,
                &mut timer_context,
            )
        };

        let run_loop = CFRunLoop::get_current();
        run_loop.add_timer(&timer, unsafe { kCFRunLoopDefaultMode });

        tracing::info!("Entering CFRunLoop");
        CFRunLoop::run_current();
        tracing::info!("CFRunLoop exited");
    }
}
