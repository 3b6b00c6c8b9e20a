use std::sync::mpsc as std_mpsc;

use tokio::sync::mpsc;

use crate::event::MainEvent;
use crate::ipc::{CommandWithResponse, IpcServer};

pub struct TokioChannels {
    pub event_tx: std_mpsc::Sender<MainEvent>,
    pub server_tx: mpsc::Sender<CommandWithResponse>,
    pub server_rx: mpsc::Receiver<CommandWithResponse>,
}

pub struct MainChannels {
    pub event_tx: std_mpsc::Sender<MainEvent>,
    pub event_rx: std_mpsc::Receiver<MainEvent>,
}

pub fn create_channels() -> (TokioChannels, MainChannels) {
    // Channel: hotkeys and IPC commands (event tap / tokio -> main thread)
    let (event_tx, event_rx) = std_mpsc::channel::<MainEvent>();

    // Channel for IPC server (tokio internal)
    let (server_tx, server_rx) = mpsc::channel::<CommandWithResponse>(256);

    let tokio_channels = TokioChannels {
        event_tx: event_tx.clone(),
        server_tx,
        server_rx,
    };

    let main_channels = MainChannels { event_tx, event_rx };

    (tokio_channels, main_channels)
}

pub async fn run_async(channels: TokioChannels) {
    let TokioChannels {
        event_tx,
        server_tx,
        mut server_rx,
    } = channels;

    tracing::info!("Tokio runtime started");

    let ipc_server = IpcServer::new(server_tx);
    tokio::spawn(async move {
        if let Err(e) = ipc_server.run().await {
            tracing::error!("IPC server error: {}", e);
        }
    });

    while let Some(cmd_with_response) = server_rx.recv().await {
        // Forward IPC commands to main thread
        if event_tx.send(MainEvent::Command(cmd_with_response)).is_err() {
            tracing::error!("Failed to forward IPC command to main thread");
            break;
        }
    }

    tracing::info!("Tokio runtime exiting");
}
