use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::mpsc;

use apricot_ipc::{Command, Response};

use super::SOCKET_PATH;

pub type CommandWithResponse = (Command, mpsc::Sender<Response>);

pub struct IpcServer {
    socket_path: PathBuf,
    cmd_tx: mpsc::Sender<CommandWithResponse>,
}

impl IpcServer {
    pub fn new(cmd_tx: mpsc::Sender<CommandWithResponse>) -> Self {
        Self {
            socket_path: PathBuf::from(SOCKET_PATH),
            cmd_tx,
        }
    }

    pub async fn run(&self) -> Result<()> {
        if UnixStream::connect(&self.socket_path).await.is_ok() {
            bail!("Another daemon is listening on {:?}", self.socket_path);
        }
        // A stale socket from a crashed daemon blocks bind
        if self.socket_path.exists() {
            std::fs::remove_file(&self.socket_path)?;
        }

        let listener = UnixListener::bind(&self.socket_path)?;
        let _cleanup = SocketCleanup(&self.socket_path);
        tracing::info!("IPC server listening on {:?}", self.socket_path);

        loop {
            match listener.accept().await {
                Ok((stream, _addr)) => {
                    let cmd_tx = self.cmd_tx.clone();
                    tokio::spawn(async move {
                        if let Err(e) = Self::handle_connection(stream, cmd_tx).await {
                            tracing::error!("Connection error: {}", e);
                        }
                    });
                }
                Err(e) => {
                    tracing::error!("Accept error: {}", e);
                }
            }
        }
    }

    async fn handle_connection(
        stream: UnixStream,
        cmd_tx: mpsc::Sender<CommandWithResponse>,
    ) -> Result<()> {
        let (reader, mut writer) = stream.into_split();
        let mut reader = BufReader::new(reader);
        let mut line = String::new();

        loop {
            line.clear();
            let n = reader.read_line(&mut line).await?;
            if n == 0 {
                break;
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<Command>(line) {
                Ok(cmd) => forward(cmd, &cmd_tx).await,
                Err(e) => Response::Error {
                    message: format!("Invalid command: {}", e),
                },
            };

            let response_json = serde_json::to_string(&response)?;
            writer.write_all(response_json.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        Ok(())
    }
}

async fn forward(cmd: Command, cmd_tx: &mpsc::Sender<CommandWithResponse>) -> Response {
    tracing::debug!("Received command: {:?}", cmd);
    let (resp_tx, mut resp_rx) = mpsc::channel(1);

    if cmd_tx.send((cmd, resp_tx)).await.is_err() {
        return Response::Error {
            message: "Internal error: command channel closed".to_string(),
        };
    }
    resp_rx.recv().await.unwrap_or(Response::Error {
        message: "Internal error: no response".to_string(),
    })
}

/// Removes the socket file once the listener that bound it goes away.
struct SocketCleanup<'a>(&'a Path);

impl Drop for SocketCleanup<'_> {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(self.0);
    }
}
