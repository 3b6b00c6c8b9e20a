use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::Path;

use anyhow::{bail, Context, Result};

use apricot_ipc::{Command, Response};

use super::SOCKET_PATH;

pub struct IpcClient {
    stream: UnixStream,
}

impl IpcClient {
    pub fn connect() -> Result<Self> {
        let stream = UnixStream::connect(SOCKET_PATH)
            .context("Failed to connect to apricot daemon (is `apricot start` running?)")?;
        Ok(Self { stream })
    }

    pub fn send(&mut self, cmd: &Command) -> Result<Response> {
        let json = serde_json::to_string(cmd)?;
        writeln!(self.stream, "{}", json)?;
        self.stream.flush()?;

        let mut reader = BufReader::new(&self.stream);
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            bail!("Daemon closed the connection without a response");
        }

        let response: Response = serde_json::from_str(&line)?;
        Ok(response)
    }
}

/// True if something accepts connections on `path`. A leftover socket file
/// from a crashed daemon refuses the connection and reports false.
pub fn daemon_listening(path: impl AsRef<Path>) -> bool {
    UnixStream::connect(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::net::UnixListener;

    fn temp_socket(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("apricot-{}-{}.sock", name, std::process::id()))
    }

    #[test]
    fn test_daemon_listening_detects_live_socket() {
        let path = temp_socket("live");
        let _ = std::fs::remove_file(&path);
        let _listener = UnixListener::bind(&path).unwrap();

        assert!(daemon_listening(&path));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_daemon_listening_ignores_stale_socket() {
        let path = temp_socket("stale");
        let _ = std::fs::remove_file(&path);
        drop(UnixListener::bind(&path).unwrap());

        assert!(path.exists());
        assert!(!daemon_listening(&path));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_daemon_listening_missing_path() {
        assert!(!daemon_listening(temp_socket("missing")));
    }
}
