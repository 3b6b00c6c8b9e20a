mod client;
mod server;

pub use client::{daemon_listening, IpcClient};
pub use server::{CommandWithResponse, IpcServer};

pub const SOCKET_PATH: &str = "/tmp/apricot.sock";
