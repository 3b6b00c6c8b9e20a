use std::process::Command;

use anyhow::{bail, Context, Result};

const LOGIN_ITEMS_URL: &str = "x-apple.systempreferences:com.apple.LoginItems-Settings.extension";
const USERS_PANE_URL: &str = "x-apple.systempreferences:com.apple.preference.users";

/// Open a URL with Launch Services through `/usr/bin/open`.
pub fn open_url(url: &str) -> Result<()> {
    let status = Command::new("/usr/bin/open")
        .arg(url)
        .status()
        .with_context(|| format!("Failed to run open for {}", url))?;
    if !status.success() {
        bail!("open {} exited with {}", url, status);
    }
    Ok(())
}

/// Open the Login Items pane of System Settings. Systems without that
/// extension get the older Users & Groups pane.
pub fn open_login_items() -> Result<()> {
    match open_url(LOGIN_ITEMS_URL) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::debug!("Login Items pane unavailable ({:#}), trying Users & Groups", e);
            open_url(USERS_PANE_URL)
        }
    }
}
