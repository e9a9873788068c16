//! Action handlers: side effects requested by `update()`
//!
//! The only side effect the portal performs is opening a document link
//! in an external browser. Failures come back as a follow-up message so
//! the state can show them.

use std::process::Command;

use portal_core::prelude::*;
use url::Url;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action, returning a follow-up message if it failed.
pub fn handle_action(action: UpdateAction) -> Option<Message> {
    match action {
        UpdateAction::OpenUrl { url, browser } => match open_url(&url, &browser) {
            Ok(()) => {
                info!("Opened {} in browser", url);
                None
            }
            Err(e) => {
                if e.is_recoverable() {
                    warn!("Failed to open {}: {}", url, e);
                } else {
                    error!("Failed to open {}: {}", url, e);
                }
                Some(Message::LinkOpenFailed {
                    reason: e.to_string(),
                })
            }
        },
    }
}

/// Check that `raw` is an absolute http(s) URL.
pub fn validate_url(raw: &str) -> Result<Url> {
    let parsed = Url::parse(raw).map_err(|e| Error::invalid_url(raw, e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::invalid_url(
            raw,
            format!("unsupported scheme '{}'", other),
        )),
    }
}

/// Validate `raw` and hand it to the browser.
pub fn open_url(raw: &str, browser: &str) -> Result<()> {
    let url = validate_url(raw)?;
    open_url_in_browser(url.as_str(), browser)
        .map_err(|e| Error::link_open(format!("{}: {}", url, e)))
}

/// Spawn the browser without waiting for it.
///
/// If `browser` is non-empty, uses it as the browser command.
/// Otherwise uses the platform-default opener.
fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}
