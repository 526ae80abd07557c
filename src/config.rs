use anyhow::{Result, bail};
use std::env;

/// Startup precondition, checked once before any fetch or browser launch.
/// Browsers are started by executable name, so a usable PATH is required.
pub fn validate_env(lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
    match lookup("PATH") {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => bail!("$PATH isn't set up properly, can't locate a browser..."),
    }
}

pub fn default_browser() -> String {
    default_browser_for(env::consts::OS)
}

fn default_browser_for(os: &str) -> String {
    match os {
        "windows" => "chrome".to_string(),
        "macos" => "Google Chrome".to_string(),
        // Empty means "let the OS pick the default handler".
        _ => String::new(),
    }
}
