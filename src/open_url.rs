use anyhow::Result;

/// Browser-open capability. Injected so tests can record open requests
/// instead of spawning a real browser.
pub trait Opener {
    fn open(&mut self, url: &str, browser: &str) -> Result<()>;
}

/// Opens URLs through the OS: the system default handler when no browser
/// was named, otherwise the named application.
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&mut self, url: &str, browser: &str) -> Result<()> {
        if browser.is_empty() {
            open::that(url)?;
        } else {
            open::with(url, browser)?;
        }
        Ok(())
    }
}
