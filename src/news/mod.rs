mod fetch;
mod model;

pub use fetch::{HttpSource, PAGE_SIZE, PageSource, fetch_stories, page_count};
pub use model::StoryLinks;

use crate::open_url::{Opener, SystemOpener};
use crate::ui;
use anyhow::{Result, anyhow};

pub async fn run(tabs: usize, browser: &str) -> Result<()> {
    let source = HttpSource::new()?;
    let links = fetch_stories(&source, tabs).await?;
    ui::info(&format!("fetched {} stories", links.len()));
    open_stories(&links, tabs, browser, &mut SystemOpener)
}

/// Opens links in ascending rank order, stopping before rank `count`.
/// Empty links (failed extraction) are skipped. An opener failure is
/// fatal: nothing past the failing link is attempted.
pub fn open_stories(
    links: &StoryLinks,
    count: usize,
    browser: &str,
    opener: &mut impl Opener,
) -> Result<()> {
    for (&rank, url) in links {
        if rank >= count {
            break;
        }
        if url.is_empty() {
            continue;
        }
        if opener.open(url, browser).is_err() {
            let name = if browser.is_empty() { "the default browser" } else { browser };
            return Err(anyhow!("{name} is not found on this computer..."));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingOpener {
        calls: Vec<(String, String)>,
        fail_from: Option<usize>,
    }

    impl RecordingOpener {
        fn new() -> Self {
            Self { calls: Vec::new(), fail_from: None }
        }

        fn failing_from(n: usize) -> Self {
            Self { calls: Vec::new(), fail_from: Some(n) }
        }
    }

    impl Opener for RecordingOpener {
        fn open(&mut self, url: &str, browser: &str) -> Result<()> {
            if self.fail_from.is_some_and(|n| self.calls.len() >= n) {
                return Err(anyhow!("browser missing"));
            }
            self.calls.push((url.to_string(), browser.to_string()));
            Ok(())
        }
    }

    fn links(urls: &[(usize, &str)]) -> StoryLinks {
        urls.iter().map(|&(k, v)| (k, v.to_string())).collect()
    }

    #[test]
    fn opens_first_count_links_in_order() {
        let collection: StoryLinks = (0..30)
            .map(|i| (i, format!("https://example.com/u{i}")))
            .collect();
        let mut opener = RecordingOpener::new();

        open_stories(&collection, 10, "firefox", &mut opener).unwrap();

        assert_eq!(opener.calls.len(), 10);
        for (i, (url, browser)) in opener.calls.iter().enumerate() {
            assert_eq!(url, &format!("https://example.com/u{i}"));
            assert_eq!(browser, "firefox");
        }
    }

    #[test]
    fn never_opens_past_count_even_with_gaps() {
        // 3 is missing (deduped), so no key equals count=3; the bound
        // still holds.
        let collection = links(&[(0, "https://a"), (1, "https://b"), (5, "https://f")]);
        let mut opener = RecordingOpener::new();

        open_stories(&collection, 3, "", &mut opener).unwrap();

        assert_eq!(opener.calls.len(), 2);
    }

    #[test]
    fn skips_empty_links_without_error() {
        let collection = links(&[(0, "https://a"), (1, ""), (2, "https://c")]);
        let mut opener = RecordingOpener::new();

        open_stories(&collection, 3, "", &mut opener).unwrap();

        let opened: Vec<&str> = opener.calls.iter().map(|(u, _)| u.as_str()).collect();
        assert_eq!(opened, vec!["https://a", "https://c"]);
    }

    #[test]
    fn opener_failure_is_fatal_and_stops_the_walk() {
        let collection = links(&[
            (0, "https://a"),
            (1, "https://b"),
            (2, "https://c"),
            (3, "https://d"),
        ]);
        let mut opener = RecordingOpener::failing_from(2);

        let err = open_stories(&collection, 4, "netscape", &mut opener).unwrap_err();

        assert!(err.to_string().contains("netscape"));
        assert_eq!(opener.calls.len(), 2, "no request after the failing one");
    }

    #[test]
    fn same_inputs_open_same_sequence() {
        let collection = links(&[(0, "https://a"), (1, "https://b"), (2, "https://c")]);
        let mut first = RecordingOpener::new();
        let mut second = RecordingOpener::new();

        open_stories(&collection, 2, "firefox", &mut first).unwrap();
        open_stories(&collection, 2, "firefox", &mut second).unwrap();

        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn empty_collection_opens_nothing() {
        let mut opener = RecordingOpener::new();
        open_stories(&StoryLinks::new(), 10, "", &mut opener).unwrap();
        assert!(opener.calls.is_empty());
    }
}
