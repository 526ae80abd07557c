use super::model::StoryLinks;
use crate::ui;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// Stories per front-page listing.
pub const PAGE_SIZE: usize = 30;

const BASE_URL: &str = "https://news.ycombinator.com/news";
const STORY_LINK_SELECTOR: &str = "span.titleline > a";

/// One listing page by number. Injected so tests can serve canned documents.
#[async_trait]
pub trait PageSource {
    async fn fetch_page(&self, page: usize) -> Result<String>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("hnreader/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch_page(&self, page: usize) -> Result<String> {
        let url = format!("{BASE_URL}?p={page}");
        let resp = self.client.get(&url).send().await?.error_for_status()?;
        Ok(resp.text().await?)
    }
}

/// Index of the last listing page needed to cover `count` stories.
/// Pages fetched is always `page_count(count) + 1` (pages are 0-based).
pub fn page_count(count: usize) -> usize {
    count / PAGE_SIZE
}

/// Fetches as many listing pages as `count` requires and collects story
/// links keyed by global rank (`page * PAGE_SIZE + position_in_page`).
///
/// A page that fails to download is logged and skipped; the collection
/// still carries whatever the other pages produced. A story anchor with
/// no href is recorded as an empty entry so ranks stay aligned. A URL
/// already collected on an earlier page is dropped, keeping the first
/// occurrence.
pub async fn fetch_stories(source: &impl PageSource, count: usize) -> Result<StoryLinks> {
    let mut links = StoryLinks::new();

    for page in 0..=page_count(count) {
        let body = match source.fetch_page(page).await {
            Ok(body) => body,
            Err(err) => {
                ui::error(&format!("failed to fetch page {page}: {err}"));
                continue;
            }
        };

        for (pos, href) in extract_links(&body).into_iter().enumerate() {
            let rank = page * PAGE_SIZE + pos;
            match href {
                Some(url) => {
                    if links.values().any(|seen| seen == &url) {
                        continue;
                    }
                    links.insert(rank, url);
                }
                None => {
                    ui::warn(&format!("story {rank} has no link, skipping..."));
                    links.insert(rank, String::new());
                }
            }
        }
    }

    Ok(links)
}

/// Story-anchor hrefs in document order; `None` for an anchor with no href.
pub fn extract_links(html: &str) -> Vec<Option<String>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(STORY_LINK_SELECTOR).unwrap();
    document
        .select(&selector)
        .map(|el| el.value().attr("href").map(resolve_href))
        .collect()
}

// Self posts (Ask HN etc.) link relatively, e.g. "item?id=123".
fn resolve_href(href: &str) -> String {
    match Url::parse(href) {
        Ok(url) => url.to_string(),
        Err(_) => Url::parse(BASE_URL)
            .ok()
            .and_then(|base| base.join(href).ok())
            .map(|url| url.to_string())
            .unwrap_or_else(|| href.to_string()),
    }
}
