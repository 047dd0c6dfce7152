//! Job-posting fetcher — one HTTP GET, then visible-text extraction.
//!
//! The output is a single normalized text blob; truncation for prompts is
//! the consumer's job, not this module's.

use async_trait::async_trait;
use reqwest::{header, Client};
use ego_tree::NodeRef;
use scraper::{Html, Node};
use tracing::info;

use crate::errors::AppError;

/// Some job boards answer bots with empty shells; identify as a browser.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const FETCH_TIMEOUT_SECS: u64 = 30;

/// Markup subtrees that never contain posting text.
const STRIPPED_TAGS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

/// Retrieves a URL and reduces it to plain text.
///
/// Held in `AppState` as `Arc<dyn PageFetcher>`; tests substitute a stub
/// that returns canned job text.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, AppError>;
}

/// Production fetcher backed by a shared reqwest client.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    /// One GET, no retry. Any transport error or non-success status fails
    /// the whole run.
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        info!("Fetching job posting from {url}");

        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await
            .map_err(|e| AppError::Fetch(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch(format!("{url} returned status {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Fetch(format!("failed to read body from {url}: {e}")))?;

        let text = extract_visible_text(&body);
        info!("Extracted {} characters of visible text from {url}", text.len());

        Ok(text)
    }
}

/// Strips chrome markup from an HTML document and returns its visible text
/// with all whitespace runs collapsed to single spaces.
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::new();
    collect_text(document.tree.root(), &mut raw);

    // Collapse newlines, double-space phrase breaks, and runs of spaces
    // into single spaces between non-empty fragments.
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    if let Node::Element(element) = node.value() {
        if STRIPPED_TAGS.contains(&element.name()) {
            return;
        }
    }
    if let Node::Text(text) = node.value() {
        out.push_str(&text.text);
        out.push(' ');
    }
    for child in node.children() {
        collect_text(child, out);
    }
}
