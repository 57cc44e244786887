use std::time::Duration;

/// Listing index searched when no start URL is supplied
pub const DEFAULT_LISTING_TEMPLATE: &str =
    "https://housfy.com/venta-inmuebles/barcelona/barcelona/?page={}";

/// Number of listing index pages crawled by default
pub const DEFAULT_PAGES: usize = 5;

/// HTTP settings for a crawl
#[derive(Debug, Clone)]
pub struct CrawlSettings {
    /// User agent sent with every request
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl CrawlSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CrawlSettings {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Counters reported at the end of a crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlStats {
    pub listing_pages: usize,
    pub listing_failures: usize,
    pub detail_pages: usize,
    pub dropped_pages: usize,
}
