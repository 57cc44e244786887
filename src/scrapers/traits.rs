use crate::models::PropertyRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all property scrapers
#[async_trait]
pub trait ScraperTrait: Send + Sync {
    /// Crawl the source and return one record per property page extracted
    async fn scrape(&self) -> Result<Vec<PropertyRecord>>;

    /// Get the name of the scraper source
    fn source_name(&self) -> &'static str;
}
