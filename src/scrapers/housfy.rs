use crate::models::PropertyRecord;
use crate::scrapers::detail::extract_property;
use crate::scrapers::listing::parse_listing_page;
use crate::scrapers::traits::ScraperTrait;
use crate::scrapers::types::{CrawlSettings, CrawlStats};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use url::Url;

/// A fetched page body and the URL it was finally served from
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: Url,
    pub body: String,
}

/// Housfy scraper implementation
pub struct HousfyScraper {
    client: Client,
    start_urls: Vec<Url>,
}

impl HousfyScraper {
    /// Create a new Housfy scraper with default HTTP settings
    pub fn new(start_urls: Vec<Url>) -> Result<Self> {
        Self::with_settings(start_urls, CrawlSettings::default())
    }

    /// Create a new Housfy scraper with custom HTTP settings
    pub fn with_settings(start_urls: Vec<Url>, settings: CrawlSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(&settings.user_agent)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, start_urls })
    }

    pub fn start_urls(&self) -> &[Url] {
        &self.start_urls
    }

    /// GET a page, failing on transport errors and non-success statuses
    pub async fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to fetch {}: {}", url, response.status());
        }

        let final_url = response.url().clone();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body of {}", url))?;

        debug!("Downloaded {} bytes from {}", body.len(), final_url);
        Ok(FetchedPage {
            url: final_url,
            body,
        })
    }

    /// Detail page URLs linked from one listing page
    pub async fn scrape_listing_page(&self, url: &Url) -> Result<Vec<String>> {
        let page = self.fetch(url).await?;
        let urls = parse_listing_page(&page.body, &page.url)
            .with_context(|| format!("Failed to parse listing page {}", page.url))?;
        Ok(urls.collect())
    }

    /// One record from one detail page
    pub async fn scrape_property(&self, url: &Url) -> Result<PropertyRecord> {
        let page = self.fetch(url).await?;
        extract_property(&page.body, page.url.as_str())
            .with_context(|| format!("Failed to extract property from {}", page.url))
    }

    /// Runs the crawl and returns the records together with its counters
    pub async fn scrape_with_stats(&self) -> Result<(Vec<PropertyRecord>, CrawlStats)> {
        let started = Utc::now();
        let mut stats = CrawlStats::default();
        let mut seen = HashSet::new();
        let mut detail_urls = Vec::new();

        info!("Starting Housfy crawl from {} start URLs", self.start_urls.len());

        for url in &self.start_urls {
            match self.scrape_listing_page(url).await {
                Ok(urls) => {
                    stats.listing_pages += 1;
                    debug!("Found {} property links on {}", urls.len(), url);
                    detail_urls.extend(urls.into_iter().filter(|u| seen.insert(u.clone())));
                }
                Err(e) => {
                    stats.listing_failures += 1;
                    warn!("Skipping listing page {}: {:#}", url, e);
                }
            }
        }

        info!("Found {} unique property pages", detail_urls.len());

        let mut properties = Vec::new();
        for raw in &detail_urls {
            let url = match Url::parse(raw) {
                Ok(url) => url,
                Err(e) => {
                    stats.dropped_pages += 1;
                    warn!("Dropping property page {}: {}", raw, e);
                    continue;
                }
            };

            match self.scrape_property(&url).await {
                Ok(property) => {
                    stats.detail_pages += 1;
                    properties.push(property);
                }
                Err(e) => {
                    stats.dropped_pages += 1;
                    warn!("Dropping property page {}: {:#}", url, e);
                }
            }
        }

        let elapsed = Utc::now() - started;
        info!(
            "Crawl finished in {}s: {} listing pages ({} failed), {} properties, {} dropped",
            elapsed.num_seconds(),
            stats.listing_pages,
            stats.listing_failures,
            stats.detail_pages,
            stats.dropped_pages
        );

        Ok((properties, stats))
    }
}

#[async_trait]
impl ScraperTrait for HousfyScraper {
    async fn scrape(&self) -> Result<Vec<PropertyRecord>> {
        let (properties, _) = self.scrape_with_stats().await?;
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "Housfy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_start_urls() {
        let urls = vec![Url::parse("https://housfy.com/venta-inmuebles/barcelona/barcelona/?page=1").unwrap()];
        let scraper = HousfyScraper::new(urls.clone()).unwrap();
        assert_eq!(scraper.start_urls(), urls.as_slice());
        assert_eq!(scraper.source_name(), "Housfy");
    }
}
