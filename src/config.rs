//! Command-line surface and start URL resolution

use crate::scrapers::types::{CrawlSettings, DEFAULT_LISTING_TEMPLATE, DEFAULT_PAGES};
use crate::{ConfigError, ConfigResult};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use url::Url;

/// Housfy Scout: crawls Housfy listings into flat property records
#[derive(Parser, Debug)]
#[command(name = "housfy-scout")]
#[command(version)]
#[command(about = "Crawls Housfy listings into flat property records", long_about = None)]
pub struct Cli {
    /// Single listing page to start from (overrides --url-file)
    #[arg(long, value_name = "URL")]
    pub page_url: Option<String>,

    /// File with one start URL per line
    #[arg(long, value_name = "PATH")]
    pub url_file: Option<PathBuf>,

    /// Number of default listing pages to crawl
    #[arg(long, default_value_t = DEFAULT_PAGES)]
    pub pages: usize,

    /// Where to write the scraped records
    #[arg(short, long, default_value = "scraped_properties.json")]
    pub output: PathBuf,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn settings(&self) -> CrawlSettings {
        CrawlSettings {
            timeout_secs: self.timeout_secs,
            ..CrawlSettings::default()
        }
    }

    pub fn start_urls(&self) -> ConfigResult<Vec<Url>> {
        resolve_start_urls(self.page_url.as_deref(), self.url_file.as_deref(), self.pages)
    }
}

/// Picks the start URLs of a crawl.
///
/// Precedence is: `page_url`, then `url_file`, then the first `pages` pages of
/// the default Barcelona listing. Supplying neither a URL nor a file is not an
/// error.
pub fn resolve_start_urls(
    page_url: Option<&str>,
    url_file: Option<&Path>,
    pages: usize,
) -> ConfigResult<Vec<Url>> {
    if let Some(page_url) = page_url.map(str::trim).filter(|u| !u.is_empty()) {
        if let Some(path) = url_file {
            info!("Ignoring URL file {} in favour of {}", path.display(), page_url);
        }
        return Ok(vec![parse_url(page_url)?]);
    }

    if let Some(path) = url_file {
        return read_url_file(path);
    }

    info!("No start URL given, crawling {} default listing pages", pages);
    default_listing_pages(pages)
}

/// First `pages` pages of the default listing index
pub fn default_listing_pages(pages: usize) -> ConfigResult<Vec<Url>> {
    (1..=pages)
        .map(|page| parse_url(&DEFAULT_LISTING_TEMPLATE.replace("{}", &page.to_string())))
        .collect()
}

/// Reads one URL per line, skipping blank lines and `#` comments
pub fn read_url_file(path: &Path) -> ConfigResult<Vec<Url>> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::UrlFile {
        path: path.display().to_string(),
        source,
    })?;

    let urls = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_url)
        .collect::<ConfigResult<Vec<_>>>()?;

    if urls.is_empty() {
        return Err(ConfigError::EmptyUrlFile(path.display().to_string()));
    }
    Ok(urls)
}

fn parse_url(raw: &str) -> ConfigResult<Url> {
    Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}
