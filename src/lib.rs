//! Housfy Scout: a listing crawler for housfy.com
//!
//! This crate fetches the Housfy listing index, follows every property card
//! to its detail page and extracts one flat [`PropertyRecord`] per property.

pub mod config;
pub mod models;
pub mod scrapers;

use thiserror::Error;

/// Errors raised while extracting fields from a fetched page.
///
/// Any of these aborts extraction of a single detail page; the crawl loop
/// logs it and moves on to the next page.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Missing {field}: nothing matched {selector:?}")]
    MissingElement {
        field: &'static str,
        selector: &'static str,
    },

    #[error("Token {token:?} not found in {input:?}")]
    MissingToken { token: &'static str, input: String },

    #[error("Expected at least {needed} detail entries, found {found}")]
    TooFewDetails { needed: usize, found: usize },

    #[error("No quantity in {input:?}")]
    EmptyQuantity { input: String },

    #[error("Image container has no {attribute:?} attribute")]
    MissingImagesAttribute { attribute: &'static str },

    #[error("Failed to parse image list: {0}")]
    ImageList(#[from] serde_yaml::Error),
}

/// Errors raised while resolving the start URLs of a crawl
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read URL file {path}: {source}")]
    UrlFile {
        path: String,
        source: std::io::Error,
    },

    #[error("URL file {0} contains no URLs")]
    EmptyUrlFile(String),

    #[error("Invalid start URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: ::url::ParseError,
    },
}

/// Result type alias for extraction operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

pub use config::resolve_start_urls;
pub use models::PropertyRecord;
pub use scrapers::{HousfyScraper, ScraperTrait};
