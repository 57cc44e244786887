pub mod detail;
pub mod fields;
pub mod html;
pub mod housfy;
pub mod images;
pub mod listing;
pub mod traits;
pub mod types;

pub use detail::extract_property;
pub use housfy::HousfyScraper;
pub use listing::parse_listing_page;
pub use traits::ScraperTrait;
