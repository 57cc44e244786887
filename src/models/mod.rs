use serde::{Deserialize, Serialize};

pub const RESOURCE_URL: &str = "https://housfy.com/";
pub const RESOURCE_TITLE: &str = "Housfy";
pub const RESOURCE_COUNTRY: &str = "ES";

/// Separator used for every list-like field of a record
pub const LIST_SEPARATOR: &str = ";";

/// One scraped Housfy listing.
///
/// The record is flat on purpose: list-like fields (`location`, `tags`,
/// `certification_status`, `image_urls`) are `;`-joined strings and fields the
/// site does not expose are kept as empty strings so every record carries the
/// same schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    // Resource
    pub resource_url: String,
    pub resource_title: String,
    pub resource_country: String,

    // Property
    pub active: u8,
    pub url: String,
    pub title: Option<String>,
    pub subtitle: String,
    pub location: String,
    pub extra_location: String,
    pub body: String,

    // Price
    pub current_price: Option<String>,
    pub original_price: Option<String>,
    pub price_m2: Option<String>,
    pub area_market_price: String,
    pub square_meters: String,

    // Details
    pub area: String,
    pub tags: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub last_update: String,
    pub certification_status: String,
    pub consumption: String,
    pub emissions: String,

    // Multimedia
    pub main_image_url: Option<String>,
    pub image_urls: String,
    pub floor_plan: String,
    pub energy_certificate: String,
    pub video: String,

    // Agents
    pub seller_type: Option<String>,
    pub agent: String,
    pub ref_agent: String,
    pub source: Option<String>,
    pub ref_source: String,
    pub phone_number: String,

    // Additional
    pub additional_url: String,
    pub published: String,
    pub scraped_ts: String,
}

impl PropertyRecord {
    /// A record for `url` with the resource constants filled in and every
    /// other field empty.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            resource_url: RESOURCE_URL.to_string(),
            resource_title: RESOURCE_TITLE.to_string(),
            resource_country: RESOURCE_COUNTRY.to_string(),
            active: 1,
            url: url.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_resource_constants() {
        let record = PropertyRecord::new("https://housfy.com/piso/1");
        assert_eq!(record.resource_url, "https://housfy.com/");
        assert_eq!(record.resource_title, "Housfy");
        assert_eq!(record.resource_country, "ES");
        assert_eq!(record.active, 1);
        assert_eq!(record.url, "https://housfy.com/piso/1");
    }

    #[test]
    fn test_placeholders_serialize_as_empty_strings() {
        let record = PropertyRecord::new("https://housfy.com/piso/1");
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        for field in [
            "subtitle",
            "extra_location",
            "area_market_price",
            "last_update",
            "consumption",
            "emissions",
            "floor_plan",
            "energy_certificate",
            "video",
            "agent",
            "ref_agent",
            "ref_source",
            "phone_number",
            "additional_url",
            "published",
            "scraped_ts",
        ] {
            assert_eq!(object.get(field), Some(&serde_json::json!("")), "{field}");
        }
        assert_eq!(object.get("main_image_url"), Some(&serde_json::Value::Null));
        assert_eq!(object.len(), 37);
    }
}
