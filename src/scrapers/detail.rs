use crate::models::PropertyRecord;
use crate::scrapers::fields::{
    area_after_token, join_list, leading_quantity, normalize_body, room_counts,
};
use crate::scrapers::html::{all_own_text, first_attr, first_own_text, required_own_text};
use crate::scrapers::images::extract_images;
use crate::{ExtractError, ExtractResult};
use scraper::Html;

// Most lookups match the whole class attribute, so an element carrying an
// extra class is not picked up. Only TITLE and SOURCE match on a single class.
pub const TITLE: &str = ".propertyDetail__address";
pub const LOCATION: &str = r#"[class="propertyDetail__exactLocationContent"] > p"#;
pub const BODY: &str = r#"[class="collapseText__content propertyDetail__descriptionContent"]"#;
pub const PRICE: &str = r#"[class="propertyDetail__mainData__price"] > strong"#;
pub const PRICE_M2: &str = r#"[class="propertyDetail__mainData__price"]"#;
pub const FEATURES: &str =
    r#"[class="propertyDetail__feature propertyDetail__feature--enabled"] > span"#;
pub const AREA: &str =
    r#"[class="propertyDetail__boxedSection propertyDetail__spacedBetween"] > a"#;
pub const CERTIFICATION: &str =
    r#"[class="propertyDetail__specsContainer"] > div:nth-of-type(6) > span"#;
pub const SELLER_TYPE: &str = r#"[class="propertyDetail__ownerName"] > span"#;
pub const SOURCE: &str = ".hide-sticky-mobile[src]";

/// Extracts one record from a property detail page.
///
/// `url` is the address the page was served from. Any required field that is
/// missing from the page fails the whole extraction; no partial record is
/// returned.
pub fn extract_property(html: &str, url: &str) -> ExtractResult<PropertyRecord> {
    let document = Html::parse_document(html);
    let mut property = PropertyRecord::new(url);

    // Property
    property.title = first_own_text(&document, TITLE)?;
    property.location = join_list(&all_own_text(&document, LOCATION)?);
    property.body = normalize_body(&required_own_text(&document, "body", BODY)?);

    // Price
    let price = first_own_text(&document, PRICE)?;
    property.current_price = price.clone();
    property.original_price = price;
    property.price_m2 = first_own_text(&document, PRICE_M2)?;

    // Details
    let details = all_own_text(&document, FEATURES)?;
    let surface = details.first().ok_or(ExtractError::MissingElement {
        field: "square_meters",
        selector: FEATURES,
    })?;
    property.square_meters = leading_quantity(surface)?.to_string();

    property.area = area_after_token(&required_own_text(&document, "area", AREA)?)?;
    property.tags = join_list(&details);
    let (bedrooms, bathrooms) = room_counts(&details)?;
    property.bedrooms = bedrooms;
    property.bathrooms = bathrooms;
    property.certification_status = join_list(&all_own_text(&document, CERTIFICATION)?);

    // Multimedia
    let images = extract_images(&document)?;
    property.main_image_url = images.main_image_url;
    property.image_urls = images.image_urls;

    // Agents
    property.seller_type = first_own_text(&document, SELLER_TYPE)?;
    property.source = first_attr(&document, SOURCE, "src")?;

    Ok(property)
}
