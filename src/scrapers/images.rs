//! Photo gallery decoding for Housfy detail pages
//!
//! The gallery is a `<property-images>` custom element whose `:images-array`
//! attribute holds the photo list as a YAML flow sequence, e.g.
//! `[{url: '...', isMain: true}, {url: '...', isMain: false}]`.

use crate::models::LIST_SEPARATOR;
use crate::scrapers::html::selector;
use crate::{ExtractError, ExtractResult};
use scraper::Html;
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

pub const IMAGES_CONTAINER: &str = ".propertyDetail > property-images";
pub const IMAGES_ELEMENT: &str = "property-images";
pub const IMAGES_ATTRIBUTE: &str = ":images-array";

/// One entry of the gallery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub url: String,
    #[serde(rename = "isMain", default, deserialize_with = "truthy")]
    pub is_main: bool,
}

/// Reads a flag the way the gallery writes it: booleans, `yes`/`no`/`on`/`off`
/// words, numbers (non-zero is set) and any other non-empty value.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(is_truthy(&Value::deserialize(deserializer)?))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "yes" | "true" | "on" => true,
            "no" | "false" | "off" | "" => false,
            _ => true,
        },
        Value::Sequence(items) => !items.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

/// Photos of one property, split into the cover photo and the rest
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyImages {
    pub main_image_url: Option<String>,
    pub image_urls: String,
}

/// Outer markup of the gallery element
pub fn images_container(document: &Html) -> ExtractResult<String> {
    let sel = selector(IMAGES_CONTAINER)?;
    document
        .select(&sel)
        .next()
        .map(|el| el.html())
        .ok_or(ExtractError::MissingElement {
            field: "images",
            selector: IMAGES_CONTAINER,
        })
}

/// Parses the gallery markup and decodes its image list
pub fn decode_images(markup: &str) -> ExtractResult<Vec<ImageDescriptor>> {
    let fragment = Html::parse_fragment(markup);
    let sel = selector(IMAGES_ELEMENT)?;

    let raw = fragment
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr(IMAGES_ATTRIBUTE))
        .ok_or(ExtractError::MissingImagesAttribute {
            attribute: IMAGES_ATTRIBUTE,
        })?;

    Ok(serde_yaml::from_str(raw)?)
}

/// URL of the first image flagged as main
pub fn main_photo(images: &[ImageDescriptor]) -> Option<&str> {
    images
        .iter()
        .find(|image| image.is_main)
        .map(|image| image.url.as_str())
}

/// URLs of every image not flagged as main, in gallery order
pub fn other_photos(images: &[ImageDescriptor]) -> Vec<&str> {
    images
        .iter()
        .filter(|image| !image.is_main)
        .map(|image| image.url.as_str())
        .collect()
}

/// Reads the gallery of a detail page
pub fn extract_images(document: &Html) -> ExtractResult<PropertyImages> {
    let images = decode_images(&images_container(document)?)?;

    Ok(PropertyImages {
        main_image_url: main_photo(&images).map(str::to_string),
        image_urls: other_photos(&images).join(LIST_SEPARATOR),
    })
}
