//! Field-level parsing helpers for Housfy detail pages
//!
//! Each helper states the shape of input it expects and returns an
//! [`ExtractError`] naming what was missing instead of panicking.

use crate::models::LIST_SEPARATOR;
use crate::{ExtractError, ExtractResult};

/// Word preceding the area name in the area link ("Piso en Barcelona")
pub const AREA_TOKEN: &str = "en";

/// Position of the bedroom count in the feature list
pub const BEDROOMS_INDEX: usize = 1;

/// Position of the bathroom count in the feature list
pub const BATHROOMS_INDEX: usize = 2;

/// Normalizes the free-text description into a single line.
///
/// Line breaks become separators, carriage returns are dropped and doubled
/// separators are collapsed once.
pub fn normalize_body(raw: &str) -> String {
    let doubled = LIST_SEPARATOR.repeat(2);
    raw.trim()
        .replace('\n', LIST_SEPARATOR)
        .replace('\r', "")
        .replace(&doubled, LIST_SEPARATOR)
}

/// First whitespace-separated token of a "N units" string.
///
/// The token is returned as text, it is not checked to be numeric.
pub fn leading_quantity(text: &str) -> ExtractResult<&str> {
    text.split_whitespace()
        .next()
        .ok_or_else(|| ExtractError::EmptyQuantity {
            input: text.to_string(),
        })
}

/// Area name following the first occurrence of [`AREA_TOKEN`].
///
/// Skips the token and the character after it, so `"Piso en Barcelona"`
/// yields `"Barcelona"`.
pub fn area_after_token(text: &str) -> ExtractResult<String> {
    let index = text.find(AREA_TOKEN).ok_or_else(|| ExtractError::MissingToken {
        token: AREA_TOKEN,
        input: text.to_string(),
    })?;

    let mut rest = text[index + AREA_TOKEN.len()..].chars();
    rest.next();
    Ok(rest.as_str().to_string())
}

/// Bedroom and bathroom counts from the enabled feature list.
///
/// Expects the list to read `[surface, bedrooms, bathrooms, ...]`.
pub fn room_counts<S: AsRef<str>>(details: &[S]) -> ExtractResult<(String, String)> {
    let needed = BATHROOMS_INDEX + 1;
    if details.len() < needed {
        return Err(ExtractError::TooFewDetails {
            needed,
            found: details.len(),
        });
    }

    let bedrooms = leading_quantity(details[BEDROOMS_INDEX].as_ref())?;
    let bathrooms = leading_quantity(details[BATHROOMS_INDEX].as_ref())?;
    Ok((bedrooms.to_string(), bathrooms.to_string()))
}

/// Joins list-like values the way every record field expects
pub fn join_list<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|value| value.as_ref())
        .collect::<Vec<&str>>()
        .join(LIST_SEPARATOR)
}
