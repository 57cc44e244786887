//! Small selection helpers over `scraper` documents

use crate::{ExtractError, ExtractResult};
use scraper::{ElementRef, Html, Selector};

/// Compiles a CSS selector, reporting failures as an [`ExtractError`]
pub fn selector(css: &str) -> ExtractResult<Selector> {
    Selector::parse(css).map_err(|e| ExtractError::InvalidSelector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Direct text children of an element, trimmed, blanks skipped.
///
/// Text inside nested elements is not included.
pub fn own_text(element: ElementRef<'_>) -> Vec<String> {
    element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect()
}

/// Own text of every element matching `css`, in document order
pub fn all_own_text(document: &Html, css: &str) -> ExtractResult<Vec<String>> {
    let sel = selector(css)?;
    Ok(document.select(&sel).flat_map(own_text).collect())
}

/// First own text node across all elements matching `css`
pub fn first_own_text(document: &Html, css: &str) -> ExtractResult<Option<String>> {
    let sel = selector(css)?;
    Ok(document.select(&sel).flat_map(own_text).next())
}

/// Like [`first_own_text`], but a missing match is an error
pub fn required_own_text(
    document: &Html,
    field: &'static str,
    css: &'static str,
) -> ExtractResult<String> {
    first_own_text(document, css)?.ok_or(ExtractError::MissingElement {
        field,
        selector: css,
    })
}

/// First value of `attr` on an element matching `css`
pub fn first_attr(document: &Html, css: &str, attr: &str) -> ExtractResult<Option<String>> {
    let sel = selector(css)?;
    Ok(document
        .select(&sel)
        .find_map(|el| el.value().attr(attr))
        .map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_text_skips_nested_elements() {
        let doc = Html::parse_document(
            r#"<div class="price"> <strong>250.000 €</strong> 3.000 €/m² </div>"#,
        );
        assert_eq!(
            first_own_text(&doc, ".price").unwrap(),
            Some("3.000 €/m²".to_string())
        );
        assert_eq!(
            first_own_text(&doc, ".price > strong").unwrap(),
            Some("250.000 €".to_string())
        );
    }

    #[test]
    fn test_all_own_text_in_document_order() {
        let doc = Html::parse_document("<ul><li>a</li><li> </li><li>b</li></ul><ol><li>c</li></ol>");
        assert_eq!(all_own_text(&doc, "li").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_required_own_text_missing() {
        let doc = Html::parse_document("<p>hola</p>");
        let err = required_own_text(&doc, "body", ".description").unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingElement {
                field: "body",
                selector: ".description"
            }
        ));
    }

    #[test]
    fn test_invalid_selector() {
        assert!(matches!(
            selector("div[").unwrap_err(),
            ExtractError::InvalidSelector { .. }
        ));
    }

    #[test]
    fn test_first_attr() {
        let doc = Html::parse_document(r#"<img class="logo"><img class="logo" src="/a.png">"#);
        assert_eq!(
            first_attr(&doc, ".logo", "src").unwrap(),
            Some("/a.png".to_string())
        );
        assert_eq!(first_attr(&doc, ".logo", "alt").unwrap(), None);
    }
}
