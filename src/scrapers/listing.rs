use crate::scrapers::html::selector;
use crate::ExtractResult;
use scraper::Html;
use std::collections::hash_set::IntoIter;
use std::collections::HashSet;
use tracing::debug;
use url::Url;

/// Anchors inside a property card on a listing index page
pub const PROPERTY_CARD_LINK: &str = ".property-card a";

/// Extracts the detail page links from one listing index page.
///
/// Links are resolved against `page_url` and de-duplicated, so the returned
/// iterator never yields the same URL twice. Ordering is not preserved. A page
/// without property cards yields nothing.
pub fn parse_listing_page(html: &str, page_url: &Url) -> ExtractResult<IntoIter<String>> {
    let document = Html::parse_document(html);
    let card_link = selector(PROPERTY_CARD_LINK)?;

    let mut urls = HashSet::new();
    for href in document
        .select(&card_link)
        .filter_map(|a| a.value().attr("href"))
    {
        match page_url.join(href.trim()) {
            Ok(url) => {
                urls.insert(url.to_string());
            }
            Err(e) => debug!("Skipping card link {:?}: {}", href, e),
        }
    }

    Ok(urls.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://housfy.com/venta-inmuebles/barcelona/barcelona/?page=1").unwrap()
    }

    const LISTING: &str = r#"
        <html><body>
          <div class="property-card">
            <a href="https://housfy.com/comprar-piso/1"><img src="1.jpg"></a>
            <a href="https://housfy.com/comprar-piso/1">Piso en Sants</a>
          </div>
          <div class="property-card">
            <a href="/comprar-piso/2">Piso en Gràcia</a>
          </div>
          <div class="property-card">
            <a href="https://housfy.com/comprar-piso/3">Ático en Eixample</a>
            <a>sin enlace</a>
          </div>
          <a href="https://housfy.com/vender">Vende tu casa</a>
        </body></html>
    "#;

    #[test]
    fn test_yields_each_card_link_once() {
        let mut urls: Vec<String> = parse_listing_page(LISTING, &page_url()).unwrap().collect();
        urls.sort();
        assert_eq!(
            urls,
            vec![
                "https://housfy.com/comprar-piso/1",
                "https://housfy.com/comprar-piso/2",
                "https://housfy.com/comprar-piso/3",
            ]
        );
    }

    #[test]
    fn test_ignores_links_outside_cards() {
        let urls: HashSet<String> = parse_listing_page(LISTING, &page_url()).unwrap().collect();
        assert!(!urls.contains("https://housfy.com/vender"));
    }

    #[test]
    fn test_skips_unresolvable_links() {
        let html = r#"
            <div class="property-card"><a href="http://[">Roto</a></div>
            <div class="property-card"><a href="/comprar-piso/9">Piso en Horta</a></div>
        "#;
        let urls: Vec<String> = parse_listing_page(html, &page_url()).unwrap().collect();
        assert_eq!(urls, vec!["https://housfy.com/comprar-piso/9"]);
    }

    #[test]
    fn test_no_cards_yields_nothing() {
        let html = "<html><body><p>No hay resultados</p></body></html>";
        assert_eq!(parse_listing_page(html, &page_url()).unwrap().count(), 0);
    }
}
