//! Page text extraction using scraper.
//!
//! ### Title
//! - Text of the first `title` element that is a descendant of `head`.
//! - A page without one is malformed and yields no tags.
//!
//! ### Body
//! - Every text node of the document in order, concatenated without
//!   separators and left unnormalized. The title text is included.
//! - Text inside `script`, `style`, `noscript` and `template` is skipped.
//!
//! Bytes are decoded using the response or `<meta>` charset, falling back
//! to UTF-8 (see [`encoding`]).

pub mod encoding;

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tagbot_core::{Error, PageContent};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("head title").expect("title selector is valid"));

const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Turns raw page bytes into title and body text.
pub trait Extractor: Send + Sync {
    /// `content_type` is the response `Content-Type` header, if known.
    fn extract(&self, html: &[u8], content_type: Option<&str>) -> Result<PageContent, Error>;
}

/// HTML5-parsing extractor backed by scraper.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExtractor;

impl HtmlExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for HtmlExtractor {
    fn extract(&self, html: &[u8], content_type: Option<&str>) -> Result<PageContent, Error> {
        let source = encoding::decode_html(html, content_type);
        let document = Html::parse_document(&source);

        let title = document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>())
            .ok_or_else(|| Error::PageMalformed("no <title> inside <head>".to_string()))?;

        let body = visible_text(&document);

        Ok(PageContent { title, body })
    }
}

fn visible_text(document: &Html) -> String {
    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                ancestor.value().as_element().is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
            });
            (!hidden).then_some(&**text)
        })
        .collect()
}

/// Extract title and body from HTML using the default extractor.
pub fn extract_page(html: &[u8], content_type: Option<&str>) -> Result<PageContent, Error> {
    HtmlExtractor.extract(html, content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_compact_document() {
        let html = "<!DOCTYPE html><html><head><title>This is the title to be scraped.</title></head>\
                    <body><p>This is the body of the html file to be scraped.</p>\n</body></html>";
        let page = extract_page(html.as_bytes(), None).unwrap();
        assert_eq!(page.title, "This is the title to be scraped.");
        assert_eq!(page.body, "This is the title to be scraped.This is the body of the html file to be scraped.\n");
    }

    #[test]
    fn test_extract_skips_script_and_style() {
        let html = "<html><head><title>T</title><style>p { color: red }</style></head>\
                    <body>Hi<script>var x = 1;</script> there</body></html>";
        let page = extract_page(html.as_bytes(), None).unwrap();
        assert_eq!(page.body, "THi there");
    }

    #[test]
    fn test_extract_implied_head() {
        let page = extract_page(b"<title>Implied</title><p>Body</p>", None).unwrap();
        assert_eq!(page.title, "Implied");
        assert_eq!(page.body, "ImpliedBody");
    }

    #[test]
    fn test_extract_first_title_wins() {
        let page = extract_page(b"<html><head><title>One</title><title>Two</title></head></html>", None).unwrap();
        assert_eq!(page.title, "One");
    }

    #[test]
    fn test_extract_empty_title_is_not_malformed() {
        let page = extract_page(b"<html><head><title></title></head><body>x</body></html>", None).unwrap();
        assert_eq!(page.title, "");
        assert_eq!(page.body, "x");
    }

    #[test]
    fn test_extract_missing_title() {
        let err = extract_page(b"<html><head></head><body>no title here</body></html>", None).unwrap_err();
        assert!(matches!(err, Error::PageMalformed(_)));
    }

    #[test]
    fn test_extract_title_outside_head() {
        let err = extract_page(b"<html><head></head><body><p>text</p><title>Late</title></body></html>", None).unwrap_err();
        assert!(matches!(err, Error::PageMalformed(_)));
    }

    #[test]
    fn test_extract_undeclared_invalid_utf8() {
        let page = extract_page(b"<html><head><title>caf\xe9</title></head></html>", None).unwrap();
        assert_eq!(page.title, "caf\u{FFFD}");
    }

    #[test]
    fn test_extract_header_charset() {
        let html = b"<html><head><title>Caf\xe9</title></head><body>Caf\xe9 Caf\xe9 Caf\xe9</body></html>";
        let page = extract_page(html, Some("text/html; charset=windows-1252")).unwrap();
        assert_eq!(page.title, "Caf\u{e9}");
        assert_eq!(page.body, "Caf\u{e9}Caf\u{e9} Caf\u{e9} Caf\u{e9}");
    }

    #[test]
    fn test_extract_meta_charset() {
        let html = b"<html><head><meta charset=\"iso-8859-1\"><title>na\xefve</title></head></html>";
        let page = extract_page(html, None).unwrap();
        assert_eq!(page.title, "na\u{ef}ve");
    }

    #[test]
    fn test_extract_multiline_document_whitespace() {
        let html = "<!DOCTYPE html>\n<html>\n<head>\n<title>This is the title to be scraped.</title>\n</head>\n\
                    <body>\n<p>This is the body of the html file to be scraped.</p>\n</body>\n</html>";
        let page = extract_page(html.as_bytes(), None).unwrap();
        assert_eq!(page.title, "This is the title to be scraped.");
        assert_eq!(
            page.body,
            "\nThis is the title to be scraped.\n\n\nThis is the body of the html file to be scraped.\n\n"
        );
    }

    #[test]
    fn test_extract_decodes_entities() {
        let page = extract_page(b"<html><head><title>Fish &amp; Chips</title></head></html>", None).unwrap();
        assert_eq!(page.title, "Fish & Chips");
    }
}
