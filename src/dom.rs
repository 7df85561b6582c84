//! HTML query collaborator.
//!
//! [`HtmlQuery`] is the seam between the fetcher and the HTML parser.
//! [`DomQuery`] implements it with `dom_query`; tests substitute fakes.

pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

use crate::error::Result;
use crate::result::{ContentNode, ContentRegion};
use crate::selector::ContentSelector;

/// Finds the content region of an HTML document.
pub trait HtmlQuery {
    /// Returns every element of `html` matching `selector`, in document order.
    ///
    /// Malformed HTML is not an error; it is parsed best-effort.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Selector`](crate::Error::Selector) if the selector is
    /// invalid.
    fn query(&self, html: &str, selector: &ContentSelector) -> Result<ContentRegion>;
}

impl<Q: HtmlQuery + ?Sized> HtmlQuery for &Q {
    fn query(&self, html: &str, selector: &ContentSelector) -> Result<ContentRegion> {
        (**self).query(html, selector)
    }
}

/// [`HtmlQuery`] backed by `dom_query`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomQuery;

impl HtmlQuery for DomQuery {
    fn query(&self, html: &str, selector: &ContentSelector) -> Result<ContentRegion> {
        let matcher = selector.compile()?;
        let doc = parse(html);
        let nodes = doc
            .select_matcher(&matcher)
            .iter()
            .map(|sel| ContentNode {
                html: outer_html(&sel).to_string(),
                text: text_content(&sel).to_string(),
            })
            .collect();
        Ok(ContentRegion { nodes })
    }
}

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn query(html: &str) -> ContentRegion {
        DomQuery.query(html, &ContentSelector::default()).unwrap()
    }

    #[test]
    fn finds_main_content_div() {
        let region = query(r#"<div class="content--main">Hi</div>"#);
        assert_eq!(region.len(), 1);
        assert_eq!(region.nodes[0].text, "Hi");
        assert!(region.nodes[0].html.starts_with("<div"));
        assert!(region.nodes[0].html.contains("content--main"));
    }

    #[test]
    fn no_match_for_other_class() {
        assert!(query(r#"<div class="other">Hi</div>"#).is_empty());
    }

    #[test]
    fn class_matches_one_of_many() {
        let region = query(r#"<div class="layout content--main wide">Body</div>"#);
        assert_eq!(region.len(), 1);
    }

    #[test]
    fn class_must_match_whole_token() {
        assert!(query(r#"<div class="content--main-sidebar">x</div>"#).is_empty());
        assert!(query(r#"<div class="content">x</div>"#).is_empty());
    }

    #[test]
    fn tag_must_match() {
        assert!(query(r#"<section class="content--main">x</section>"#).is_empty());
    }

    #[test]
    fn returns_all_matches_in_document_order() {
        let region = query(
            r#"
            <body>
                <div class="content--main">First</div>
                <aside><div class="content--main">Second</div></aside>
                <div class="content--main">Third</div>
            </body>
        "#,
        );
        let texts: Vec<_> = region.nodes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["First", "Second", "Third"]);
    }

    #[test]
    fn nested_text_is_collected() {
        let region = query(
            r#"<div class="content--main"><h1>Title</h1><p>Body <b>bold</b></p></div>"#,
        );
        assert_eq!(region.len(), 1);
        assert!(region.nodes[0].text.contains("Title"));
        assert!(region.nodes[0].text.contains("Body bold"));
    }

    #[test]
    fn malformed_html_is_tolerated() {
        let region = query(r#"<p>intro<div class="content--main">unclosed <span>text"#);
        assert_eq!(region.len(), 1);
        assert!(region.nodes[0].text.contains("unclosed"));

        assert!(query("").is_empty());
        assert!(query("<<<>>>&&&").is_empty());
    }

    #[test]
    fn invalid_selector_is_an_error() {
        let result = DomQuery.query("<div></div>", &ContentSelector::new("div", "a b"));
        assert!(matches!(result, Err(Error::Selector { .. })));
    }
}
