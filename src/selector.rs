//! Content region selector.
//!
//! A region is identified by a tag name plus one class. An element matches
//! when its tag equals the tag and any of its whitespace-separated classes
//! equals the class, i.e. the CSS selector `tag.class`.

use std::fmt;

use dom_query::Matcher;

use crate::error::{Error, Result};

/// Tag of the main content region.
pub const DEFAULT_TAG: &str = "div";

/// Class of the main content region.
pub const DEFAULT_CLASS: &str = "content--main";

/// Tag + class pair identifying a page's content region.
///
/// # Example
///
/// ```rust
/// use qnabot_pages::ContentSelector;
///
/// let selector = ContentSelector::default();
/// assert_eq!(selector.to_css()?, "div.content--main");
/// # Ok::<(), qnabot_pages::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSelector {
    pub tag: String,
    pub class: String,
}

impl ContentSelector {
    #[must_use]
    pub fn new(tag: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: class.into(),
        }
    }

    /// Renders the selector as CSS.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Selector`] if the tag or class is not a plain CSS
    /// identifier. A class such as `"a b"` would otherwise turn into a
    /// descendant combinator.
    pub fn to_css(&self) -> Result<String> {
        if !is_identifier(&self.tag) {
            return Err(self.invalid("tag is not a CSS identifier"));
        }
        if !is_identifier(&self.class) {
            return Err(self.invalid("class is not a CSS identifier"));
        }
        Ok(format!("{}.{}", self.tag, self.class))
    }

    /// Compiles the selector for `dom_query`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Selector`] if the selector cannot be rendered or
    /// parsed.
    pub fn compile(&self) -> Result<Matcher> {
        let css = self.to_css()?;
        Matcher::new(&css).map_err(|e| self.invalid(&format!("{e:?}")))
    }

    fn invalid(&self, reason: &str) -> Error {
        Error::Selector {
            selector: self.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Default for ContentSelector {
    fn default() -> Self {
        Self::new(DEFAULT_TAG, DEFAULT_CLASS)
    }
}

impl fmt::Display for ContentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tag, self.class)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '-')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
