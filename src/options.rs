//! Configuration options for fetching and extraction.
//!
//! The `Options` struct controls how pages are requested and how an empty
//! content region is treated.

use std::time::Duration;

use crate::selector::ContentSelector;

/// How a page with no matching content region is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptinessCheck {
    /// Report the page as failed and skip it.
    #[default]
    Intended,

    /// Never report a page as failed; an empty region is passed through.
    ///
    /// Matches the historical script, whose emptiness test could not fire.
    Literal,
}

/// Configuration options for fetching and extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use qnabot_pages::{EmptinessCheck, Options};
/// use std::time::Duration;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     emptiness_check: EmptinessCheck::Literal,
///     timeout: Some(Duration::from_secs(10)),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Selector for the content region.
    ///
    /// Default: `div.content--main`
    pub selector: ContentSelector,

    /// Treatment of pages with no matching region.
    ///
    /// Default: [`EmptinessCheck::Intended`]
    pub emptiness_check: EmptinessCheck,

    /// Total request timeout.
    ///
    /// `None` waits for as long as the server keeps the connection open.
    ///
    /// Default: `None`
    pub timeout: Option<Duration>,

    /// `User-Agent` header sent with each request.
    ///
    /// Default: `None` (the HTTP client's own)
    pub user_agent: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            selector: ContentSelector::default(),
            emptiness_check: EmptinessCheck::Intended,
            timeout: None,
            user_agent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_script_behavior() {
        let options = Options::default();
        assert_eq!(options.selector, ContentSelector::default());
        assert_eq!(options.emptiness_check, EmptinessCheck::Intended);
        assert!(options.timeout.is_none());
        assert!(options.user_agent.is_none());
    }

    #[test]
    fn struct_update_overrides_selected_fields_only() {
        let options = Options {
            emptiness_check: EmptinessCheck::Literal,
            ..Options::default()
        };
        assert_eq!(options.emptiness_check, EmptinessCheck::Literal);
        assert_eq!(options.selector, ContentSelector::default());
    }
}
