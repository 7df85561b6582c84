//! # qnabot-pages
//!
//! Fetches the pages listed for a topic in a JSON config and extracts the
//! main content region (`div.content--main`) of each one, as input for a
//! question-answering knowledge base.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qnabot_pages::{BlockingClient, Config, Options, PageFetcher};
//!
//! let config = Config::load("config.json")?;
//! let options = Options::default();
//! let fetcher = PageFetcher::new(BlockingClient::new(&options)?, options);
//!
//! for report in fetcher.fetch_topic_content("dynatrace", &config)? {
//!     let report = report?;
//!     match report.diagnostic() {
//!         Some(line) => println!("{line}"),
//!         None => println!("{}: {} nodes", report.url, report.region().map_or(0, |r| r.len())),
//!     }
//! }
//! # Ok::<(), qnabot_pages::Error>(())
//! ```
//!
//! ## Collaborators
//!
//! The network and the HTML parser sit behind [`HttpClient`] and
//! [`HtmlQuery`]. Production code uses [`BlockingClient`] and [`DomQuery`];
//! anything implementing the traits can be injected instead.

mod config;
mod error;
mod fetcher;
mod options;
mod result;
mod selector;

/// HTML query collaborator backed by `dom_query`.
pub mod dom;

/// Character encoding detection for response bodies.
pub mod encoding;

/// HTTP client collaborator backed by `reqwest`.
pub mod http;

// Public API - re-exports
pub use config::{Config, DEFAULT_CONFIG_PATH, DEFAULT_TOPIC};
pub use dom::{DomQuery, HtmlQuery};
pub use error::{Error, Result};
pub use fetcher::{PageFetcher, TopicPages};
pub use http::{BlockingClient, HttpClient, HttpResponse};
pub use options::{EmptinessCheck, Options};
pub use result::{failure_diagnostic, ContentNode, ContentRegion, PageReport, PageResult, RunSummary};
pub use selector::{ContentSelector, DEFAULT_CLASS, DEFAULT_TAG};

/// Extracts the main content region from an HTML document.
///
/// # Example
///
/// ```rust
/// use qnabot_pages::extract_region;
///
/// let region = extract_region(r#"<div class="content--main">Hi</div>"#)?;
/// assert_eq!(region.text(), "Hi");
/// # Ok::<(), qnabot_pages::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_region(html: &str) -> Result<ContentRegion> {
    extract_region_with_selector(html, &ContentSelector::default())
}

/// Extracts the region matching `selector` from an HTML document.
///
/// # Example
///
/// ```rust
/// use qnabot_pages::{extract_region_with_selector, ContentSelector};
///
/// let html = r#"<article class="post">A</article><article class="post">B</article>"#;
/// let region = extract_region_with_selector(html, &ContentSelector::new("article", "post"))?;
/// assert_eq!(region.len(), 2);
/// # Ok::<(), qnabot_pages::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_region_with_selector(html: &str, selector: &ContentSelector) -> Result<ContentRegion> {
    DomQuery.query(html, selector)
}
