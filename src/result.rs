//! Result types for fetch-and-extract output.
//!
//! This module defines the content region extracted from a page and the
//! per-page report yielded while walking a topic.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One element of a content region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentNode {
    /// Outer HTML of the element.
    pub html: String,

    /// Text content of the element and its descendants.
    pub text: String,
}

/// Elements matching the content selector, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentRegion {
    pub nodes: Vec<ContentNode>,
}

impl ContentRegion {
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Trimmed text of every node, one node per paragraph.
    #[must_use]
    pub fn text(&self) -> String {
        self.nodes
            .iter()
            .map(|node| node.text.trim())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Outcome of extracting one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResult {
    /// The region was extracted. Empty only under
    /// [`EmptinessCheck::Literal`](crate::EmptinessCheck::Literal).
    Extracted(ContentRegion),

    /// No element matched; the page was skipped.
    Missing,
}

/// Report for one fetched page.
#[derive(Debug, Clone)]
pub struct PageReport {
    /// URL as listed in the config.
    pub url: String,

    /// HTTP status of the response.
    pub status: u16,

    /// When the response was received.
    pub fetched_at: DateTime<Utc>,

    pub result: PageResult,
}

impl PageReport {
    /// The extracted region, if the page was not skipped.
    #[must_use]
    pub fn region(&self) -> Option<&ContentRegion> {
        match &self.result {
            PageResult::Extracted(region) => Some(region),
            PageResult::Missing => None,
        }
    }

    /// Diagnostic line for a skipped page.
    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        matches!(self.result, PageResult::Missing).then(|| failure_diagnostic(&self.url))
    }
}

/// Line printed for a page whose content region was not found.
#[must_use]
pub fn failure_diagnostic(page: &str) -> String {
    format!("Fetching Content failed for {page}")
}

/// Totals for one topic run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Pages requested.
    pub pages: usize,

    /// Pages whose region was extracted.
    pub extracted: usize,

    /// Pages reported as missing content.
    pub missing: usize,
}

impl RunSummary {
    pub(crate) fn record(&mut self, report: &PageReport) {
        self.pages += 1;
        match report.result {
            PageResult::Extracted(_) => self.extracted += 1,
            PageResult::Missing => self.missing += 1,
        }
    }
}
