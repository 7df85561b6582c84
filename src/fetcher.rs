//! Page content fetcher.
//!
//! Walks the pages of one topic in config order: GET, parse, select the
//! content region, report pages where it is missing. Strictly sequential;
//! the first transport error ends the walk.

use std::io::Write;
use std::iter::FusedIterator;
use std::slice;

use chrono::Utc;

use crate::config::Config;
use crate::dom::{DomQuery, HtmlQuery};
use crate::error::Result;
use crate::http::HttpClient;
use crate::options::{EmptinessCheck, Options};
use crate::result::{PageReport, PageResult, RunSummary};

/// Fetches topic pages and extracts their content regions.
///
/// Generic over its collaborators so tests can run without a network.
#[derive(Debug, Clone)]
pub struct PageFetcher<C, Q = DomQuery> {
    client: C,
    query: Q,
    options: Options,
}

impl<C: HttpClient> PageFetcher<C, DomQuery> {
    /// Creates a fetcher that queries HTML with `dom_query`.
    pub fn new(client: C, options: Options) -> Self {
        Self::with_query(client, DomQuery, options)
    }
}

impl<C: HttpClient, Q: HtmlQuery> PageFetcher<C, Q> {
    pub fn with_query(client: C, query: Q, options: Options) -> Self {
        Self {
            client,
            query,
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns a lazy sequence over the pages of `topic`.
    ///
    /// Nothing is requested until the sequence is advanced. Each item is the
    /// report for one page, in config order. A failed request is yielded as
    /// `Err` and ends the sequence. Calling this again fetches every page
    /// again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTopic`](crate::Error::MissingTopic) if the
    /// topic is not configured and [`Error::Selector`](crate::Error::Selector)
    /// if the content selector is invalid. No request is made in either case.
    pub fn fetch_topic_content<'a>(
        &'a self,
        topic: &str,
        config: &'a Config,
    ) -> Result<TopicPages<'a, C, Q>> {
        let pages = config.pages(topic)?;
        self.options.selector.to_css()?;
        tracing::debug!(topic, pages = pages.len(), "fetching topic");

        Ok(TopicPages {
            fetcher: self,
            pages: pages.iter(),
            finished: false,
        })
    }

    /// Fetches every page of `topic`, writing one diagnostic line to `out`
    /// for each page whose content region is missing.
    ///
    /// # Errors
    ///
    /// Returns the first configuration, request, or write error. Pages after
    /// a failed request are not fetched.
    pub fn run_topic<W: Write>(&self, topic: &str, config: &Config, out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for report in self.fetch_topic_content(topic, config)? {
            let report = report?;
            if let Some(line) = report.diagnostic() {
                writeln!(out, "{line}")?;
            }
            summary.record(&report);
        }

        tracing::info!(
            topic,
            pages = summary.pages,
            extracted = summary.extracted,
            missing = summary.missing,
            "topic finished"
        );
        Ok(summary)
    }

    fn fetch_page(&self, url: &str) -> Result<PageReport> {
        let response = self.client.get(url)?;
        if !(200..300).contains(&response.status) {
            tracing::debug!(%url, status = response.status, "non-success status, parsing body anyway");
        }

        let region = self.query.query(&response.body, &self.options.selector)?;
        let result = match self.options.emptiness_check {
            EmptinessCheck::Intended if region.is_empty() => {
                tracing::warn!(%url, selector = %self.options.selector, "content region not found");
                PageResult::Missing
            }
            _ => PageResult::Extracted(region),
        };

        Ok(PageReport {
            url: url.to_string(),
            status: response.status,
            fetched_at: Utc::now(),
            result,
        })
    }
}

/// Lazy sequence of page reports for one topic.
///
/// Returned by [`PageFetcher::fetch_topic_content`].
#[derive(Debug)]
pub struct TopicPages<'a, C, Q> {
    fetcher: &'a PageFetcher<C, Q>,
    pages: slice::Iter<'a, String>,
    finished: bool,
}

impl<C: HttpClient, Q: HtmlQuery> Iterator for TopicPages<'_, C, Q> {
    type Item = Result<PageReport>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let Some(url) = self.pages.next() else {
            self.finished = true;
            return None;
        };

        let report = self.fetcher.fetch_page(url);
        if report.is_err() {
            self.finished = true;
        }
        Some(report)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, Some(self.pages.len()))
        }
    }
}

impl<C: HttpClient, Q: HtmlQuery> FusedIterator for TopicPages<'_, C, Q> {}
