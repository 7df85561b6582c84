//! HTTP client collaborator.
//!
//! [`HttpClient`] is the seam between the fetcher and the network.
//! [`BlockingClient`] implements it with `reqwest::blocking`.

use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::Options;

/// Status and decoded body of a GET response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Performs synchronous GET requests.
pub trait HttpClient {
    /// Fetches `url`.
    ///
    /// A non-2xx status is a response, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when no response could be obtained.
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url)
    }
}

/// [`HttpClient`] backed by `reqwest::blocking`.
///
/// Follows reqwest's default redirect policy. No retries.
#[derive(Debug, Clone)]
pub struct BlockingClient {
    inner: reqwest::blocking::Client,
}

impl BlockingClient {
    /// Builds a client honoring `options.timeout` and `options.user_agent`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] if the TLS backend cannot be initialized.
    pub fn new(options: &Options) -> Result<Self> {
        // reqwest's blocking client defaults to a 30s timeout; None disables it.
        let mut builder = reqwest::blocking::Client::builder().timeout(options.timeout);
        if let Some(user_agent) = &options.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let inner = builder.build().map_err(Error::Client)?;
        Ok(Self { inner })
    }
}

impl HttpClient for BlockingClient {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let parsed = Url::parse(url).map_err(|source| Error::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let http_error = |source| Error::Http {
            url: url.to_string(),
            source,
        };

        tracing::debug!(%url, "GET");
        let response = self.inner.get(parsed).send().map_err(http_error)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().map_err(http_error)?;
        tracing::debug!(%url, status, bytes = bytes.len(), "response received");

        Ok(HttpResponse {
            status,
            body: encoding::decode_body(&bytes, content_type.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_options() {
        assert!(BlockingClient::new(&Options::default()).is_ok());
    }

    #[test]
    fn builds_with_timeout_and_user_agent() {
        let options = Options {
            timeout: Some(std::time::Duration::from_secs(5)),
            user_agent: Some("qnabot-pages/0.1".to_string()),
            ..Options::default()
        };
        assert!(BlockingClient::new(&options).is_ok());
    }

    #[test]
    fn malformed_url_fails_before_any_request() {
        let client = BlockingClient::new(&Options::default()).unwrap();
        match client.get("not a url") {
            Err(Error::InvalidUrl { url, .. }) => assert_eq!(url, "not a url"),
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn connection_refused_is_an_http_error() {
        let client = BlockingClient::new(&Options {
            timeout: Some(std::time::Duration::from_secs(5)),
            ..Options::default()
        })
        .unwrap();
        // Port 9 (discard) on loopback is closed in test environments.
        match client.get("http://127.0.0.1:9/") {
            Err(Error::Http { url, .. }) => assert_eq!(url, "http://127.0.0.1:9/"),
            other => panic!("expected Http error, got {other:?}"),
        }
    }
}
