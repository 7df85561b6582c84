//! Topic configuration.
//!
//! The config file is a JSON object whose keys are topic names and whose
//! values are ordered arrays of page URLs:
//!
//! ```json
//! { "dynatrace": ["https://example.com/page1", "https://example.com/page2"] }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Topic fetched when no topic is given.
pub const DEFAULT_TOPIC: &str = "dynatrace";

/// Immutable mapping of topic name to ordered page URLs.
///
/// Loaded once and passed by reference to the fetcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Config {
    topics: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Reads and parses the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] if the file cannot be read and
    /// [`Error::ConfigParse`] if it is not a topic -> URL array object.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), topics = config.topics.len(), "loaded config");
        Ok(config)
    }

    /// Parses a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] on malformed JSON or a wrong shape.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns the pages listed for `topic`, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTopic`] if the topic has no entry. An entry
    /// with an empty array is not an error.
    pub fn pages(&self, topic: &str) -> Result<&[String]> {
        self.topics
            .get(topic)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::MissingTopic(topic.to_string()))
    }

    /// Topic names in sorted order.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    /// Adds or replaces a topic. Used to build configs in code.
    #[must_use]
    pub fn with_topic<I, S>(mut self, topic: impl Into<String>, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics
            .insert(topic.into(), pages.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_keep_file_order() {
        let config = Config::from_json(
            r#"{"dynatrace": ["https://a.test/3", "https://a.test/1", "https://a.test/2"]}"#,
        )
        .unwrap();

        assert_eq!(
            config.pages("dynatrace").unwrap(),
            ["https://a.test/3", "https://a.test/1", "https://a.test/2"]
        );
    }

    #[test]
    fn missing_topic_is_an_error() {
        let config = Config::from_json(r#"{"dynatrace": []}"#).unwrap();

        match config.pages("kubernetes") {
            Err(Error::MissingTopic(topic)) => assert_eq!(topic, "kubernetes"),
            other => panic!("expected MissingTopic, got {other:?}"),
        }
    }

    #[test]
    fn empty_topic_is_not_missing() {
        let config = Config::from_json(r#"{"dynatrace": []}"#).unwrap();
        assert!(config.pages("dynatrace").unwrap().is_empty());
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        assert!(matches!(
            Config::from_json(r#"{"dynatrace": "https://a.test/x"}"#),
            Err(Error::ConfigParse(_))
        ));
        assert!(matches!(
            Config::from_json(r#"["https://a.test/x"]"#),
            Err(Error::ConfigParse(_))
        ));
        assert!(matches!(Config::from_json("{"), Err(Error::ConfigParse(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("qnabot-pages-no-such-config.json");
        match Config::load(&path) {
            Err(Error::ConfigRead { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected ConfigRead, got {other:?}"),
        }
    }

    #[test]
    fn topics_are_sorted() {
        let config = Config::default()
            .with_topic("zeta", ["https://z.test"])
            .with_topic("alpha", Vec::<String>::new());
        assert_eq!(config.topics().collect::<Vec<_>>(), ["alpha", "zeta"]);
    }
}
