//! Video records read from the data file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback text used when a record has no description.
pub const NO_DESCRIPTION: &str = "No description available";

/// Label used in messages when a record has no usable `url`.
pub const UNKNOWN_RECORD: &str = "unknown";

/// Errors raised while reading the fields of a single record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required field is absent, `null` or empty.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// The `url` has nothing after its final `/`.
    #[error("url `{0}` has no file name after its last '/'")]
    EmptyFilename(String),
}

/// One entry of the video data file.
///
/// Every field is optional at this layer so that a record lacking a
/// required field still loads and can be reported on its own. Empty strings
/// are treated exactly like absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Source URL; its last path segment names the output file.
    #[serde(default)]
    pub url: Option<String>,

    /// Video title.
    #[serde(default)]
    pub title: Option<String>,

    /// Embed URL for the player iframe.
    #[serde(default)]
    pub embed: Option<String>,

    /// Publication date, kept verbatim.
    #[serde(default)]
    pub date: Option<String>,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl VideoRecord {
    /// Create a record with the two required fields set.
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Set the embed URL.
    #[must_use]
    pub fn with_embed(mut self, embed: impl Into<String>) -> Self {
        self.embed = Some(embed.into());
        self
    }

    /// Set the date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Output file name: everything after the last `/` of `url`.
    pub fn filename(&self) -> Result<&str, RecordError> {
        let url = non_empty(&self.url).ok_or(RecordError::MissingField("url"))?;
        let name = url.rsplit('/').next().unwrap_or(url);
        if name.is_empty() {
            return Err(RecordError::EmptyFilename(url.to_string()));
        }
        Ok(name)
    }

    /// Required title.
    pub fn title(&self) -> Result<&str, RecordError> {
        non_empty(&self.title).ok_or(RecordError::MissingField("title"))
    }

    /// Embed URL, or an empty string.
    #[must_use]
    pub fn embed(&self) -> &str {
        non_empty(&self.embed).unwrap_or_default()
    }

    /// Date, or an empty string.
    #[must_use]
    pub fn date(&self) -> &str {
        non_empty(&self.date).unwrap_or_default()
    }

    /// Description, or [`NO_DESCRIPTION`].
    #[must_use]
    pub fn description(&self) -> &str {
        non_empty(&self.description).unwrap_or(NO_DESCRIPTION)
    }

    /// Identifier for log lines: the `url`, or [`UNKNOWN_RECORD`].
    #[must_use]
    pub fn label(&self) -> &str {
        non_empty(&self.url).unwrap_or(UNKNOWN_RECORD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_url() {
        let record = VideoRecord::new("https://example.com/videos/intro.html", "Intro");
        assert_eq!(record.filename(), Ok("intro.html"));
    }

    #[test]
    fn test_filename_without_slash() {
        let record = VideoRecord::new("intro.html", "Intro");
        assert_eq!(record.filename(), Ok("intro.html"));
    }

    #[test]
    fn test_filename_trailing_slash() {
        let record = VideoRecord::new("https://example.com/videos/", "Intro");
        assert_eq!(
            record.filename(),
            Err(RecordError::EmptyFilename(
                "https://example.com/videos/".to_string()
            ))
        );
    }

    #[test]
    fn test_filename_missing_url() {
        let record = VideoRecord {
            title: Some("Intro".to_string()),
            ..VideoRecord::default()
        };
        assert_eq!(record.filename(), Err(RecordError::MissingField("url")));
        assert_eq!(record.label(), UNKNOWN_RECORD);
    }

    #[test]
    fn test_empty_title_is_missing() {
        let record = VideoRecord::new("https://x/v1.html", "");
        assert_eq!(record.title(), Err(RecordError::MissingField("title")));
    }

    #[test]
    fn test_optional_fallbacks() {
        let record = VideoRecord::new("https://x/v1.html", "Intro");
        assert_eq!(record.embed(), "");
        assert_eq!(record.date(), "");
        assert_eq!(record.description(), NO_DESCRIPTION);

        let empty = record
            .clone()
            .with_embed("")
            .with_date("")
            .with_description("");
        assert_eq!(empty.embed(), "");
        assert_eq!(empty.date(), "");
        assert_eq!(empty.description(), NO_DESCRIPTION);
    }

    #[test]
    fn test_deserialize_partial_record() {
        let record: VideoRecord = serde_json::from_str(
            r#"{"url":"https://x/v2.html","date":null,"description":"Second","extra":1}"#,
        )
        .expect("deserialize");

        assert_eq!(record.filename(), Ok("v2.html"));
        assert!(record.title().is_err());
        assert_eq!(record.date(), "");
        assert_eq!(record.description(), "Second");
    }
}
