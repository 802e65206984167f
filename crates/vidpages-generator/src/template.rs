//! Page template with fixed literal markers.
//!
//! The template is plain text. Rendering swaps five fixed marker strings for
//! per-record values using literal substring replacement; there is no
//! variable syntax, escaping, or partial-match protection.

use std::{fs, path::Path};

use vidpages_core::{RecordError, VideoRecord};

/// A literal string in the template that is replaced for every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `<title>` text, becomes `"{title} - Video Site"`.
    PageTitle,
    /// Player iframe source.
    EmbedUrl,
    /// Heading text.
    Title,
    /// Publication date.
    Date,
    /// Description paragraph.
    Description,
}

impl Marker {
    /// All markers in replacement order.
    pub const ALL: [Marker; 5] = [
        Marker::PageTitle,
        Marker::EmbedUrl,
        Marker::Title,
        Marker::Date,
        Marker::Description,
    ];

    /// The exact text searched for in the template.
    #[must_use]
    pub fn literal(self) -> &'static str {
        match self {
            Self::PageTitle => "Video Title - Video Site",
            Self::EmbedUrl => "VIDEO_EMBED_URL_HERE",
            Self::Title => "Video Title Here",
            Self::Date => "2026-01-23",
            Self::Description => "Video description goes here...",
        }
    }

    /// The text substituted for this marker for `record`.
    pub fn value_for(self, record: &VideoRecord) -> Result<String, RecordError> {
        Ok(match self {
            Self::PageTitle => format!("{} - Video Site", record.title()?),
            Self::EmbedUrl => record.embed().to_string(),
            Self::Title => record.title()?.to_string(),
            Self::Date => record.date().to_string(),
            Self::Description => record.description().to_string(),
        })
    }
}

/// The page template, loaded once and shared by every record.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    content: String,
}

impl PageTemplate {
    /// Create a template from its text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Read the whole template file.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        fs::read_to_string(path).map(Self::new)
    }

    /// Markers that never occur in the template.
    #[must_use]
    pub fn missing_markers(&self) -> Vec<Marker> {
        Marker::ALL
            .into_iter()
            .filter(|m| !self.content.contains(m.literal()))
            .collect()
    }

    /// Render the page for `record`.
    ///
    /// Markers are replaced in [`Marker::ALL`] order on one working copy, so
    /// a value containing a later marker's text is itself replaced.
    pub fn render(&self, record: &VideoRecord) -> Result<String, RecordError> {
        let mut page = self.content.clone();
        for marker in Marker::ALL {
            let value = marker.value_for(record)?;
            page = page.replace(marker.literal(), &value);
        }
        Ok(page)
    }
}
