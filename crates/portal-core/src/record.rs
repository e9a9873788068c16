//! The portal's only entity: a displayable content record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::parse_display_date;
use crate::error::Result;
use crate::section::Category;

/// Record identifier, unique within its collection only.
pub type RecordId = u32;

/// Separator between paragraphs of long-form news content.
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// A single announcement, news story or document reference.
///
/// Records are defined once when the content store is built and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    /// Display date, e.g. `"15 Mar 2024"`
    pub date: String,
    pub description: String,
    /// Image URL (display-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Long-form body, news only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// External link, documents only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Record {
    pub fn new(
        id: RecordId,
        title: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            date: date.into(),
            description: description.into(),
            image: None,
            content: None,
            url: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Parse the display date as a calendar date.
    pub fn parsed_date(&self) -> Result<NaiveDate> {
        parse_display_date(&self.date)
    }

    /// Content split into paragraphs on blank-line boundaries.
    ///
    /// Records without content have no paragraphs.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .as_deref()
            .map(|content| content.split(PARAGRAPH_SEPARATOR).collect())
            .unwrap_or_default()
    }
}

/// Reference to a record across collections.
///
/// Ids repeat between collections, so a bare id is ambiguous outside of a
/// single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RecordRef {
    pub category: Category,
    pub id: RecordId,
}

impl RecordRef {
    pub fn new(category: Category, id: RecordId) -> Self {
        Self { category, id }
    }
}
