//! Core types for gazette-dl

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque identifier of an edition, as issued by the portal
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditionId(pub String);

impl EditionId {
    /// Create a new EditionId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EditionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for EditionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One dated issue of the gazette
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    /// Portal identifier
    pub id: EditionId,
    /// Display number printed on the issue
    pub number: String,
    /// Date the edition was listed under
    pub date: NaiveDate,
}

/// A leaf of an edition's outline, located by its ancestor section labels
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationSummary {
    /// Trimmed display title
    pub title: String,
    /// Opaque token used to fetch the full body
    pub content_id: String,
    /// Ancestor labels, outermost section first, edition root excluded
    pub summary_stack: Vec<String>,
}

/// Resolved body of a publication
///
/// `Unavailable` and `Text(String::new())` are different outcomes: the first
/// means nothing could be retrieved, the second that the document had no text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Body {
    /// Plain text extracted from the document body
    Text(String),
    /// No content was retrievable
    Unavailable,
}

impl Body {
    /// Text of the body, if any was retrieved
    pub fn text(&self) -> Option<&str> {
        match self {
            Body::Text(text) => Some(text.as_str()),
            Body::Unavailable => None,
        }
    }

    /// Whether no content could be retrieved
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Body::Unavailable)
    }
}

impl From<Option<String>> for Body {
    fn from(value: Option<String>) -> Self {
        value.map_or(Body::Unavailable, Body::Text)
    }
}

impl From<Body> for Option<String> {
    fn from(body: Body) -> Self {
        match body {
            Body::Text(text) => Some(text),
            Body::Unavailable => None,
        }
    }
}

/// A publication summary paired with its resolved body
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Location and identity of the publication
    #[serde(flatten)]
    pub summary: PublicationSummary,
    /// Extracted text, or the absence marker
    pub body: Body,
}

/// An edition together with every publication found in its outline
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionPublications {
    /// The edition the publications belong to
    #[serde(flatten)]
    pub edition: Edition,
    /// Publications in outline order
    pub publications: Vec<PublicationRecord>,
}
