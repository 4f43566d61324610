//! Source metadata: one ingested document/session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chunk::SourceId;

/// Metadata for one ingested document/session. The chunks themselves only
/// carry the [`SourceId`]; subject, chapter, and creation date live here
/// and feed source labels and the retrieval date filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    pub subject: String,
    pub chapter: String,
    /// When this source was ingested (used as the date-filter axis).
    pub created_at: DateTime<Utc>,
}

impl Source {
    /// Human-readable `"Subject: Chapter"` label for citations.
    pub fn label(&self) -> String {
        let subject = if self.subject.is_empty() { "Class" } else { &self.subject };
        let chapter = if self.chapter.is_empty() { "Lesson" } else { &self.chapter };
        format!("{subject}: {chapter}")
    }
}
