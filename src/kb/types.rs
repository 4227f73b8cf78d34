use serde::{Deserialize, Serialize};

/// Short blake3-derived entry id (12 hex chars).
pub type EntryId = String;

/// One question/answer pair in the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: EntryId,
    /// Canonical phrasing the ranker matches against.
    pub question: String,
    /// Returned verbatim on a match.
    pub answer: String,
    /// Organizational label, not used for matching.
    pub category: String,
    #[serde(default)]
    pub created_at: i64,
}
