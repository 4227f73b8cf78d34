pub mod seed;
pub mod types;

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{anyhow, bail, Result};
use tokio::sync::RwLock;
use tracing::debug;

use types::{EntryId, KnowledgeEntry};

const ID_LEN: usize = 12;

/// In-memory, ordered knowledge base for the current session.
///
/// Insertion order is preserved; the ranker breaks ties by it.
pub struct KnowledgeStore {
    entries: RwLock<Vec<KnowledgeEntry>>,
    /// Mixed into ids so identical content added twice still gets distinct ids.
    seq: AtomicU64,
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            seq: AtomicU64::new(0),
        }
    }

    /// Store pre-loaded with the built-in entries.
    pub fn seeded() -> Self {
        let store = Self::new();
        let entries = seed::SEED_ENTRIES
            .iter()
            .map(|(q, a, c)| store.make_entry(q, a, c))
            .collect();
        Self {
            entries: RwLock::new(entries),
            seq: store.seq,
        }
    }

    fn make_entry(&self, question: &str, answer: &str, category: &str) -> KnowledgeEntry {
        let created_at = chrono::Utc::now().timestamp();
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);

        let mut hasher = blake3::Hasher::new();
        for part in [question, answer, category] {
            hasher.update(part.as_bytes());
            hasher.update(&[0]);
        }
        hasher.update(&created_at.to_le_bytes());
        hasher.update(&seq.to_le_bytes());
        let id: EntryId = hasher.finalize().to_hex()[..ID_LEN].to_string();

        KnowledgeEntry {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            category: category.to_string(),
            created_at,
        }
    }

    /// Append a new entry. All fields are trimmed and must be non-empty.
    pub async fn add(
        &self,
        question: &str,
        answer: &str,
        category: &str,
    ) -> Result<KnowledgeEntry> {
        let (question, answer, category) = (question.trim(), answer.trim(), category.trim());
        for (field, value) in [("question", question), ("answer", answer), ("category", category)] {
            if value.is_empty() {
                bail!("{} must not be empty", field);
            }
        }

        let entry = self.make_entry(question, answer, category);
        self.entries.write().await.push(entry.clone());
        debug!(entry_id = %entry.id, category, "knowledge entry added");
        Ok(entry)
    }

    /// Remove an entry by id and return it.
    pub async fn delete(&self, id: &str) -> Result<KnowledgeEntry> {
        let mut entries = self.entries.write().await;
        let pos = entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| anyhow!("entry not found: {}", id))?;
        let removed = entries.remove(pos);
        debug!(entry_id = %removed.id, "knowledge entry deleted");
        Ok(removed)
    }

    pub async fn get(&self, id: &str) -> Option<KnowledgeEntry> {
        self.entries.read().await.iter().find(|e| e.id == id).cloned()
    }

    /// Case-insensitive substring search over question, answer and category.
    /// A blank term matches everything.
    pub async fn search(&self, term: &str) -> Vec<KnowledgeEntry> {
        let needle = term.trim().to_lowercase();
        self.entries
            .read()
            .await
            .iter()
            .filter(|e| {
                needle.is_empty()
                    || e.question.to_lowercase().contains(&needle)
                    || e.answer.to_lowercase().contains(&needle)
                    || e.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// First `limit` entries in store order.
    pub async fn list(&self, limit: usize) -> Vec<KnowledgeEntry> {
        self.entries.read().await.iter().take(limit).cloned().collect()
    }

    /// Distinct categories, sorted.
    pub async fn categories(&self) -> Vec<String> {
        let entries = self.entries.read().await;
        let set: BTreeSet<&str> = entries.iter().map(|e| e.category.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Copy of the current entries for one match operation.
    pub async fn snapshot(&self) -> Vec<KnowledgeEntry> {
        self.entries.read().await.clone()
    }
}
