//! Lexical matching: tokenize, project onto term-count vectors, rank by cosine similarity.
//!
//! Everything here is pure. The vocabulary and vectors are rebuilt on every call
//! so knowledge base edits show up on the very next query.

pub mod tokenize;
pub mod vector;

use tracing::debug;

use crate::kb::types::KnowledgeEntry;

pub use tokenize::{tokenize, tokenize_with, WordChars};
use vector::{build_vocabulary, cosine_similarity, create_vector};

/// Best entry for a query. `entry` is `None` when nothing was scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult<'a> {
    pub entry: Option<&'a KnowledgeEntry>,
    pub score: f64,
}

impl MatchResult<'_> {
    pub fn none() -> Self {
        Self {
            entry: None,
            score: 0.0,
        }
    }
}

/// Similarity of one entry to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredEntry<'a> {
    /// Position in the input slice.
    pub index: usize,
    pub entry: &'a KnowledgeEntry,
    pub score: f64,
}

/// Score every entry whose question has at least one token, in input order.
///
/// Returns nothing when the query itself reduces to no tokens.
pub fn score_entries<'a>(query: &str, entries: &'a [KnowledgeEntry]) -> Vec<ScoredEntry<'a>> {
    score_entries_with(query, entries, WordChars::default())
}

pub fn score_entries_with<'a>(
    query: &str,
    entries: &'a [KnowledgeEntry],
    chars: WordChars,
) -> Vec<ScoredEntry<'a>> {
    let query_tokens = tokenize_with(query, chars);
    if query_tokens.is_empty() {
        return Vec::new();
    }

    let entry_tokens: Vec<Vec<String>> = entries
        .iter()
        .map(|e| tokenize_with(&e.question, chars))
        .collect();

    let vocabulary = build_vocabulary(
        std::iter::once(query_tokens.as_slice()).chain(entry_tokens.iter().map(Vec::as_slice)),
    );
    let query_vector = create_vector(&query_tokens, &vocabulary);

    let scored: Vec<ScoredEntry<'a>> = entries
        .iter()
        .zip(&entry_tokens)
        .enumerate()
        .filter(|(_, (_, tokens))| !tokens.is_empty())
        .map(|(index, (entry, tokens))| {
            let vector = create_vector(tokens, &vocabulary);
            ScoredEntry {
                index,
                entry,
                score: cosine_similarity(&query_vector, &vector),
            }
        })
        .collect();

    debug!(
        query_tokens = query_tokens.len(),
        vocabulary = vocabulary.len(),
        scored = scored.len(),
        skipped = entries.len() - scored.len(),
        "entries scored"
    );
    scored
}

/// Pick the highest scoring entry. Ties go to the earliest entry.
pub fn find_best_match<'a>(query: &str, entries: &'a [KnowledgeEntry]) -> MatchResult<'a> {
    find_best_match_with(query, entries, WordChars::default())
}

pub fn find_best_match_with<'a>(
    query: &str,
    entries: &'a [KnowledgeEntry],
    chars: WordChars,
) -> MatchResult<'a> {
    let mut best = MatchResult::none();
    let mut highest = f64::NEG_INFINITY;

    for scored in score_entries_with(query, entries, chars) {
        if scored.score > highest {
            highest = scored.score;
            best = MatchResult {
                entry: Some(scored.entry),
                score: scored.score,
            };
        }
    }

    best
}

/// The `n` best candidates, highest first. Equal scores keep input order.
pub fn top_candidates<'a>(
    query: &str,
    entries: &'a [KnowledgeEntry],
    chars: WordChars,
    n: usize,
) -> Vec<ScoredEntry<'a>> {
    let mut scored = score_entries_with(query, entries, chars);
    // Stable sort preserves input order among ties.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(n);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, question: &str) -> KnowledgeEntry {
        KnowledgeEntry {
            id: id.to_string(),
            question: question.to_string(),
            answer: format!("answer for {}", id),
            category: "General".to_string(),
            created_at: 0,
        }
    }

    fn support_entries() -> Vec<KnowledgeEntry> {
        vec![
            entry("pw", "How do I reset my password?"),
            entry("hours", "What are your business hours?"),
        ]
    }

    #[test]
    fn test_password_scenario() {
        let entries = support_entries();
        let result = find_best_match("I forgot my password", &entries);
        assert_eq!(result.entry.map(|e| e.id.as_str()), Some("pw"));
        assert!(result.score > 0.0);

        let scores = score_entries("I forgot my password", &entries);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[1].score, 0.0);
        assert!(scores[1].score < scores[0].score);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let entries = support_entries();
        assert_eq!(find_best_match("", &entries), MatchResult::none());
        assert_eq!(find_best_match("   ", &entries), MatchResult::none());
    }

    #[test]
    fn test_stop_word_query_short_circuits() {
        let entries = support_entries();
        assert!(score_entries("the a is", &entries).is_empty());
        assert_eq!(find_best_match("the a is", &entries), MatchResult::none());
    }

    #[test]
    fn test_empty_knowledge_base() {
        assert_eq!(find_best_match("reset password", &[]), MatchResult::none());
    }

    #[test]
    fn test_self_match_scores_one() {
        let entries = support_entries();
        let result = find_best_match("What are your business hours?", &entries);
        assert_eq!(result.entry.map(|e| e.id.as_str()), Some("hours"));
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_tie_goes_to_earlier_entry() {
        let entries = vec![
            entry("first", "Refund policy?"),
            entry("second", "policy, refund!"),
        ];
        let result = find_best_match("refund policy", &entries);
        assert_eq!(result.entry.map(|e| e.id.as_str()), Some("first"));
        assert_eq!(result.score, 1.0);

        let top = top_candidates("refund policy", &entries, WordChars::Ascii, 2);
        assert_eq!(top[0].entry.id, "first");
        assert_eq!(top[1].entry.id, "second");
    }

    #[test]
    fn test_stop_word_only_questions_are_skipped() {
        let entries = vec![entry("empty", "Is it?"), entry("ship", "Do you ship abroad?")];
        let scores = score_entries("ship", &entries);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].index, 1);

        let only_empty = vec![entry("empty", "What is it?")];
        assert_eq!(find_best_match("ship", &only_empty), MatchResult::none());
    }

    #[test]
    fn test_zero_similarity_still_reports_entry() {
        let entries = support_entries();
        let result = find_best_match("shipping abroad", &entries);
        assert_eq!(result.entry.map(|e| e.id.as_str()), Some("pw"));
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_scores_stay_in_unit_range() {
        let entries = vec![
            entry("a", "billing billing invoice"),
            entry("b", "invoice download pdf"),
            entry("c", "cancel subscription billing"),
        ];
        for query in ["billing", "invoice invoice pdf", "cancel my billing invoice", "xyz"] {
            for scored in score_entries(query, &entries) {
                assert!((0.0..=1.0).contains(&scored.score), "{} -> {}", query, scored.score);
            }
        }
    }

    #[test]
    fn test_word_chars_change_matching() {
        let entries = vec![entry("cafe", "Café opening times")];
        // ASCII stripping turns "café" into "caf" on both sides, so it still lines up.
        let ascii = find_best_match("café", &entries);
        assert!(ascii.score > 0.0);

        let unicode = find_best_match_with("café", &entries, WordChars::Unicode);
        assert!(unicode.score > 0.0);
        assert_eq!(find_best_match_with("cafe", &entries, WordChars::Unicode).score, 0.0);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let entries = support_entries();
        let first = find_best_match("reset password", &entries);
        let second = find_best_match("reset password", &entries);
        assert_eq!(first, second);
    }

    #[test]
    fn test_top_candidates_orders_by_score() {
        let entries = vec![
            entry("a", "cancel subscription"),
            entry("b", "update billing details"),
            entry("c", "billing"),
        ];
        let top = top_candidates("billing", &entries, WordChars::Ascii, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].entry.id, "c");
        assert_eq!(top[1].entry.id, "b");
    }
}
