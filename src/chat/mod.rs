pub mod prompts;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::kb::types::KnowledgeEntry;
use crate::llm::FallbackGenerator;
use crate::nlp::{self, WordChars};

pub const EMPTY_QUERY_REPLY: &str = "Please type a question and I'll look it up.";

/// Match-decision parameters (admins can modify at runtime).
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    /// A local answer is used only when the score is strictly above this.
    pub threshold: f64,
    /// Pause before replying, applied by the chat command.
    pub response_delay_ms: u64,
    /// Pass matched answers through the generator for rephrasing.
    pub enhance_answers: bool,
    /// Which characters count as word characters when tokenizing.
    pub word_chars: WordChars,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            response_delay_ms: 600,
            enhance_answers: false,
            word_chars: WordChars::default(),
        }
    }
}

impl MatchConfig {
    pub const PARAMS: &'static [&'static str] = &[
        "threshold",
        "response_delay_ms",
        "enhance_answers",
        "word_chars",
    ];

    /// Update one parameter from its text form.
    pub fn set(&mut self, param: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match param {
            "threshold" => {
                let threshold: f64 = value.parse().context("threshold must be a number")?;
                if !(0.0..=1.0).contains(&threshold) {
                    bail!("threshold must be between 0 and 1");
                }
                self.threshold = threshold;
            }
            "response_delay_ms" => {
                let delay: u64 = value
                    .parse()
                    .context("response_delay_ms must be a whole number")?;
                if delay > 10_000 {
                    bail!("response_delay_ms must be at most 10000");
                }
                self.response_delay_ms = delay;
            }
            "enhance_answers" => {
                self.enhance_answers = match value.to_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    _ => bail!("enhance_answers must be true or false"),
                };
            }
            "word_chars" => {
                self.word_chars = match value.to_lowercase().as_str() {
                    "ascii" => WordChars::Ascii,
                    "unicode" => WordChars::Unicode,
                    _ => bail!("word_chars must be ascii or unicode"),
                };
            }
            _ => bail!(
                "unknown param `{}`. Valid: {}",
                param,
                Self::PARAMS.join(", ")
            ),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub content: String,
    /// Best similarity found, kept on fallbacks to show why we fell back.
    pub match_score: f64,
    pub is_fallback: bool,
    pub matched: Option<KnowledgeEntry>,
}

pub struct Responder {
    generator: Arc<dyn FallbackGenerator>,
}

impl Responder {
    pub fn new(generator: Arc<dyn FallbackGenerator>) -> Self {
        Self { generator }
    }

    /// Answer from `entries` when confident, otherwise ask the fallback generator.
    pub async fn respond(
        &self,
        query: &str,
        entries: &[KnowledgeEntry],
        config: &MatchConfig,
    ) -> Reply {
        if query.trim().is_empty() {
            return Reply {
                content: EMPTY_QUERY_REPLY.to_string(),
                match_score: 0.0,
                is_fallback: false,
                matched: None,
            };
        }

        let best = nlp::find_best_match_with(query, entries, config.word_chars);
        debug!(
            score = best.score,
            entry_id = best.entry.map(|e| e.id.as_str()),
            threshold = config.threshold,
            "best match"
        );

        match best.entry {
            Some(entry) if best.score > config.threshold => {
                let content = if config.enhance_answers {
                    self.generator.enhance(&entry.answer, query).await
                } else {
                    entry.answer.clone()
                };
                info!(entry_id = %entry.id, score = best.score, "answered from knowledge base");
                Reply {
                    content,
                    match_score: best.score,
                    is_fallback: false,
                    matched: Some(entry.clone()),
                }
            }
            _ => {
                info!(score = best.score, "no confident match, using fallback");
                Reply {
                    content: self.generator.generate(query).await,
                    match_score: best.score,
                    is_fallback: true,
                    matched: None,
                }
            }
        }
    }
}
