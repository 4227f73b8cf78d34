//! FAQ Desk: a support assistant that answers from a small knowledge base by
//! lexical similarity and falls back to an LLM when nothing matches well enough.

pub mod chat;
pub mod commands;
pub mod kb;
pub mod llm;
pub mod nlp;
pub mod state;
