//! english-exam-gen: LLM-backed English test content generator.
//!
//! Assembles cloze passages, listening dialogues, essays and other question
//! sets for grades 7-9 by sampling a grade-weighted vocabulary list, filling
//! a per-question-type prompt template and delegating generation to an
//! OpenAI-compatible chat-completion API. Whole exam papers are built by
//! running those generation calls section by section.

pub mod config;
pub mod difficulty;
pub mod error;
pub mod exam;
pub mod generator;
pub mod metrics;
pub mod prompt;
pub mod server;
pub mod vocab;
