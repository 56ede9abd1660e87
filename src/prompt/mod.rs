//! Prompt assembly for the question generator.
//!
//! - [`QuestionType`]: the question-type tags the API understands
//! - [`build_prompt`]: turns a [`PromptRequest`] into one instruction string
//!
//! Assembly is pure: no I/O, no validation beyond dispatching on the type.

mod templates;

use std::fmt;

use crate::difficulty::Tier;

pub const CLOZE_TAG: &str = "完形填空";
pub const SHORT_DIALOGUE_TAG: &str = "听力理解-短对话";
pub const LONG_DIALOGUE_TAG: &str = "听力理解-长对话";
pub const ESSAY_TAG: &str = "作文";
pub const READING_TAG: &str = "阅读理解";

/// Kind of content requested from the generator.
///
/// Tags outside the fixed set are kept verbatim and rendered with the generic
/// template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QuestionType {
    Cloze,
    ShortDialogue,
    LongDialogue,
    Essay,
    Other(String),
}

impl QuestionType {
    pub fn tag(&self) -> &str {
        match self {
            QuestionType::Cloze => CLOZE_TAG,
            QuestionType::ShortDialogue => SHORT_DIALOGUE_TAG,
            QuestionType::LongDialogue => LONG_DIALOGUE_TAG,
            QuestionType::Essay => ESSAY_TAG,
            QuestionType::Other(tag) => tag,
        }
    }
}

impl From<&str> for QuestionType {
    fn from(tag: &str) -> Self {
        match tag {
            CLOZE_TAG => QuestionType::Cloze,
            SHORT_DIALOGUE_TAG => QuestionType::ShortDialogue,
            LONG_DIALOGUE_TAG => QuestionType::LongDialogue,
            ESSAY_TAG => QuestionType::Essay,
            other => QuestionType::Other(other.to_string()),
        }
    }
}

impl From<String> for QuestionType {
    fn from(tag: String) -> Self {
        QuestionType::from(tag.as_str())
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Everything a prompt is built from.
#[derive(Debug, Clone)]
pub struct PromptRequest<'a> {
    pub grade: u8,
    pub question_type: &'a QuestionType,
    /// Passages / questions / tasks requested in one generator call.
    pub count: u32,
    pub vocabulary: &'a [String],
    pub vocab_difficulty: Tier,
    pub sentence_difficulty: Tier,
    pub inference_difficulty: Tier,
}

/// Render the generator instruction for a request.
pub fn build_prompt(req: &PromptRequest<'_>) -> String {
    match req.question_type {
        QuestionType::Cloze => templates::cloze(req),
        QuestionType::ShortDialogue => templates::short_dialogue(req),
        QuestionType::LongDialogue => templates::long_dialogue(req),
        QuestionType::Essay => templates::essay(req),
        QuestionType::Other(tag) => templates::generic(req, tag),
    }
}
