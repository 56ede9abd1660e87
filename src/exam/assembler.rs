//! Exam assembly: fills every template section with generated content.
//!
//! Sections are processed in template order and each section issues
//! `num_questions` generator calls, strictly one after another. The first
//! failed call aborts the whole paper.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::difficulty::{Grade, Tier};
use crate::exam::template::{ExamTemplate, SectionSpec};
use crate::generator::{GeneratorError, QuestionGenerator};
use crate::prompt::{self, build_prompt, PromptRequest, QuestionType};

/// Difficulty settings shared by every call of one exam.
#[derive(Debug, Clone, Copy)]
pub struct ExamSettings {
    pub grade: Grade,
    pub vocab_difficulty: Tier,
    pub sentence_difficulty: Tier,
    pub inference_difficulty: Tier,
}

/// A finished section of the paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSection {
    pub section_name: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ExamError {
    #[error("generation failed in section {section:?} (call {call}): {source}")]
    Generation {
        section: String,
        call: u32,
        #[source]
        source: GeneratorError,
    },
}

/// How one generator call for a section is phrased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallPlan {
    pub question_type: QuestionType,
    pub count: u32,
}

impl CallPlan {
    /// Map a section onto the prompt type and per-call count.
    ///
    /// Listening sections are matched by substring so decorated tags such as
    /// `"听力理解-短对话（一）"` still pick the dialogue templates.
    pub fn for_section(section: &SectionSpec) -> Self {
        let tag = section.question_type.as_str();
        if tag.contains(prompt::SHORT_DIALOGUE_TAG) {
            Self {
                question_type: QuestionType::ShortDialogue,
                count: 1,
            }
        } else if tag.contains(prompt::LONG_DIALOGUE_TAG) {
            Self {
                question_type: QuestionType::LongDialogue,
                count: section.questions_per_passage,
            }
        } else if tag.contains(prompt::READING_TAG) {
            Self {
                question_type: QuestionType::from(tag),
                count: section.questions_per_passage,
            }
        } else {
            Self {
                question_type: QuestionType::from(tag),
                count: 1,
            }
        }
    }
}

/// Builds exam papers through a [`QuestionGenerator`].
pub struct ExamAssembler {
    generator: Arc<dyn QuestionGenerator>,
}

impl ExamAssembler {
    pub fn new(generator: Arc<dyn QuestionGenerator>) -> Self {
        Self { generator }
    }

    /// Generate every section of `template` using one shared vocabulary list.
    pub async fn assemble(
        &self,
        template: &ExamTemplate,
        settings: &ExamSettings,
        vocabulary: &[String],
    ) -> Result<Vec<ExamSection>, ExamError> {
        info!(
            grade = settings.grade.get(),
            sections = template.sections.len(),
            calls = template.total_calls(),
            "Assembling exam"
        );

        let mut paper = Vec::with_capacity(template.sections.len());

        for section in &template.sections {
            info!(section = %section.name, "Generating section");

            let plan = CallPlan::for_section(section);
            let request = PromptRequest {
                grade: settings.grade.get(),
                question_type: &plan.question_type,
                count: plan.count,
                vocabulary,
                vocab_difficulty: settings.vocab_difficulty,
                sentence_difficulty: settings.sentence_difficulty,
                inference_difficulty: settings.inference_difficulty,
            };
            let prompt = build_prompt(&request);

            let mut questions = Vec::with_capacity(section.num_questions as usize);
            for call in 0..section.num_questions {
                debug!(section = %section.name, call, "Generator call");
                let text = self.generator.generate(&prompt).await.map_err(|source| {
                    ExamError::Generation {
                        section: section.name.clone(),
                        call,
                        source,
                    }
                })?;
                questions.push(text);
            }

            info!(
                section = %section.name,
                questions = questions.len(),
                "Section complete"
            );

            paper.push(ExamSection {
                section_name: section.name.clone(),
                questions,
            });
        }

        info!(sections = paper.len(), "Exam complete");
        Ok(paper)
    }
}
