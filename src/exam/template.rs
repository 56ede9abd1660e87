//! Exam template: the ordered list of sections a paper is built from.
//!
//! File format:
//!
//! ```json
//! { "exam_template": { "sections": [
//!     { "name": "Part I", "question_type": "听力理解-短对话", "num_questions": 5 }
//! ] } }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Passages per reading/long-dialogue call when the section does not say.
pub const DEFAULT_QUESTIONS_PER_PASSAGE: u32 = 3;

fn default_questions_per_passage() -> u32 {
    DEFAULT_QUESTIONS_PER_PASSAGE
}

/// One section of an exam paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub name: String,

    /// Question-type tag; may carry extra text around the known tag.
    pub question_type: String,

    /// Number of generator calls for the section.
    pub num_questions: u32,

    #[serde(default = "default_questions_per_passage")]
    pub questions_per_passage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamTemplate {
    pub sections: Vec<SectionSpec>,
}

impl ExamTemplate {
    /// Generator calls needed to fill every section.
    pub fn total_calls(&self) -> u32 {
        self.sections.iter().map(|s| s.num_questions).sum()
    }
}

#[derive(Debug, Deserialize)]
struct TemplateFile {
    exam_template: ExamTemplate,
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read exam template {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse exam template {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read the exam template from disk.
pub async fn load_exam_template(path: &Path) -> Result<ExamTemplate, TemplateError> {
    let data = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let file: TemplateFile =
        serde_json::from_str(&data).map_err(|source| TemplateError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        path = %path.display(),
        sections = file.exam_template.sections.len(),
        "Exam template loaded"
    );
    Ok(file.exam_template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_template_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"exam_template": {{"sections": [
                {{"name": "Listening A", "question_type": "听力理解-短对话", "num_questions": 5}},
                {{"name": "Reading", "question_type": "阅读理解", "num_questions": 2, "questions_per_passage": 4}}
            ]}}}}"#
        )
        .unwrap();

        let template = load_exam_template(file.path()).await.unwrap();
        assert_eq!(template.sections.len(), 2);
        assert_eq!(template.sections[0].questions_per_passage, 3);
        assert_eq!(template.sections[1].questions_per_passage, 4);
        assert_eq!(template.total_calls(), 7);
    }

    #[tokio::test]
    async fn test_wrong_shape_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"sections": []}}"#).unwrap();

        let err = load_exam_template(file.path()).await.unwrap_err();
        assert!(matches!(err, TemplateError::Parse { .. }));
    }
}
