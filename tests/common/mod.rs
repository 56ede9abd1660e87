//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use english_exam_gen::config::Config;
use english_exam_gen::generator::{GeneratorError, QuestionGenerator};
use english_exam_gen::metrics::Metrics;
use english_exam_gen::server::api::AppState;
use english_exam_gen::vocab::VocabEntry;
use tempfile::TempDir;

/// Generator that returns canned text and records every prompt it sees.
#[derive(Default)]
pub struct ScriptedGenerator {
    /// Zero-based call index that fails, if any.
    pub fail_at: Option<usize>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(call: usize) -> Self {
        Self {
            fail_at: Some(call),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail_at == Some(call) {
            return Err(GeneratorError::Status {
                status: 503,
                body: "upstream unavailable".to_string(),
            });
        }
        Ok(format!("generated #{call}"))
    }
}

/// `n` synthetic words per grade, named `g{grade}w{i}`.
pub fn corpus(per_grade: &[(u32, usize)]) -> Vec<VocabEntry> {
    per_grade
        .iter()
        .flat_map(|&(grade, n)| {
            (0..n).map(move |i| VocabEntry::new(format!("g{grade}w{i}"), grade))
        })
        .collect()
}

pub fn grade_of(word: &str) -> u32 {
    word[1..word.find('w').unwrap()].parse().unwrap()
}

pub const EXAM_TEMPLATE: &str = r#"{
  "exam_template": {
    "sections": [
      { "name": "Listening - short dialogues", "question_type": "听力理解-短对话", "num_questions": 3 },
      { "name": "Listening - long dialogues", "question_type": "听力理解-长对话", "num_questions": 2, "questions_per_passage": 4 },
      { "name": "Cloze", "question_type": "完形填空", "num_questions": 1 },
      { "name": "Writing", "question_type": "作文", "num_questions": 1 },
      { "name": "Reading", "question_type": "阅读理解", "num_questions": 1, "questions_per_passage": 4 }
    ]
  }
}"#;

/// Temp directory holding a vocabulary file and an exam template.
pub struct DataDir {
    pub dir: TempDir,
}

impl DataDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let entries = corpus(&[(6, 120), (7, 150), (8, 150), (9, 150)]);
        std::fs::write(
            dir.path().join("vocabulary.json"),
            serde_json::to_string(&entries).unwrap(),
        )
        .unwrap();
        std::fs::write(dir.path().join("exam_templates.json"), EXAM_TEMPLATE).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.data.vocabulary_path = self.path().join("vocabulary.json");
        config.data.exam_template_path = self.path().join("exam_templates.json");
        config
    }
}

pub fn state(config: Config, generator: Arc<ScriptedGenerator>) -> Arc<AppState> {
    Arc::new(AppState::new(
        Arc::new(config),
        generator,
        Metrics::new().unwrap(),
    ))
}
