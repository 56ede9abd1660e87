//! Runtime configuration for english-exam-gen.
//!
//! Configuration is loaded from a JSON file or constructed programmatically.
//! The LLM API key is never part of the file; it is read from `OPENAI_API_KEY`.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

/// Environment variable holding the bearer token for the completion API.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "english-exam-gen", about = "LLM-backed English exam generator")]
pub struct Cli {
    /// Path to configuration file (JSON).
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// HTTP listen address.
    #[arg(long, default_value = "0.0.0.0:5000")]
    pub listen: String,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Completion endpoint settings.
    pub llm: LlmConfig,

    /// Static data file locations.
    pub data: DataConfig,

    /// Vocabulary sampler tuning.
    pub vocabulary: VocabularyConfig,
}

/// Settings for the external chat-completion API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Full URL of the chat-completions endpoint.
    pub api_url: String,

    /// Model name sent with every request.
    pub model: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// HTTP client timeout in seconds.
    pub timeout_secs: u64,

    /// System message prepended to every prompt.
    pub system_prompt: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o".to_string(),
            temperature: 0.7,
            timeout_secs: 120,
            system_prompt: "You are an AI English test generator.".to_string(),
        }
    }
}

/// Locations of the JSON files read per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Vocabulary list: `[{"Word": ..., "Grade": ...}]`.
    pub vocabulary_path: PathBuf,

    /// Exam section template.
    pub exam_template_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            vocabulary_path: PathBuf::from("data/vocabulary.json"),
            exam_template_path: PathBuf::from("data/exam_templates.json"),
        }
    }
}

/// Vocabulary selection knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Number of words in a selected list.
    pub total_words: usize,

    /// Each grade bucket is randomly cut down to this many words before selection.
    pub per_grade_cap: usize,

    /// Fixed RNG seed. When set, every selection is reproducible.
    pub seed: Option<u64>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            total_words: 100,
            per_grade_cap: 100,
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults for missing fields.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if path.exists() {
            let data = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&data)?;
            Ok(config)
        } else {
            tracing::warn!("Config file not found at {:?}, using defaults", path);
            Ok(Config::default())
        }
    }

    /// Read the completion API key from the environment.
    pub fn api_key_from_env() -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Load `KEY=value` pairs from an env file into the process environment.
///
/// Returns `Ok(false)` when the file does not exist. Variables already set are
/// not overridden.
pub fn load_env_file(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}
