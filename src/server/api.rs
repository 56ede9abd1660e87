//! Exam generation HTTP API.
//!
//! - GET  /get-vocabulary
//! - POST /generate-questions
//! - POST /generate-exam
//! - GET  /health
//! - GET  /metrics

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::difficulty::{Grade, Tier};
use crate::error::{
    ApiError, EXAM_FAILED, INVALID_DIFFICULTY, INVALID_GRADE, QUESTIONS_FAILED, TEMPLATE_FAILED,
    VOCABULARY_FAILED,
};
use crate::exam::{load_exam_template, ExamAssembler, ExamSection, ExamSettings};
use crate::generator::{MeteredGenerator, QuestionGenerator};
use crate::metrics::Metrics;
use crate::prompt::{build_prompt, PromptRequest, QuestionType};
use crate::vocab::{load_vocabulary, VocabSelector};

/// Application state shared across handlers.
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<dyn QuestionGenerator>,
    pub selector: VocabSelector,
    pub metrics: Metrics,
    pub start_time: Instant,
}

impl AppState {
    /// Wrap `generator` with call metrics and derive the selector from config.
    pub fn new(
        config: Arc<Config>,
        generator: Arc<dyn QuestionGenerator>,
        metrics: Metrics,
    ) -> Self {
        let generator: Arc<dyn QuestionGenerator> =
            Arc::new(MeteredGenerator::new(generator, metrics.clone()));
        Self {
            selector: VocabSelector::new(&config.vocabulary),
            config,
            generator,
            metrics,
            start_time: Instant::now(),
        }
    }

    /// RNG for one request: seeded from config when set, otherwise from the OS.
    fn rng(&self) -> StdRng {
        match self.config.vocabulary.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Load the corpus and select a word list, mapping failures to a 500.
    async fn select_vocabulary(
        &self,
        request_id: &str,
        grade: u32,
        tier: Tier,
    ) -> Result<Vec<String>, ApiError> {
        let entries = load_vocabulary(&self.config.data.vocabulary_path)
            .await
            .map_err(|e| {
                error!(request_id, error = %e, "Error loading vocabulary");
                ApiError::Internal(VOCABULARY_FAILED)
            })?;
        Ok(self
            .selector
            .select(&entries, grade, tier, &mut self.rng()))
    }
}

/// Build the axum router with all API routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/get-vocabulary", get(get_vocabulary))
        .route("/generate-questions", post(generate_questions))
        .route("/generate-exam", post(generate_exam))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─── Request/Response Types ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyQuery {
    pub grade: Option<String>,
    pub vocab_difficulty: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyResponse {
    pub grade: u32,
    pub vocab_difficulty: Tier,
    pub vocabulary_list: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    pub grade: Option<Value>,
    pub question_type: Option<String>,
    pub number: Option<u32>,
    pub vocab_difficulty: Option<String>,
    pub sentence_difficulty: Option<String>,
    pub inference_difficulty: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateQuestionsResponse {
    pub questions: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateExamRequest {
    pub grade: Option<Value>,
    pub vocab_difficulty: Option<String>,
    pub sentence_difficulty: Option<String>,
    pub inference_difficulty: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateExamResponse {
    pub exam_paper: Vec<ExamSection>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}

// ─── Validation ────────────────────────────────────────────────────────────

/// `grade` is taken as raw JSON so a string or float gets the grade message
/// rather than a body rejection.
fn require_grade(grade: Option<&Value>) -> Result<Grade, ApiError> {
    let grade = match grade {
        None | Some(Value::Null) => return Err(ApiError::bad_request("Missing 'grade' parameter")),
        Some(value) => value
            .as_i64()
            .ok_or_else(|| ApiError::bad_request(INVALID_GRADE))?,
    };
    Grade::new(grade).map_err(|_| ApiError::bad_request(INVALID_GRADE))
}

/// Parse a tier; `default` applies only when the field is absent.
fn parse_tier(value: Option<&str>, default: Option<Tier>) -> Result<Tier, ApiError> {
    match (value, default) {
        (Some(s), _) => s
            .parse()
            .map_err(|_| ApiError::bad_request(INVALID_DIFFICULTY)),
        (None, Some(tier)) => Ok(tier),
        (None, None) => Err(ApiError::bad_request(INVALID_DIFFICULTY)),
    }
}

fn body_rejection(rejection: JsonRejection) -> ApiError {
    ApiError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
}

// ─── Route Handlers ────────────────────────────────────────────────────────

async fn get_vocabulary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VocabularyQuery>,
) -> Result<Json<VocabularyResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    let grade = query
        .grade
        .as_deref()
        .filter(|g| !g.is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing 'grade' parameter"))?;
    let grade: u32 = grade
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request("'grade' must be a non-negative integer"))?;
    let tier = parse_tier(query.vocab_difficulty.as_deref(), Some(Tier::Medium))?;

    info!(request_id, grade, tier = %tier, "Vocabulary request");

    let vocabulary_list = state.select_vocabulary(&request_id, grade, tier).await?;

    Ok(Json(VocabularyResponse {
        grade,
        vocab_difficulty: tier,
        vocabulary_list,
    }))
}

async fn generate_questions(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateQuestionsRequest>, JsonRejection>,
) -> Result<Json<GenerateQuestionsResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();
    let Json(req) = body.map_err(body_rejection)?;

    let grade = require_grade(req.grade.as_ref())?;
    let vocab_difficulty = parse_tier(req.vocab_difficulty.as_deref(), None)?;
    let sentence_difficulty = parse_tier(req.sentence_difficulty.as_deref(), None)?;
    let inference_difficulty = parse_tier(req.inference_difficulty.as_deref(), None)?;
    let question_type = req
        .question_type
        .filter(|t| !t.trim().is_empty())
        .map(QuestionType::from)
        .ok_or_else(|| ApiError::bad_request("Missing 'questionType' parameter"))?;
    let number = req.number.unwrap_or(1);
    if number == 0 {
        return Err(ApiError::bad_request("'number' must be at least 1"));
    }

    info!(
        request_id,
        grade = grade.get(),
        question_type = %question_type,
        number,
        "Question generation request"
    );

    let vocabulary = state
        .select_vocabulary(&request_id, u32::from(grade.get()), vocab_difficulty)
        .await?;

    let prompt = build_prompt(&PromptRequest {
        grade: grade.get(),
        question_type: &question_type,
        count: number,
        vocabulary: &vocabulary,
        vocab_difficulty,
        sentence_difficulty,
        inference_difficulty,
    });

    let questions = state.generator.generate(&prompt).await.map_err(|e| {
        error!(request_id, error = %e, "Completion API error");
        ApiError::Internal(QUESTIONS_FAILED)
    })?;

    Ok(Json(GenerateQuestionsResponse { questions }))
}

async fn generate_exam(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateExamRequest>, JsonRejection>,
) -> Result<Json<GenerateExamResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();
    let Json(req) = body.map_err(body_rejection)?;

    let settings = ExamSettings {
        grade: require_grade(req.grade.as_ref())?,
        vocab_difficulty: parse_tier(req.vocab_difficulty.as_deref(), Some(Tier::Medium))?,
        sentence_difficulty: parse_tier(req.sentence_difficulty.as_deref(), Some(Tier::Medium))?,
        inference_difficulty: parse_tier(req.inference_difficulty.as_deref(), Some(Tier::Medium))?,
    };

    info!(request_id, grade = settings.grade.get(), "Exam generation request");

    let template = load_exam_template(&state.config.data.exam_template_path)
        .await
        .map_err(|e| {
            error!(request_id, error = %e, "Error loading exam template");
            ApiError::Internal(TEMPLATE_FAILED)
        })?;
    if template.sections.is_empty() {
        warn!(request_id, "Exam template has no sections");
    }

    let vocabulary = state
        .select_vocabulary(
            &request_id,
            u32::from(settings.grade.get()),
            settings.vocab_difficulty,
        )
        .await?;

    let assembler = ExamAssembler::new(state.generator.clone());
    let exam_paper = assembler
        .assemble(&template, &settings, &vocabulary)
        .await
        .map_err(|e| {
            error!(request_id, error = %e, "Exam generation aborted");
            ApiError::Internal(EXAM_FAILED)
        })?;

    Ok(Json(GenerateExamResponse { exam_paper }))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.metrics.render() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
