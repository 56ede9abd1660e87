//! Generator wrapper that records call metrics.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

use crate::generator::{GeneratorError, QuestionGenerator};
use crate::metrics::Metrics;

/// Forwards to an inner generator, recording outcome and latency per call.
pub struct MeteredGenerator {
    inner: Arc<dyn QuestionGenerator>,
    metrics: Metrics,
}

impl MeteredGenerator {
    pub fn new(inner: Arc<dyn QuestionGenerator>, metrics: Metrics) -> Self {
        Self { inner, metrics }
    }
}

#[async_trait]
impl QuestionGenerator for MeteredGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let start = Instant::now();
        let result = self.inner.generate(prompt).await;
        self.metrics
            .observe_generation(result.is_ok(), start.elapsed().as_secs_f64());
        result
    }
}
