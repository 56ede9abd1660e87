//! Prometheus metrics for generator traffic.

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};

/// Process-wide metric handles, exported at `/metrics`.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    generation_calls: IntCounterVec,
    generation_latency: Histogram,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let generation_calls = IntCounterVec::new(
            Opts::new(
                "exam_generation_calls_total",
                "Completion API calls by outcome",
            ),
            &["outcome"],
        )?;
        let generation_latency = Histogram::with_opts(
            HistogramOpts::new(
                "exam_generation_latency_seconds",
                "Completion API call latency",
            )
            .buckets(vec![0.5, 1.0, 2.5, 5.0, 10.0, 20.0, 40.0, 80.0, 160.0]),
        )?;

        registry.register(Box::new(generation_calls.clone()))?;
        registry.register(Box::new(generation_latency.clone()))?;

        Ok(Self {
            registry,
            generation_calls,
            generation_latency,
        })
    }

    /// Record one generator call.
    pub fn observe_generation(&self, ok: bool, elapsed_secs: f64) {
        let outcome = if ok { "ok" } else { "error" };
        self.generation_calls.with_label_values(&[outcome]).inc();
        self.generation_latency.observe(elapsed_secs);
    }

    pub fn generation_calls(&self, ok: bool) -> u64 {
        let outcome = if ok { "ok" } else { "error" };
        self.generation_calls.with_label_values(&[outcome]).get()
    }

    /// Render all metrics in the text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_render() {
        let metrics = Metrics::new().unwrap();
        metrics.observe_generation(true, 1.2);
        metrics.observe_generation(true, 0.3);
        metrics.observe_generation(false, 4.0);

        assert_eq!(metrics.generation_calls(true), 2);
        assert_eq!(metrics.generation_calls(false), 1);

        let text = metrics.render().unwrap();
        assert!(text.contains("exam_generation_calls_total{outcome=\"ok\"} 2"));
        assert!(text.contains("exam_generation_latency_seconds_count 3"));
    }
}
