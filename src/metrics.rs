//! Request metrics, owned by the server rather than held in process statics.

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

/// Request counter and latency histogram on a private registry.
///
/// Cloning is cheap; clones share the same underlying series.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration: HistogramVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("ewma_api_requests_total", "Total HTTP requests handled"),
            &["endpoint", "status"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        let request_duration = HistogramVec::new(
            HistogramOpts::new(
                "ewma_api_request_duration_seconds",
                "Histogram of request latency",
            ),
            &["endpoint"],
        )?;
        registry.register(Box::new(request_duration.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration,
        })
    }

    pub fn observe(&self, endpoint: &str, status: u16, seconds: f64) {
        let status = status.to_string();
        self.requests_total
            .with_label_values(&[endpoint, status.as_str()])
            .inc();
        self.request_duration
            .with_label_values(&[endpoint])
            .observe(seconds);
    }

    pub fn requests(&self, endpoint: &str, status: u16) -> u64 {
        let status = status.to_string();
        self.requests_total
            .with_label_values(&[endpoint, status.as_str()])
            .get()
    }

    /// Text exposition of everything in the registry.
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_endpoint_and_status() {
        let metrics = Metrics::new().unwrap();
        metrics.observe("/ewma", 200, 0.001);
        metrics.observe("/ewma", 200, 0.002);
        metrics.observe("/ewma", 400, 0.001);

        assert_eq!(metrics.requests("/ewma", 200), 2);
        assert_eq!(metrics.requests("/ewma", 400), 1);
        assert_eq!(metrics.requests("/average", 200), 0);
    }

    #[test]
    fn test_render_exposes_both_series() {
        let metrics = Metrics::new().unwrap();
        metrics.observe("/average", 200, 0.01);

        let text = metrics.render().unwrap();
        assert!(text.contains("ewma_api_requests_total"));
        assert!(text.contains("ewma_api_request_duration_seconds_bucket"));
        assert!(text.contains("endpoint=\"/average\""));
    }

    #[test]
    fn test_instances_are_independent() {
        let a = Metrics::new().unwrap();
        let b = Metrics::new().unwrap();
        a.observe("/health", 200, 0.0);
        assert_eq!(a.requests("/health", 200), 1);
        assert_eq!(b.requests("/health", 200), 0);
    }
}
