use std::time::Instant;

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec, TextEncoder,
};

use crate::errors::ApiError;

// Prometheus metrics (default registry)
pub static OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "fornecedor_operations_total",
        "Supplier operations by outcome",
        &["operation", "outcome"]
    )
    .expect("register fornecedor_operations_total")
});

pub static REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "fornecedor_request_duration_seconds",
        "Supplier handler duration in seconds",
        &["operation"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("register fornecedor_request_duration_seconds")
});

/// Count one handler invocation and observe its duration.
pub fn record<T>(operation: &str, result: &Result<T, ApiError>, started: Instant) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(e) => e.outcome(),
    };
    OPERATIONS_TOTAL.with_label_values(&[operation, outcome]).inc();
    REQUEST_DURATION
        .with_label_values(&[operation])
        .observe(started.elapsed().as_secs_f64());
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

pub async fn metrics() -> (StatusCode, String) {
    encode_metrics()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_outcomes_show_up_in_exposition() {
        let ok: Result<(), ApiError> = Ok(());
        record("get", &ok, Instant::now());
        let missing: Result<(), ApiError> = Err(ApiError::NotFound);
        record("get", &missing, Instant::now());

        assert!(OPERATIONS_TOTAL.with_label_values(&["get", "not_found"]).get() >= 1);
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("fornecedor_operations_total"));
        assert!(body.contains("fornecedor_request_duration_seconds"));
    }
}
