//! HTTP boundary: routes, JSON extraction, CORS and request metrics.
//!
//! There is exactly one router composition. Metrics are attached when
//! `metrics_enabled` is set and a [`Metrics`] collaborator is passed; otherwise
//! the router neither counts requests nor serves `/metrics`.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, FromRequest, MatchedPath, Request, State},
    http::{
        HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
        },
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;
use crate::error::InvalidInput;
use crate::metrics::Metrics;
use crate::ops::{compute_average_operation, compute_ewma_operation};
use crate::response::ResponseBody;

// ============================================================================
// DATA TYPES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageRequest {
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EwmaRequest {
    pub values: Vec<f64>,
    #[serde(default)]
    pub alpha: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

fn bad_request(error: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}

impl IntoResponse for InvalidInput {
    fn into_response(self) -> Response {
        bad_request(self.to_string())
    }
}

// ============================================================================
// SIMD-JSON EXTRACTOR
// ============================================================================

pub struct SimdJson<T>(pub T);

impl<S, T> FromRequest<S> for SimdJson<T>
where
    T: for<'de> Deserialize<'de>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            warn!(status = %e.status(), error = %e.body_text(), "Rejected request body");
            (e.status(), Json(ErrorResponse { error: e.body_text() })).into_response()
        })?;
        let mut bytes_vec = bytes.to_vec();

        let val = simd_json::from_slice::<T>(&mut bytes_vec).map_err(|e| {
            warn!(error = %e, "Rejected malformed JSON body");
            bad_request(format!("Invalid JSON: {}", e))
        })?;

        Ok(SimdJson(val))
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

async fn average_handler(
    SimdJson(req): SimdJson<AverageRequest>,
) -> Result<Json<ResponseBody>, InvalidInput> {
    let body = compute_average_operation(&req.values).inspect_err(|e| {
        warn!(count = req.values.len(), reason = %e, "Average rejected");
    })?;
    debug!(count = req.values.len(), "Average computed");
    Ok(Json(body))
}

async fn ewma_handler(
    SimdJson(req): SimdJson<EwmaRequest>,
) -> Result<Json<ResponseBody>, InvalidInput> {
    let body = compute_ewma_operation(&req.values, req.alpha).inspect_err(|e| {
        warn!(count = req.values.len(), alpha = ?req.alpha, reason = %e, "EWMA rejected");
    })?;
    debug!(count = req.values.len(), alpha = ?req.alpha, "EWMA computed");
    Ok(Json(body))
}

async fn metrics_handler(metrics: Metrics) -> Response {
    match metrics.render() {
        Ok(text) => (
            StatusCode::OK,
            [(CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

// ============================================================================
// MIDDLEWARE
// ============================================================================

async fn cors(req: Request, next: Next) -> Response {
    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };

    let headers = response.headers_mut();
    let any = HeaderValue::from_static("*");
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, any.clone());
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, any.clone());
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, any);
    response
}

async fn track_metrics(State(metrics): State<Metrics>, req: Request, next: Next) -> Response {
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let start = Instant::now();
    let response = next.run(req).await;
    metrics.observe(
        &endpoint,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );
    response
}

// ============================================================================
// COMPOSITION
// ============================================================================

/// `metrics` is attached only when `config.metrics_enabled` is set.
pub fn build_router(config: &ServerConfig, metrics: Option<Metrics>) -> Router {
    let metrics = metrics.filter(|_| config.metrics_enabled);

    let mut app = Router::new()
        .route("/health", get(health_handler))
        .route("/average", post(average_handler))
        .route("/ewma", post(ewma_handler))
        .layer(DefaultBodyLimit::max(config.max_body_bytes));

    if let Some(metrics) = metrics.clone() {
        app = app.route("/metrics", get(move || metrics_handler(metrics.clone())));
    }

    if config.cors_enabled {
        app = app.layer(middleware::from_fn(cors));
    }

    // Outermost, so CORS preflights are counted too.
    if let Some(metrics) = metrics {
        app = app.layer(middleware::from_fn_with_state(metrics, track_metrics));
    }

    app
}

/// Bind `config.addr()` and serve until Ctrl-C.
pub async fn serve(config: ServerConfig, metrics: Option<Metrics>) -> std::io::Result<()> {
    let metrics_attached = config.metrics_enabled && metrics.is_some();
    let app = build_router(&config, metrics);
    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;

    info!(addr = %addr, cors = config.cors_enabled, metrics = metrics_attached, "EWMA API listening.");
    info!("Endpoints:");
    info!("  GET  /health  - Liveness probe");
    info!("  POST /average - Arithmetic mean");
    info!("  POST /ewma    - Exponentially weighted moving average");
    if metrics_attached {
        info!("  GET  /metrics - Prometheus metrics");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down..."),
        Err(e) => {
            error!(error = %e, "Failed to install CTRL+C handler; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
