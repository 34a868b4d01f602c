//! Read-only HTTP API over the stored snapshots.
//!
//! Three routes: a liveness banner, the last raw snapshot and the last processed one.
//! Both data routes wrap the stored JSON in an envelope carrying a serve-time local
//! timestamp; a failed cycle never advances what is served here.
//!

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Local, SecondsFormat};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::storage::Storage;

/// Shared handler state.
///
#[derive(Clone, Debug)]
pub struct AppState {
    pub storage: Storage,
}

/// Build the router.
///
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/flights", get(flights))
        .route("/processedflights", get(processed_flights))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn index() -> &'static str {
    "skywatchd running"
}

async fn flights(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    serve_file(&state, state.storage.raw_path())
}

async fn processed_flights(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    serve_file(&state, state.storage.processed_path())
}

/// Wrap a state file in the reply envelope.
///
fn serve_file(state: &AppState, path: PathBuf) -> (StatusCode, Json<Value>) {
    match state.storage.load(&path) {
        Ok(data) => (
            StatusCode::OK,
            Json(json!({ "timestamp": local_timestamp(), "data": data })),
        ),
        Err(report) => {
            error!("Error reading {:?}: {}", path, report);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
        }
    }
}

/// ISO 8601 local time with the UTC offset.
///
fn local_timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}
