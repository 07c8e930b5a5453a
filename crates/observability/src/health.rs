//! Health-Check-Endpunkt fuer Tribune
//!
//! Endpoint: `GET /health`
//! Response: JSON mit Status, Version, Uptime und Audit-Status

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Status des Health-Checks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Antwort des Health-Check-Endpunkts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub audit_aktiv: bool,
}

/// Geteilter Zustand fuer den Health-Check-Handler
#[derive(Clone)]
pub struct HealthState {
    start_time: Arc<Instant>,
    audit_aktiv: bool,
}

impl HealthState {
    pub fn neu(audit_aktiv: bool) -> Self {
        Self {
            start_time: Arc::new(Instant::now()),
            audit_aktiv,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Wird beim Start festgelegt; das Audit-Log wird spaeter weder an-
    /// noch abgeschaltet
    pub fn audit_aktiv(&self) -> bool {
        self.audit_aktiv
    }

    pub fn antwort(&self) -> HealthResponse {
        let audit_aktiv = self.audit_aktiv();
        HealthResponse {
            status: if audit_aktiv {
                HealthStatus::Healthy
            } else {
                HealthStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.uptime_seconds(),
            audit_aktiv,
        }
    }
}

/// Axum-Router fuer den `/health`-Endpunkt
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// `GET /health` – 200 auch bei degraded (Probe soll nicht failen)
async fn health_handler(State(state): State<HealthState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.antwort()))
}
