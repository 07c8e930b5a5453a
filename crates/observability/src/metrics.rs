//! Prometheus-kompatible Metriken fuer Tribune
//!
//! Registrierte Metriken:
//! - `tribune_decisions_total` – Counter: Entscheidungen (disposition)
//! - `tribune_waiting_participants` – Gauge: Laenge der Warteschlange
//! - `tribune_current_speaker` – Gauge: 1 wenn jemand das Wort hat
//! - `tribune_audit_dropped` – Gauge: verworfene Audit-Eintraege
//! - `tribune_http_request_duration_seconds` – Histogram: HTTP-Antwortzeit (method, status)

use anyhow::Result;
use axum::{extract::State, response::IntoResponse, routing::get, Router};
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Alle Tribune-Prometheus-Metriken
#[derive(Clone)]
pub struct TribuneMetrics {
    pub registry: Arc<Registry>,

    // Moderation
    pub decisions_total: IntCounterVec,
    pub waiting_participants: IntGauge,
    pub current_speaker: IntGauge,

    // Audit
    pub audit_dropped: IntGauge,

    // HTTP
    pub http_request_duration_seconds: HistogramVec,
}

impl TribuneMetrics {
    /// Erstellt und registriert alle Metriken in einer neuen Registry
    pub fn neu() -> Result<Self> {
        let registry = Registry::new();

        let decisions_total = IntCounterVec::new(
            Opts::new("tribune_decisions_total", "Anzahl Entscheidungen je Disposition"),
            &["disposition"],
        )?;
        registry.register(Box::new(decisions_total.clone()))?;

        let waiting_participants = IntGauge::with_opts(Opts::new(
            "tribune_waiting_participants",
            "Anzahl wartender Teilnehmer",
        ))?;
        registry.register(Box::new(waiting_participants.clone()))?;

        let current_speaker = IntGauge::with_opts(Opts::new(
            "tribune_current_speaker",
            "1 wenn ein Teilnehmer das Wort hat, sonst 0",
        ))?;
        registry.register(Box::new(current_speaker.clone()))?;

        let audit_dropped = IntGauge::with_opts(Opts::new(
            "tribune_audit_dropped",
            "Verworfene Audit-Eintraege seit Prozessstart",
        ))?;
        registry.register(Box::new(audit_dropped.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "tribune_http_request_duration_seconds",
                "HTTP-Antwortzeit in Sekunden",
            )
            .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
            &["method", "status"],
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            decisions_total,
            waiting_participants,
            current_speaker,
            audit_dropped,
            http_request_duration_seconds,
        })
    }

    /// Zaehlt eine Entscheidung
    pub fn entscheidung_zaehlen(&self, disposition: &str) {
        self.decisions_total
            .with_label_values(&[disposition])
            .inc();
    }

    /// Spiegelt den Stand der Rednerliste in die Gauges
    pub fn rednerliste_setzen(&self, sprecher_aktiv: bool, wartend: usize) {
        self.current_speaker.set(i64::from(sprecher_aktiv));
        self.waiting_participants
            .set(i64::try_from(wartend).unwrap_or(i64::MAX));
    }

    /// Exportiert alle Metriken im Prometheus-Textformat
    pub fn exportieren(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// Axum-Router fuer den `/metrics`-Endpunkt
pub fn metrics_router(metriken: TribuneMetrics) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(metriken)
}

async fn metrics_handler(State(metriken): State<TribuneMetrics>) -> impl IntoResponse {
    match metriken.exportieren() {
        Ok(text) => (
            axum::http::StatusCode::OK,
            [(
                axum::http::header::CONTENT_TYPE,
                "text/plain; version=0.0.4",
            )],
            text,
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Metriken-Export fehlgeschlagen: {err}");
            axum::http::StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
