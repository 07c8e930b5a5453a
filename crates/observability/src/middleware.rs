//! Request-Timing Middleware fuer Axum
//!
//! Misst die Antwortzeit jeder HTTP-Anfrage, protokolliert sie als
//! strukturiertes Log-Event und traegt sie ins Prometheus-Histogramm ein.

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response},
    middleware::Next,
};
use std::time::Instant;

use crate::metrics::TribuneMetrics;

/// Erstellt den Tracing-Layer fuer HTTP-Anfragen.
pub fn request_timing_layer() -> tower_http::trace::TraceLayer<
    tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>,
> {
    tower_http::trace::TraceLayer::new_for_http()
}

/// Axum-Middleware-Funktion: misst Antwortzeit und loggt strukturiert.
///
/// Verwendung:
/// ```ignore
/// Router::new()
///     .route("/", get(handler))
///     .layer(axum::middleware::from_fn_with_state(metriken, timing_middleware))
/// ```
pub async fn timing_middleware(
    State(metriken): State<TribuneMetrics>,
    req: Request<Body>,
    next: Next,
) -> Response<Body> {
    let methode = req.method().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let dauer = start.elapsed();
    let status = response.status().as_u16();

    let status_text = status.to_string();
    metriken
        .http_request_duration_seconds
        .with_label_values(&[methode.as_str(), status_text.as_str()])
        .observe(dauer.as_secs_f64());

    tracing::debug!(
        method = %methode,
        status = status,
        duration_us = dauer.as_micros() as u64,
        "HTTP-Anfrage abgeschlossen"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn dauer_wird_im_histogramm_erfasst() {
        let metriken = TribuneMetrics::neu().unwrap();
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn_with_state(
                metriken.clone(),
                timing_middleware,
            ));

        app.oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let anzahl = metriken
            .http_request_duration_seconds
            .with_label_values(&["GET", "200"])
            .get_sample_count();
        assert_eq!(anzahl, 1);
    }
}
