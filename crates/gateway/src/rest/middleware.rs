//! Axum-Middleware fuer Antwort-Header
//!
//! Browser-Teilnehmer beliebiger Herkunft muessen das Gateway aufrufen
//! koennen. Die drei CORS-Header werden deshalb auf jede Antwort gesetzt,
//! nicht nur auf Preflight-Antworten. Antworten ohne Body (204) tragen
//! trotzdem `Content-Type: application/json`.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

pub const ERLAUBTE_METHODEN: &str = "GET, POST, OPTIONS";
pub const ERLAUBTE_HEADER: &str = "Content-Type";

/// Setzt `Access-Control-Allow-*` auf jede Antwort, `Content-Type` nur falls
/// noch keiner gesetzt ist
pub async fn cors_header_setzen(req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ERLAUBTE_METHODEN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ERLAUBTE_HEADER),
    );
    if !headers.contains_key(header::CONTENT_TYPE) {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn leere_antwort_erhaelt_json_content_type() {
        let app = Router::new()
            .route("/", get(|| async { StatusCode::NO_CONTENT }))
            .layer(axum::middleware::from_fn(cors_header_setzen));

        let antwort = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(antwort.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(antwort.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn vorhandener_content_type_bleibt() {
        let app = Router::new()
            .route("/", get(|| async { "text" }))
            .layer(axum::middleware::from_fn(cors_header_setzen));

        let antwort = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(antwort.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
    }
}
