//! Fehlertypen fuer das Gateway
//!
//! Nur Eingabe- und Transportfehler; Moderationsentscheidungen (auch
//! `forbidden`) sind keine Fehler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;
use tribune_moderation::ModerationError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Invalid JSON")]
    UngueltigesJson,

    #[error("Invalid query")]
    UngueltigeQuery,

    #[error("Method Not Allowed")]
    MethodeNichtErlaubt,

    #[error(transparent)]
    Moderation(#[from] ModerationError),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::UngueltigesJson | Self::UngueltigeQuery => StatusCode::BAD_REQUEST,
            Self::MethodeNichtErlaubt => StatusCode::METHOD_NOT_ALLOWED,
            Self::Moderation(ModerationError::AbsenderFehlt) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Fehlerantwort: `{"error": "..."}`
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.http_status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
