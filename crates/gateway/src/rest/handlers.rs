//! REST-Handler fuer `/`

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tribune_core::Anfrage;

use crate::error::GatewayError;
use crate::rest::GatewayState;

/// `GET /?from=&to=&message=&command=`
///
/// Wiederholte Parameter sind erlaubt, der letzte Wert gilt.
pub async fn get_anfrage(
    State(state): State<GatewayState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    match query {
        Ok(Query(paare)) => state.verarbeiten(Anfrage::aus_query_paaren(paare)),
        Err(e) => {
            tracing::debug!(fehler = %e, "Query nicht lesbar");
            GatewayError::UngueltigeQuery.into_response()
        }
    }
}

/// `POST /` mit JSON-Body
///
/// Der Content-Type wird nicht geprueft. Kaputtes JSON erreicht weder
/// Moderator noch Audit-Log.
pub async fn post_anfrage(State(state): State<GatewayState>, body: Bytes) -> Response {
    match Anfrage::aus_json(&body) {
        Ok(anfrage) => state.verarbeiten(anfrage),
        Err(e) => {
            tracing::debug!(fehler = %e, "POST-Body ist kein gueltiges JSON");
            GatewayError::UngueltigesJson.into_response()
        }
    }
}

/// `OPTIONS /` – CORS-Preflight, keine weitere Verarbeitung
pub async fn optionen() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Alle anderen Methoden
pub async fn methode_nicht_erlaubt() -> GatewayError {
    GatewayError::MethodeNichtErlaubt
}
