//! Route-Definitionen fuer das Gateway

use axum::{middleware, routing::get, Router};
use tribune_observability::{request_timing_layer, timing_middleware};

use crate::rest::{handlers, middleware::cors_header_setzen, GatewayState};

/// Erstellt den vollstaendigen Gateway-Router
///
/// HEAD wird explizit abgewiesen, sonst wuerde axum es an den GET-Handler
/// weiterreichen und den Zustand veraendern.
pub fn gateway_router(state: GatewayState) -> Router {
    let metriken = state.metriken.clone();
    Router::new()
        .route(
            "/",
            get(handlers::get_anfrage)
                .post(handlers::post_anfrage)
                .options(handlers::optionen)
                .head(handlers::methode_nicht_erlaubt)
                .fallback(handlers::methode_nicht_erlaubt),
        )
        .layer(middleware::from_fn(cors_header_setzen))
        .layer(middleware::from_fn_with_state(metriken, timing_middleware))
        .layer(request_timing_layer())
        .with_state(state)
}
