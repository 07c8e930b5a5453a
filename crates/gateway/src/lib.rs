//! tribune-gateway – HTTP-Eingang fuer Tribune
//!
//! Nimmt `GET /?from=&to=&message=&command=` und `POST /` mit JSON-Body
//! entgegen, normalisiert beides zu einer [`tribune_core::Anfrage`], laesst
//! den [`tribune_moderation::Moderator`] entscheiden, protokolliert die
//! Entscheidung im Audit-Log und serialisiert sie als JSON-Antwort.

pub mod error;
pub mod rest;

pub use error::{GatewayError, GatewayResult};
pub use rest::{gateway_router, GatewayState, RestServer, RestServerKonfig};
