//! REST-Interface des Gateways

pub mod antwort;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use tribune_audit::AuditLogger;
use tribune_core::Anfrage;
use tribune_moderation::Moderator;
use tribune_observability::TribuneMetrics;

use crate::error::GatewayError;

pub use routes::gateway_router;
pub use server::{RestServer, RestServerKonfig};

/// Axum-State fuer den Gateway-Server
#[derive(Clone)]
pub struct GatewayState {
    pub moderator: Arc<Moderator>,
    pub audit: Arc<AuditLogger>,
    pub metriken: TribuneMetrics,
}

impl GatewayState {
    /// Erstellt den Moderator und verbindet dessen Rednerliste mit den Gauges
    pub fn neu(audit: Arc<AuditLogger>, metriken: TribuneMetrics) -> Self {
        let gauges = metriken.clone();
        let moderator = Moderator::mit_beobachter(move |stand| {
            gauges.rednerliste_setzen(stand.sprecher.is_some(), stand.wartend.len());
        });
        Self {
            moderator: Arc::new(moderator),
            audit,
            metriken,
        }
    }

    /// Verarbeitet eine normalisierte Anfrage
    ///
    /// Reihenfolge: Moderator entscheidet (die Gauges der Rednerliste werden
    /// dabei unter deren Lock gesetzt), Antwort wird gebaut, danach wird
    /// das Paar (Anfrage, Entscheidung) ohne Warten ans Audit-Log gegeben.
    /// Eingabefehler werden nicht protokolliert.
    pub fn verarbeiten(&self, anfrage: Anfrage) -> Response {
        let entscheidung = match self.moderator.entscheiden(&anfrage) {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!(fehler = %e, "Anfrage abgelehnt");
                return GatewayError::from(e).into_response();
            }
        };

        let antwort = antwort::antwort_aus_entscheidung(&entscheidung);

        self.metriken.entscheidung_zaehlen(entscheidung.art());

        self.audit.anhaengen(anfrage, entscheidung);
        self.metriken
            .audit_dropped
            .set(i64::try_from(self.audit.verworfen()).unwrap_or(i64::MAX));

        antwort
    }
}
