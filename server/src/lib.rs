//! tribune-server – Bibliotheks-Root
//!
//! Verdrahtet Audit-Log, Gateway (samt Moderator) und Observability und stellt
//! den oeffentlichen Einstiegspunkt fuer Tests bereit.

pub mod config;

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use config::ServerConfig;
use tribune_audit::AuditLogger;
use tribune_gateway::{GatewayState, RestServer, RestServerKonfig};
use tribune_observability::{observability_server_starten, HealthState, TribuneMetrics};

/// Haelt den laufenden Server-Zustand zusammen
pub struct Server {
    pub config: ServerConfig,
}

impl Server {
    /// Erstellt einen neuen Server aus der gegebenen Konfiguration
    pub fn neu(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Baut den geteilten Zustand auf: Rednerliste, Audit-Log, Metriken, Health
    ///
    /// Muss innerhalb einer tokio-Runtime aufgerufen werden, da der
    /// Audit-Schreib-Task hier gestartet wird.
    pub fn zustand_aufbauen(&self) -> Result<(GatewayState, HealthState)> {
        let audit = if self.config.audit.aktiviert {
            AuditLogger::initialisieren(&self.config.audit_konfig())
        } else {
            tracing::info!("Audit-Log per Konfiguration deaktiviert");
            AuditLogger::deaktiviert()
        };

        let health = HealthState::neu(audit.ist_aktiv());
        let metriken = TribuneMetrics::neu()?;
        let state = GatewayState::neu(Arc::new(audit), metriken);
        Ok((state, health))
    }

    /// Startet alle Subsysteme und laeuft bis zum Shutdown-Signal (Ctrl-C)
    pub async fn starten(self) -> Result<()> {
        self.starten_mit_signal(shutdown_signal()).await
    }

    /// Wie [`Server::starten`], aber mit frei waehlbarem Shutdown-Signal
    ///
    /// Reihenfolge:
    /// 1. Zustand aufbauen (Audit-Verzeichnis wird hier aufgeloest)
    /// 2. Observability-Server starten (falls aktiviert)
    /// 3. Gateway starten und bis `shutdown` laufen
    /// 4. Audit-Log leeren
    pub async fn starten_mit_signal<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let gateway_addr = self.config.gateway_bind_adresse()?;
        let (state, health) = self.zustand_aufbauen()?;

        tracing::info!(
            gateway = %gateway_addr,
            audit_aktiv = state.audit.ist_aktiv(),
            audit_verzeichnis = ?state.audit.verzeichnis(),
            "Server startet"
        );

        let observability = if self.config.observability.aktiviert {
            let addr = self.config.observability_bind_adresse()?;
            let metriken = state.metriken.clone();
            Some(tokio::spawn(async move {
                if let Err(e) = observability_server_starten(addr, metriken, health).await {
                    tracing::error!("Observability-Server fehlgeschlagen: {e}");
                }
            }))
        } else {
            None
        };

        let audit = Arc::clone(&state.audit);
        let ergebnis = RestServer::neu(RestServerKonfig {
            bind_addr: gateway_addr,
        })
        .starten(state, shutdown)
        .await;

        if let Some(task) = observability {
            task.abort();
        }

        audit.leeren().await;
        if audit.verworfen() > 0 {
            tracing::warn!(
                verworfen = audit.verworfen(),
                "Audit-Eintraege wurden wegen voller Queue verworfen"
            );
        }
        tracing::info!("Server beendet");

        ergebnis
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown-Signal empfangen, Server wird beendet"),
        Err(e) => {
            tracing::error!("Ctrl-C-Handler konnte nicht installiert werden: {e}");
            std::future::pending::<()>().await;
        }
    }
}
