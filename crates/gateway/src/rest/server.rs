//! Axum HTTP-Server fuer das Gateway

use std::future::Future;
use std::net::SocketAddr;

use anyhow::Result;

use crate::rest::{routes::gateway_router, GatewayState};

/// REST-Server-Konfiguration
#[derive(Debug, Clone)]
pub struct RestServerKonfig {
    pub bind_addr: SocketAddr,
}

impl Default for RestServerKonfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 7000)),
        }
    }
}

/// Axum HTTP-Server fuer das Gateway
pub struct RestServer {
    konfig: RestServerKonfig,
}

impl RestServer {
    pub fn neu(konfig: RestServerKonfig) -> Self {
        Self { konfig }
    }

    /// Startet den Server und laeuft bis `shutdown` abgeschlossen ist
    pub async fn starten<F>(self, state: GatewayState, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = gateway_router(state);

        let listener = tokio::net::TcpListener::bind(self.konfig.bind_addr).await?;
        tracing::info!(addr = %self.konfig.bind_addr, "Gateway gestartet");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("Gateway beendet");
        Ok(())
    }
}
