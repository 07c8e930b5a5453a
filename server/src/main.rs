//! Tribune Server – Einstiegspunkt
//!
//! Laedt die Konfiguration, initialisiert das Logging und startet den Server.

use anyhow::Result;
use tribune_observability::logging_initialisieren;
use tribune_server::{config::ServerConfig, Server};

#[tokio::main]
async fn main() -> Result<()> {
    // Konfigurationsdatei-Pfad aus Umgebungsvariable oder Standard
    let config_pfad = std::env::var("TRIBUNE_CONFIG").unwrap_or_else(|_| "config.toml".into());

    // Konfiguration laden (Standardwerte falls Datei fehlt)
    let datei = ServerConfig::laden(&config_pfad)?;
    let gefunden = datei.is_some();
    let config = datei.unwrap_or_default();

    // Logging initialisieren
    logging_initialisieren(&config.logging.level, &config.logging.format);

    if !gefunden {
        tracing::warn!(
            pfad = %config_pfad,
            "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
        );
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_pfad,
        "Tribune Server wird initialisiert"
    );

    Server::neu(config).starten().await
}
