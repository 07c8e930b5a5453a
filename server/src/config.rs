//! Server-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder haben
//! sinnvolle Standardwerte, sodass der Server ohne Konfigurationsdatei
//! lauffaehig ist.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tribune_audit::{logger::STANDARD_QUEUE_GROESSE, AuditKonfig};
use tribune_observability::logging::{log_format_gueltig, log_level_gueltig};

/// Vollstaendige Server-Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Netzwerk-Einstellungen
    pub netzwerk: NetzwerkEinstellungen,
    /// Audit-Log-Einstellungen
    pub audit: AuditEinstellungen,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
    /// Observability-Einstellungen (Metriken, Health)
    pub observability: ObservabilityEinstellungen,
}

/// Netzwerk-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetzwerkEinstellungen {
    /// Bind-Adresse fuer Gateway und Observability-Server
    pub bind_adresse: String,
    /// Port des Gateways
    pub port: u16,
}

impl Default for NetzwerkEinstellungen {
    fn default() -> Self {
        Self {
            bind_adresse: "0.0.0.0".into(),
            port: 7000,
        }
    }
}

/// Audit-Log-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditEinstellungen {
    /// `false` schaltet das Audit-Log komplett ab
    pub aktiviert: bool,
    /// Primaeres Log-Verzeichnis
    pub verzeichnis: PathBuf,
    /// Ausweichverzeichnis, falls das primaere nicht beschreibbar ist
    pub fallback_verzeichnis: PathBuf,
    /// Kapazitaet der Schreib-Queue
    pub queue_groesse: usize,
}

impl Default for AuditEinstellungen {
    fn default() -> Self {
        Self {
            aktiviert: true,
            verzeichnis: PathBuf::from("logs"),
            fallback_verzeichnis: std::env::temp_dir().join("tribune-logs"),
            queue_groesse: STANDARD_QUEUE_GROESSE,
        }
    }
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Log-Level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

/// Observability-Einstellungen (Metriken + Health-Check)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityEinstellungen {
    /// Aktiviert den Observability-Server
    pub aktiviert: bool,
    /// Port fuer Metriken und Health (Standard: 9300)
    pub port: u16,
}

impl Default for ObservabilityEinstellungen {
    fn default() -> Self {
        Self {
            aktiviert: true,
            port: 9300,
        }
    }
}

impl ServerConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    ///
    /// `Ok(None)` wenn die Datei nicht existiert; der Aufrufer faellt dann
    /// auf die Standardwerte zurueck und meldet das, sobald das Logging steht.
    pub fn laden(pfad: &str) -> anyhow::Result<Option<Self>> {
        match std::fs::read_to_string(pfad) {
            Ok(inhalt) => {
                let config: Self = toml::from_str(&inhalt)
                    .map_err(|e| anyhow::anyhow!("Konfigurationsfehler in '{pfad}': {e}"))?;
                config.pruefen()?;
                Ok(Some(config))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(anyhow::anyhow!(
                "Konfigurationsdatei '{pfad}' nicht lesbar: {e}"
            )),
        }
    }

    /// Prueft Werte, die serde allein nicht abfangen kann
    pub fn pruefen(&self) -> anyhow::Result<()> {
        if !log_level_gueltig(&self.logging.level) {
            anyhow::bail!("Ungueltiges Log-Level '{}'", self.logging.level);
        }
        if !log_format_gueltig(&self.logging.format) {
            anyhow::bail!("Ungueltiges Log-Format '{}'", self.logging.format);
        }
        Ok(())
    }

    /// Gibt die Bind-Adresse fuer das Gateway zurueck
    pub fn gateway_bind_adresse(&self) -> anyhow::Result<SocketAddr> {
        adresse_parsen(&self.netzwerk.bind_adresse, self.netzwerk.port)
    }

    /// Gibt die Bind-Adresse fuer den Observability-Server zurueck
    pub fn observability_bind_adresse(&self) -> anyhow::Result<SocketAddr> {
        adresse_parsen(&self.netzwerk.bind_adresse, self.observability.port)
    }

    /// Uebersetzt den `[audit]`-Abschnitt in die Logger-Konfiguration
    pub fn audit_konfig(&self) -> AuditKonfig {
        AuditKonfig {
            primaer: self.audit.verzeichnis.clone(),
            fallback: self.audit.fallback_verzeichnis.clone(),
            queue_groesse: self.audit.queue_groesse.max(1),
        }
    }
}

fn adresse_parsen(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    format!("{host}:{port}")
        .parse()
        .map_err(|e| anyhow::anyhow!("Ungueltige Bind-Adresse '{host}:{port}': {e}"))
}
