//! Fehlertypen fuer Tribune
//!
//! Untermodule koennen eigene Fehler definieren und via `#[from]` konvertieren.

use thiserror::Error;

/// Globaler Result-Alias fuer Tribune
pub type Result<T> = std::result::Result<T, TribuneError>;

/// Fehler der gemeinsamen Typen
#[derive(Debug, Error)]
pub enum TribuneError {
    #[error("Teilnehmer-Kennung darf nicht leer sein")]
    LeereTeilnehmerId,

    #[error("Ungueltige Anfrage: {0}")]
    UngueltigeAnfrage(String),

    #[error("Serialisierungsfehler: {0}")]
    Serialisierung(#[from] serde_json::Error),
}
