//! Fehlertypen fuer das Audit-Crate

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("IO-Fehler: {0}")]
    Io(#[from] std::io::Error),

    #[error("Audit-Eintrag nicht serialisierbar: {0}")]
    Serialisierung(#[from] tribune_core::TribuneError),
}

pub type AuditResult<T> = Result<T, AuditError>;
