//! tribune-audit – Append-only Audit-Log
//!
//! - [`verzeichnis`]: Log-Verzeichnis einmalig aufloesen (primaer, dann Fallback)
//! - [`logger`]: [`AuditLogger`] mit einem einzelnen Schreib-Task
//!
//! Protokollierung ist best-effort: Fehler gehen nur an `tracing`, niemals an
//! den Aufrufer.

pub mod error;
pub mod logger;
pub mod verzeichnis;

#[cfg(test)]
mod tests;

pub use error::{AuditError, AuditResult};
pub use logger::{AuditKonfig, AuditLogger};
pub use verzeichnis::{dateiname, verzeichnis_aufloesen};
