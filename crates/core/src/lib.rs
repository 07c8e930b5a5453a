//! tribune-core – Gemeinsame Typen und Fehlertypen
//!
//! Dieses Crate stellt die Bausteine bereit, die von Moderation, Audit und
//! Gateway gemeinsam genutzt werden: Teilnehmer-Kennungen, die normalisierte
//! Anfrage, die Entscheidung pro Anfrage und den Audit-Eintrag.

pub mod anfrage;
pub mod entscheidung;
pub mod error;
pub mod types;

// Re-Exporte fuer bequemen Zugriff
pub use anfrage::Anfrage;
pub use entscheidung::{AuditEintrag, Entscheidung};
pub use error::{Result, TribuneError};
pub use types::TeilnehmerId;
