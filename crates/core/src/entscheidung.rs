//! Entscheidungen und Audit-Eintraege
//!
//! Jede verarbeitete Anfrage fuehrt zu genau einer [`Entscheidung`]. Sie ist
//! gleichzeitig die Zusammenfassung, die im Audit-Log landet.

use serde::{Deserialize, Serialize};

use crate::anfrage::Anfrage;
use crate::error::Result;
use crate::types::TeilnehmerId;

/// Ergebnis der Moderation einer einzelnen Anfrage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "disposition", rename_all = "snake_case")]
pub enum Entscheidung {
    /// Rederecht vergeben (oder freigegeben wenn `who` leer ist), an alle
    Grant {
        who: Option<TeilnehmerId>,
        waiting: Vec<TeilnehmerId>,
    },
    /// Anfrager wartet; Information nur an ihn
    Queued {
        to: TeilnehmerId,
        who: Option<TeilnehmerId>,
        waiting: Vec<TeilnehmerId>,
    },
    /// Rederecht-Ende von jemandem der nicht spricht
    Ignored { from: Option<String> },
    /// Nachricht enthaelt gesperrte Inhalte
    Forbidden { to: Option<String> },
    /// Nachricht wird an den Simulator weitergeleitet
    Redirect { message: String },
    /// Oeffentliche Nachricht an alle
    Broadcast {
        from: Option<String>,
        message: Option<String>,
        command: Option<String>,
    },
}

impl Entscheidung {
    /// Kurzname der Disposition (Metrik-Label, Log-Feld)
    pub fn art(&self) -> &'static str {
        match self {
            Self::Grant { .. } => "grant",
            Self::Queued { .. } => "queued",
            Self::Ignored { .. } => "ignored",
            Self::Forbidden { .. } => "forbidden",
            Self::Redirect { .. } => "redirect",
            Self::Broadcast { .. } => "broadcast",
        }
    }
}

/// Eine Zeile im Audit-Log: `{"request": {...}, "decision": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEintrag {
    pub request: Anfrage,
    pub decision: Entscheidung,
}

impl AuditEintrag {
    pub fn neu(request: Anfrage, decision: Entscheidung) -> Self {
        Self { request, decision }
    }

    /// Serialisiert den Eintrag als eine JSON-Zeile inklusive Zeilenumbruch
    pub fn als_json_zeile(&self) -> Result<String> {
        let mut zeile = serde_json::to_string(self)?;
        zeile.push('\n');
        Ok(zeile)
    }
}
