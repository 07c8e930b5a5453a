//! Normalisierte Anfrage
//!
//! Eine Anfrage existiert nur fuer die Dauer eines Request/Response-Zyklus.
//! GET-Query und POST-Body werden auf dieselbe Struktur abgebildet.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TribuneError};
use crate::types::TeilnehmerId;

/// Transport-unabhaengige Anfrage `{from, to, message, command}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anfrage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Anfrage {
    /// Parst einen POST-Body. Erwartet ein JSON-Objekt dessen bekannte Felder
    /// Strings oder `null` sind; unbekannte Felder werden ignoriert.
    pub fn aus_json(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| TribuneError::UngueltigeAnfrage(e.to_string()))
    }

    /// Baut eine Anfrage aus dekodierten Query-Paaren.
    ///
    /// Bei wiederholten Schluesseln gewinnt der letzte Wert; unbekannte
    /// Schluessel werden ignoriert.
    pub fn aus_query_paaren<I>(paare: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut anfrage = Self::default();
        for (schluessel, wert) in paare {
            let feld = match schluessel.as_str() {
                "from" => &mut anfrage.from,
                "to" => &mut anfrage.to,
                "message" => &mut anfrage.message,
                "command" => &mut anfrage.command,
                _ => continue,
            };
            *feld = Some(wert);
        }
        anfrage
    }

    /// Absender als Teilnehmer-Kennung (fehlend oder leer -> `None`)
    pub fn absender(&self) -> Option<TeilnehmerId> {
        self.from.clone().and_then(TeilnehmerId::neu)
    }

    pub fn nachricht(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn befehl(&self) -> Option<&str> {
        self.command.as_deref()
    }
}
