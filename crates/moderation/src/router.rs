//! Befehls-Router
//!
//! Ordnet eine normalisierte Anfrage genau einer Disposition zu. Die Regeln
//! werden in fester Reihenfolge geprueft, die erste passende gewinnt:
//!
//! 1. `command == "wantToSpeak"` -> [`Disposition::SpeakRequest`]
//! 2. `command == "endSpeak"` -> [`Disposition::EndSpeak`]
//! 3. Nachricht mit gesperrtem Inhalt -> [`Disposition::Forbidden`]
//! 4. Nachricht beginnt mit `simulator` -> [`Disposition::Redirect`]
//! 5. sonst -> [`Disposition::Broadcast`]

use tribune_core::Anfrage;

use crate::filter::ist_verboten;

pub const BEFEHL_SPRECHEN: &str = "wantToSpeak";
pub const BEFEHL_SPRECHEN_ENDE: &str = "endSpeak";

/// Schluesselwort fuer die Weiterleitung an den Simulator
const SIMULATOR_PRAEFIX: &str = "simulator";

/// Klassifiziertes Ergebnis des Routings (ohne Zustand)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    SpeakRequest,
    EndSpeak,
    Forbidden,
    /// Nutzlast = Nachricht ohne fuehrendes `simulator`, getrimmt
    Redirect(String),
    Broadcast,
}

/// Klassifiziert eine Anfrage
pub fn klassifizieren(anfrage: &Anfrage) -> Disposition {
    match anfrage.befehl() {
        Some(BEFEHL_SPRECHEN) => return Disposition::SpeakRequest,
        Some(BEFEHL_SPRECHEN_ENDE) => return Disposition::EndSpeak,
        _ => {}
    }

    if let Some(nachricht) = anfrage.nachricht() {
        if ist_verboten(nachricht) {
            return Disposition::Forbidden;
        }
        if let Some(rest) = simulator_rest(nachricht) {
            return Disposition::Redirect(rest.trim().to_string());
        }
    }

    Disposition::Broadcast
}

/// Gibt den Rest hinter einem fuehrenden `simulator` zurueck (ohne Beachtung
/// der Gross-/Kleinschreibung)
fn simulator_rest(nachricht: &str) -> Option<&str> {
    let laenge = SIMULATOR_PRAEFIX.len();
    nachricht
        .get(..laenge)
        .filter(|kopf| kopf.eq_ignore_ascii_case(SIMULATOR_PRAEFIX))
        .map(|_| &nachricht[laenge..])
}
