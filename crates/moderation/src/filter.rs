//! Inhaltsfilter
//!
//! Grobe Teilstring-Suche ohne Wortgrenzen: jedes Wort, das einen gesperrten
//! Abschnitt enthaelt, wird markiert – auch innerhalb laengerer Woerter.

/// Fest eingebaute Sperrliste (klein geschrieben)
const SPERRLISTE: &[&str] = &[
    "fuck", "shit", "bitch", "bastard", "asshole", "cunt", "idiot", "moron",
];

/// Prueft ob eine Nachricht gesperrte Inhalte enthaelt.
///
/// Gross-/Kleinschreibung wird ignoriert. Leere Nachrichten sind erlaubt.
pub fn ist_verboten(nachricht: &str) -> bool {
    if nachricht.is_empty() {
        return false;
    }
    let klein = nachricht.to_lowercase();
    SPERRLISTE.iter().any(|wort| klein.contains(wort))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leere_nachricht_ist_erlaubt() {
        assert!(!ist_verboten(""));
    }

    #[test]
    fn harmlose_nachricht_ist_erlaubt() {
        assert!(!ist_verboten("Guten Morgen zusammen"));
        assert!(!ist_verboten("classy"));
    }

    #[test]
    fn gesperrtes_wort_wird_erkannt() {
        assert!(ist_verboten("you fucking idiot"));
    }

    #[test]
    fn gross_kleinschreibung_egal() {
        assert!(ist_verboten("SHIT happens"));
        assert!(ist_verboten("What an IdIoT"));
    }

    #[test]
    fn teilstring_in_laengerem_wort_wird_erkannt() {
        // Gewollt grob: keine Wortgrenzen
        assert!(ist_verboten("idiotically"));
        assert!(ist_verboten("Scunthorpe"));
    }
}
