//! Aufloesung des Audit-Verzeichnisses
//!
//! Wird einmal pro Prozess ausgefuehrt. Schlagen beide Kandidaten fehl, bleibt
//! das Audit-Log fuer die Lebensdauer des Prozesses deaktiviert.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::AuditResult;

/// Name der Probe-Datei fuer den Schreibtest
const PROBE_DATEI: &str = ".tribune-schreibtest";

/// Dateiname der Tagesdatei, z.B. `tribune-2024-05-17.jsonl`
pub fn dateiname(datum: NaiveDate) -> String {
    format!("tribune-{}.jsonl", datum.format("%Y-%m-%d"))
}

/// Legt das Verzeichnis an und prueft ob es beschreibbar ist
fn pruefen(pfad: &Path) -> AuditResult<()> {
    std::fs::create_dir_all(pfad)?;
    let probe = pfad.join(PROBE_DATEI);
    OpenOptions::new().create(true).append(true).open(&probe)?;
    std::fs::remove_file(&probe)?;
    Ok(())
}

/// Versucht zuerst `primaer`, dann `fallback`.
///
/// Gibt `None` zurueck wenn keines der beiden beschreibbar ist.
pub fn verzeichnis_aufloesen(primaer: &Path, fallback: &Path) -> Option<PathBuf> {
    match pruefen(primaer) {
        Ok(()) => return Some(primaer.to_path_buf()),
        Err(e) => {
            tracing::warn!(
                pfad = %primaer.display(),
                fehler = %e,
                "Audit-Verzeichnis nicht beschreibbar, versuche Fallback"
            );
        }
    }

    match pruefen(fallback) {
        Ok(()) => {
            tracing::info!(pfad = %fallback.display(), "Audit-Fallback-Verzeichnis aktiv");
            Some(fallback.to_path_buf())
        }
        Err(e) => {
            tracing::error!(
                primaer = %primaer.display(),
                fallback = %fallback.display(),
                fehler = %e,
                "Kein Audit-Verzeichnis beschreibbar, Audit-Log deaktiviert"
            );
            None
        }
    }
}
