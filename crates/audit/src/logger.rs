//! AuditLogger – Fire-and-forget Protokollierung von Entscheidungen
//!
//! Alle Eintraege laufen ueber eine begrenzte mpsc-Queue in einen einzelnen
//! Schreib-Task. Damit sind Schreibzugriffe serialisiert und der Antwortpfad
//! wartet nie auf die Festplatte. Ist die Queue voll, wird der Eintrag
//! verworfen und gezaehlt.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, oneshot};
use tribune_core::{Anfrage, AuditEintrag, Entscheidung};

use crate::error::AuditResult;
use crate::verzeichnis::{dateiname, verzeichnis_aufloesen};

/// Standardgroesse der Schreib-Queue
pub const STANDARD_QUEUE_GROESSE: usize = 1024;

/// Konfiguration des Audit-Logs
#[derive(Debug, Clone)]
pub struct AuditKonfig {
    pub primaer: PathBuf,
    pub fallback: PathBuf,
    pub queue_groesse: usize,
}

impl Default for AuditKonfig {
    fn default() -> Self {
        Self {
            primaer: PathBuf::from("logs"),
            fallback: std::env::temp_dir().join("tribune-logs"),
            queue_groesse: STANDARD_QUEUE_GROESSE,
        }
    }
}

enum SchreibAuftrag {
    Eintrag { datum: NaiveDate, eintrag: AuditEintrag },
    /// Antwortet sobald alle vorherigen Eintraege geschrieben sind
    Leeren(oneshot::Sender<()>),
}

/// Handle auf das Audit-Log
///
/// Wird einmal beim Start erstellt und per `Arc` geteilt. Ohne beschreibbares
/// Verzeichnis ist der Logger deaktiviert und verwirft alle Eintraege still.
pub struct AuditLogger {
    tx: Option<mpsc::Sender<SchreibAuftrag>>,
    verzeichnis: Option<PathBuf>,
    verworfen: Arc<AtomicU64>,
}

impl AuditLogger {
    /// Loest das Verzeichnis auf und startet den Schreib-Task.
    ///
    /// Muss innerhalb einer tokio-Runtime aufgerufen werden.
    pub fn initialisieren(konfig: &AuditKonfig) -> Self {
        match verzeichnis_aufloesen(&konfig.primaer, &konfig.fallback) {
            Some(verzeichnis) => Self::starten(verzeichnis, konfig.queue_groesse),
            None => Self::deaktiviert(),
        }
    }

    /// Logger ohne Ziel; alle Eintraege werden verworfen
    pub fn deaktiviert() -> Self {
        Self {
            tx: None,
            verzeichnis: None,
            verworfen: Arc::new(AtomicU64::new(0)),
        }
    }

    fn starten(verzeichnis: PathBuf, queue_groesse: usize) -> Self {
        let (tx, rx) = mpsc::channel(queue_groesse.max(1));
        tokio::spawn(schreib_task(verzeichnis.clone(), rx));
        tracing::info!(pfad = %verzeichnis.display(), "Audit-Log aktiv");
        Self {
            tx: Some(tx),
            verzeichnis: Some(verzeichnis),
            verworfen: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn ist_aktiv(&self) -> bool {
        self.tx.is_some()
    }

    pub fn verzeichnis(&self) -> Option<&Path> {
        self.verzeichnis.as_deref()
    }

    /// Anzahl verworfener Eintraege (volle Queue oder beendeter Task)
    pub fn verworfen(&self) -> u64 {
        self.verworfen.load(Ordering::Relaxed)
    }

    /// Haengt ein `{request, decision}`-Paar an. Blockiert nie.
    ///
    /// Das Datum fuer die Tagesdatei wird hier festgelegt, nicht im Task.
    pub fn anhaengen(&self, anfrage: Anfrage, entscheidung: Entscheidung) {
        let Some(tx) = &self.tx else {
            return;
        };

        let auftrag = SchreibAuftrag::Eintrag {
            datum: Local::now().date_naive(),
            eintrag: AuditEintrag::neu(anfrage, entscheidung),
        };

        match tx.try_send(auftrag) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                self.verworfen.fetch_add(1, Ordering::Relaxed);
                tracing::warn!("Audit-Queue voll – Eintrag verworfen");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.verworfen.fetch_add(1, Ordering::Relaxed);
                tracing::warn!("Audit-Schreib-Task beendet – Eintrag verworfen");
            }
        }
    }

    /// Wartet bis alle bisher angehaengten Eintraege geschrieben sind
    pub async fn leeren(&self) {
        let Some(tx) = &self.tx else {
            return;
        };
        let (antwort_tx, antwort_rx) = oneshot::channel();
        if tx.send(SchreibAuftrag::Leeren(antwort_tx)).await.is_ok() {
            let _ = antwort_rx.await;
        }
    }
}

async fn schreib_task(verzeichnis: PathBuf, mut rx: mpsc::Receiver<SchreibAuftrag>) {
    while let Some(auftrag) = rx.recv().await {
        match auftrag {
            SchreibAuftrag::Eintrag { datum, eintrag } => {
                if let Err(e) = zeile_schreiben(&verzeichnis, datum, &eintrag).await {
                    tracing::warn!(
                        pfad = %verzeichnis.display(),
                        fehler = %e,
                        "Audit-Eintrag konnte nicht geschrieben werden"
                    );
                }
            }
            SchreibAuftrag::Leeren(antwort) => {
                let _ = antwort.send(());
            }
        }
    }
    tracing::debug!("Audit-Schreib-Task beendet");
}

async fn zeile_schreiben(
    verzeichnis: &Path,
    datum: NaiveDate,
    eintrag: &AuditEintrag,
) -> AuditResult<()> {
    let zeile = eintrag.als_json_zeile()?;
    let pfad = verzeichnis.join(dateiname(datum));

    let mut datei = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&pfad)
        .await?;
    datei.write_all(zeile.as_bytes()).await?;
    datei.flush().await?;
    Ok(())
}
