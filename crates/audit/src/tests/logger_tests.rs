//! Unit-Tests fuer den AuditLogger

use chrono::Local;
use tribune_core::{Anfrage, Entscheidung, TeilnehmerId};

use crate::logger::{AuditKonfig, AuditLogger};
use crate::verzeichnis::dateiname;

fn konfig(dir: &tempfile::TempDir, queue_groesse: usize) -> AuditKonfig {
    AuditKonfig {
        primaer: dir.path().join("audit"),
        fallback: dir.path().join("fallback"),
        queue_groesse,
    }
}

fn anfrage(from: &str, command: &str) -> Anfrage {
    Anfrage {
        from: Some(from.into()),
        command: Some(command.into()),
        ..Default::default()
    }
}

fn grant(who: &str) -> Entscheidung {
    Entscheidung::Grant {
        who: TeilnehmerId::neu(who),
        waiting: vec![],
    }
}

fn zeilen_lesen(logger: &AuditLogger) -> Vec<serde_json::Value> {
    let pfad = logger
        .verzeichnis()
        .expect("Logger ist aktiv")
        .join(dateiname(Local::now().date_naive()));
    let inhalt = std::fs::read_to_string(pfad).expect("Tagesdatei fehlt");
    inhalt
        .lines()
        .map(|z| serde_json::from_str(z).expect("Zeile ist kein JSON"))
        .collect()
}

#[tokio::test]
async fn test_eintrag_wird_als_json_zeile_geschrieben() {
    let dir = tempfile::tempdir().unwrap();
    let logger = AuditLogger::initialisieren(&konfig(&dir, 16));
    assert!(logger.ist_aktiv());

    logger.anhaengen(anfrage("alice", "wantToSpeak"), grant("alice"));
    logger.leeren().await;

    let zeilen = zeilen_lesen(&logger);
    assert_eq!(zeilen.len(), 1);
    assert_eq!(zeilen[0]["request"]["from"], "alice");
    assert_eq!(zeilen[0]["request"]["command"], "wantToSpeak");
    assert_eq!(zeilen[0]["decision"]["disposition"], "grant");
    assert_eq!(zeilen[0]["decision"]["who"], "alice");
}

#[tokio::test]
async fn test_reihenfolge_bleibt_erhalten() {
    let dir = tempfile::tempdir().unwrap();
    let logger = AuditLogger::initialisieren(&konfig(&dir, 64));

    for name in ["a", "b", "c", "d"] {
        logger.anhaengen(anfrage(name, "wantToSpeak"), grant(name));
    }
    logger.leeren().await;

    let namen: Vec<_> = zeilen_lesen(&logger)
        .iter()
        .map(|z| z["request"]["from"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(namen, ["a", "b", "c", "d"]);
}

#[tokio::test]
async fn test_datei_wird_nur_angehaengt() {
    let dir = tempfile::tempdir().unwrap();
    let k = konfig(&dir, 16);

    let erster = AuditLogger::initialisieren(&k);
    erster.anhaengen(anfrage("alice", "wantToSpeak"), grant("alice"));
    erster.leeren().await;

    // Zweiter Prozess-Start auf demselben Verzeichnis
    let zweiter = AuditLogger::initialisieren(&k);
    zweiter.anhaengen(
        anfrage("bob", "endSpeak"),
        Entscheidung::Ignored {
            from: Some("bob".into()),
        },
    );
    zweiter.leeren().await;

    let zeilen = zeilen_lesen(&zweiter);
    assert_eq!(zeilen.len(), 2);
    assert_eq!(zeilen[1]["decision"]["disposition"], "ignored");
}

#[tokio::test]
async fn test_fallback_verzeichnis_wird_genutzt() {
    let dir = tempfile::tempdir().unwrap();
    let mut k = konfig(&dir, 16);
    std::fs::write(&k.primaer, b"blockiert").unwrap();
    k.fallback = dir.path().join("ersatz");

    let logger = AuditLogger::initialisieren(&k);
    assert_eq!(logger.verzeichnis(), Some(k.fallback.as_path()));

    logger.anhaengen(anfrage("alice", "x"), grant("alice"));
    logger.leeren().await;
    assert_eq!(zeilen_lesen(&logger).len(), 1);
}

#[tokio::test]
async fn test_deaktivierter_logger_verwirft_still() {
    let logger = AuditLogger::deaktiviert();
    assert!(!logger.ist_aktiv());
    assert!(logger.verzeichnis().is_none());

    logger.anhaengen(anfrage("alice", "x"), grant("alice"));
    logger.leeren().await;
    assert_eq!(logger.verworfen(), 0);
}

#[tokio::test]
async fn test_volle_queue_verwirft_und_zaehlt() {
    let dir = tempfile::tempdir().unwrap();
    // current_thread-Runtime: der Schreib-Task laeuft erst beim naechsten await
    let logger = AuditLogger::initialisieren(&konfig(&dir, 1));

    logger.anhaengen(anfrage("a", "x"), grant("a"));
    logger.anhaengen(anfrage("b", "x"), grant("b"));
    logger.anhaengen(anfrage("c", "x"), grant("c"));
    assert_eq!(logger.verworfen(), 2);

    logger.leeren().await;
    let zeilen = zeilen_lesen(&logger);
    assert_eq!(zeilen.len(), 1);
    assert_eq!(zeilen[0]["request"]["from"], "a");
}
