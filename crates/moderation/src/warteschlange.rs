//! Rednerliste – Wer hat das Wort, wer wartet
//!
//! Zustand:
//! - aktueller Sprecher (hoechstens einer)
//! - FIFO-Warteschlange ohne Duplikate, ohne den aktuellen Sprecher
//!
//! Der Zustand wird ausschliesslich ueber [`Rednerliste::wortmeldung`] und
//! [`Rednerliste::wortende`] veraendert. Beide laufen unter demselben Mutex,
//! sodass Lesen-dann-Schreiben nie verschraenkt wird. Ein optionaler
//! [`StandBeobachter`] erhaelt jeden neuen Stand noch unter dem Mutex, in
//! derselben Reihenfolge wie die Aenderungen.
//!
//! Ein Sprecher, der nie `endSpeak` sendet, behaelt das Wort unbegrenzt.

use std::collections::VecDeque;
use std::fmt;

use parking_lot::Mutex;
use serde::Serialize;
use tribune_core::{Entscheidung, TeilnehmerId};

/// Momentaufnahme der Rednerliste (nur lesend)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schnappschuss {
    pub sprecher: Option<TeilnehmerId>,
    pub wartend: Vec<TeilnehmerId>,
}

/// Wird nach jeder Wortmeldung und jedem Sprecherwechsel aufgerufen
pub type StandBeobachter = Box<dyn Fn(&Schnappschuss) + Send + Sync>;

#[derive(Debug, Default)]
struct RednerlisteInner {
    sprecher: Option<TeilnehmerId>,
    wartend: VecDeque<TeilnehmerId>,
}

impl RednerlisteInner {
    fn wartend_kopie(&self) -> Vec<TeilnehmerId> {
        self.wartend.iter().cloned().collect()
    }

    fn schnappschuss(&self) -> Schnappschuss {
        Schnappschuss {
            sprecher: self.sprecher.clone(),
            wartend: self.wartend_kopie(),
        }
    }

    fn ist_bekannt(&self, id: &TeilnehmerId) -> bool {
        self.sprecher.as_ref() == Some(id) || self.wartend.contains(id)
    }

    /// Gibt das Wort an den Kopf der Warteschlange weiter (oder niemanden)
    fn weitergeben(&mut self) -> Entscheidung {
        self.sprecher = self.wartend.pop_front();
        Entscheidung::Grant {
            who: self.sprecher.clone(),
            waiting: self.wartend_kopie(),
        }
    }
}

/// Prozessweite Rednerliste
#[derive(Default)]
pub struct Rednerliste {
    inner: Mutex<RednerlisteInner>,
    beobachter: Option<StandBeobachter>,
}

impl fmt::Debug for Rednerliste {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rednerliste")
            .field("inner", &self.inner)
            .field("beobachter", &self.beobachter.is_some())
            .finish()
    }
}

impl Rednerliste {
    pub fn neu() -> Self {
        Self::default()
    }

    /// Rednerliste, die jeden neuen Stand an `beobachter` meldet
    pub fn mit_beobachter<F>(beobachter: F) -> Self
    where
        F: Fn(&Schnappschuss) + Send + Sync + 'static,
    {
        Self {
            inner: Mutex::default(),
            beobachter: Some(Box::new(beobachter)),
        }
    }

    /// Muss mit gehaltenem Lock aufgerufen werden
    fn melden(&self, inner: &RednerlisteInner) {
        if let Some(beobachter) = &self.beobachter {
            beobachter(&inner.schnappschuss());
        }
    }

    /// Wortmeldung (`wantToSpeak`)
    ///
    /// Haengt `von` hinten an, sofern noch nicht sprechend oder wartend. Ist
    /// niemand am Wort, erhaelt der Kopf der Warteschlange sofort das Wort
    /// ([`Entscheidung::Grant`]); sonst bekommt der Anfrager den aktuellen
    /// Stand ([`Entscheidung::Queued`]).
    pub fn wortmeldung(&self, von: TeilnehmerId) -> Entscheidung {
        let mut inner = self.inner.lock();

        if !inner.ist_bekannt(&von) {
            inner.wartend.push_back(von.clone());
        }

        if inner.sprecher.is_none() && !inner.wartend.is_empty() {
            let entscheidung = inner.weitergeben();
            tracing::info!(sprecher = ?inner.sprecher, "Rederecht vergeben");
            self.melden(&inner);
            return entscheidung;
        }

        tracing::debug!(
            von = %von,
            wartend = inner.wartend.len(),
            "Wortmeldung eingereiht"
        );
        self.melden(&inner);
        Entscheidung::Queued {
            to: von,
            who: inner.sprecher.clone(),
            waiting: inner.wartend_kopie(),
        }
    }

    /// Wortende (`endSpeak`)
    ///
    /// Nur der aktuelle Sprecher darf das Wort abgeben; alle anderen werden
    /// ignoriert ohne den Zustand anzufassen.
    pub fn wortende(&self, von: Option<&TeilnehmerId>) -> Entscheidung {
        let mut inner = self.inner.lock();

        let ist_sprecher = matches!((von, inner.sprecher.as_ref()), (Some(v), Some(s)) if v == s);
        if !ist_sprecher {
            tracing::debug!(von = ?von, "Wortende von Nicht-Sprecher ignoriert");
            return Entscheidung::Ignored {
                from: von.map(|v| v.to_string()),
            };
        }

        let entscheidung = inner.weitergeben();
        tracing::info!(sprecher = ?inner.sprecher, "Rederecht weitergegeben");
        self.melden(&inner);
        entscheidung
    }

    /// Liest den aktuellen Zustand ohne ihn zu veraendern
    pub fn schnappschuss(&self) -> Schnappschuss {
        self.inner.lock().schnappschuss()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn id(s: &str) -> TeilnehmerId {
        TeilnehmerId::neu(s).unwrap()
    }

    fn grant(who: Option<&str>, waiting: &[&str]) -> Entscheidung {
        Entscheidung::Grant {
            who: who.map(id),
            waiting: waiting.iter().map(|w| id(w)).collect(),
        }
    }

    /// Prueft die Invarianten: kein Duplikat, Sprecher nie wartend,
    /// kein leerer Sprecher bei nicht-leerer Warteschlange
    fn invarianten_pruefen(s: &Schnappschuss) {
        let mut gesehen = std::collections::HashSet::new();
        for w in &s.wartend {
            assert!(gesehen.insert(w.clone()), "Duplikat in Warteschlange: {w}");
        }
        if let Some(sprecher) = &s.sprecher {
            assert!(!s.wartend.contains(sprecher));
        } else {
            assert!(s.wartend.is_empty());
        }
    }

    #[test]
    fn erste_wortmeldung_erhaelt_das_wort() {
        let liste = Rednerliste::neu();
        assert_eq!(liste.wortmeldung(id("alice")), grant(Some("alice"), &[]));
        assert_eq!(liste.schnappschuss().sprecher, Some(id("alice")));
    }

    #[test]
    fn zweite_wortmeldung_wird_eingereiht() {
        let liste = Rednerliste::neu();
        liste.wortmeldung(id("alice"));

        let e = liste.wortmeldung(id("bob"));
        assert_eq!(
            e,
            Entscheidung::Queued {
                to: id("bob"),
                who: Some(id("alice")),
                waiting: vec![id("bob")],
            }
        );
    }

    #[test]
    fn wiederholte_wortmeldung_ist_idempotent() {
        let liste = Rednerliste::neu();
        liste.wortmeldung(id("alice"));
        liste.wortmeldung(id("bob"));
        let vorher = liste.schnappschuss();

        // Wartender und Sprecher melden sich erneut
        liste.wortmeldung(id("bob"));
        liste.wortmeldung(id("alice"));

        assert_eq!(liste.schnappschuss(), vorher);
    }

    #[test]
    fn sprecher_erhaelt_bei_erneuter_meldung_queued() {
        let liste = Rednerliste::neu();
        liste.wortmeldung(id("alice"));
        let e = liste.wortmeldung(id("alice"));
        assert_eq!(
            e,
            Entscheidung::Queued {
                to: id("alice"),
                who: Some(id("alice")),
                waiting: vec![],
            }
        );
    }

    #[test]
    fn fifo_reihenfolge_der_vergabe() {
        let liste = Rednerliste::neu();
        for name in ["a", "b", "c"] {
            liste.wortmeldung(id(name));
        }

        assert_eq!(liste.wortende(Some(&id("a"))), grant(Some("b"), &["c"]));
        assert_eq!(liste.wortende(Some(&id("b"))), grant(Some("c"), &[]));
        assert_eq!(liste.wortende(Some(&id("c"))), grant(None, &[]));
        assert_eq!(liste.schnappschuss(), Schnappschuss::default());
    }

    #[test]
    fn wortende_von_nicht_sprecher_wird_ignoriert() {
        let liste = Rednerliste::neu();
        liste.wortmeldung(id("alice"));
        liste.wortmeldung(id("bob"));
        let vorher = liste.schnappschuss();

        let e = liste.wortende(Some(&id("bob")));
        assert_eq!(
            e,
            Entscheidung::Ignored {
                from: Some("bob".into())
            }
        );
        assert_eq!(liste.schnappschuss(), vorher);

        assert_eq!(
            liste.wortende(None),
            Entscheidung::Ignored { from: None }
        );
        assert_eq!(liste.schnappschuss(), vorher);
    }

    #[test]
    fn wortende_ohne_sprecher_wird_ignoriert() {
        let liste = Rednerliste::neu();
        assert_eq!(
            liste.wortende(Some(&id("alice"))),
            Entscheidung::Ignored {
                from: Some("alice".into())
            }
        );
        assert_eq!(liste.schnappschuss(), Schnappschuss::default());
    }

    #[test]
    fn sprecher_uebergibt_an_wartenden() {
        let liste = Rednerliste::neu();
        liste.wortmeldung(id("alice"));
        liste.wortmeldung(id("bob"));
        assert_eq!(liste.wortende(Some(&id("alice"))), grant(Some("bob"), &[]));
    }

    #[test]
    fn nach_freigabe_erhaelt_neue_meldung_sofort_das_wort() {
        let liste = Rednerliste::neu();
        liste.wortmeldung(id("alice"));
        liste.wortende(Some(&id("alice")));
        assert_eq!(liste.wortmeldung(id("bob")), grant(Some("bob"), &[]));
    }

    #[test]
    fn parallele_wortmeldungen_halten_invarianten() {
        let liste = Arc::new(Rednerliste::neu());
        let threads: Vec<_> = (0..8)
            .map(|t| {
                let liste = Arc::clone(&liste);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        let name = format!("p{}", (t * 7 + i) % 20);
                        liste.wortmeldung(id(&name));
                        if i % 3 == 0 {
                            if let Some(s) = liste.schnappschuss().sprecher {
                                liste.wortende(Some(&s));
                            }
                        }
                        invarianten_pruefen(&liste.schnappschuss());
                    }
                })
            })
            .collect();

        for t in threads {
            t.join().unwrap();
        }
        invarianten_pruefen(&liste.schnappschuss());
    }

    #[test]
    fn beobachter_sieht_jeden_neuen_stand() {
        let gesehen = Arc::new(Mutex::new(Vec::new()));
        let liste = {
            let gesehen = Arc::clone(&gesehen);
            Rednerliste::mit_beobachter(move |stand| gesehen.lock().push(stand.clone()))
        };

        liste.wortmeldung(id("alice"));
        liste.wortmeldung(id("bob"));
        liste.wortende(Some(&id("bob")));
        liste.wortende(Some(&id("alice")));

        let gesehen = gesehen.lock();
        assert_eq!(gesehen.len(), 3, "ignoriertes Wortende meldet nichts");
        assert_eq!(gesehen[1].wartend, vec![id("bob")]);
        assert_eq!(gesehen[2].sprecher, Some(id("bob")));
    }

    #[test]
    fn letzter_gemeldeter_stand_entspricht_dem_endstand() {
        let letzter = Arc::new(Mutex::new(Schnappschuss::default()));
        let liste = {
            let letzter = Arc::clone(&letzter);
            Arc::new(Rednerliste::mit_beobachter(move |stand| {
                *letzter.lock() = stand.clone();
            }))
        };

        let threads: Vec<_> = (0..8)
            .map(|t| {
                let liste = Arc::clone(&liste);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        liste.wortmeldung(id(&format!("p{}", (t * 3 + i) % 10)));
                        if let Some(s) = liste.schnappschuss().sprecher {
                            liste.wortende(Some(&s));
                        }
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }

        assert_eq!(*letzter.lock(), liste.schnappschuss());
    }
}
