//! Moderator – eine Anfrage rein, genau eine Entscheidung raus

use tribune_core::{Anfrage, Entscheidung};

use crate::error::{ModerationError, ModerationResult};
use crate::router::{klassifizieren, Disposition};
use crate::warteschlange::{Rednerliste, Schnappschuss};

/// Verbindet Router und Rednerliste
///
/// Der Moderator besitzt die einzige Rednerliste des Prozesses. Er wird einmal
/// beim Start erstellt und per `Arc` an das Gateway gereicht.
#[derive(Debug, Default)]
pub struct Moderator {
    rednerliste: Rednerliste,
}

impl Moderator {
    pub fn neu() -> Self {
        Self::default()
    }

    /// Moderator, dessen Rednerliste jeden neuen Stand meldet
    pub fn mit_beobachter<F>(beobachter: F) -> Self
    where
        F: Fn(&Schnappschuss) + Send + Sync + 'static,
    {
        Self {
            rednerliste: Rednerliste::mit_beobachter(beobachter),
        }
    }

    /// Klassifiziert die Anfrage und fuehrt ggf. die Operation auf der
    /// Rednerliste aus.
    ///
    /// Fehler: `wantToSpeak` ohne (nicht-leeres) `from`.
    pub fn entscheiden(&self, anfrage: &Anfrage) -> ModerationResult<Entscheidung> {
        let entscheidung = match klassifizieren(anfrage) {
            Disposition::SpeakRequest => {
                let von = anfrage.absender().ok_or(ModerationError::AbsenderFehlt)?;
                self.rednerliste.wortmeldung(von)
            }
            Disposition::EndSpeak => self.rednerliste.wortende(anfrage.absender().as_ref()),
            Disposition::Forbidden => {
                tracing::info!(from = ?anfrage.from, "Nachricht mit gesperrtem Inhalt abgelehnt");
                Entscheidung::Forbidden {
                    to: anfrage.from.clone(),
                }
            }
            Disposition::Redirect(message) => Entscheidung::Redirect { message },
            Disposition::Broadcast => Entscheidung::Broadcast {
                from: anfrage.from.clone(),
                message: anfrage.message.clone(),
                command: anfrage.command.clone(),
            },
        };

        tracing::debug!(
            from = ?anfrage.from,
            disposition = entscheidung.art(),
            "Anfrage moderiert"
        );
        Ok(entscheidung)
    }

    pub fn schnappschuss(&self) -> Schnappschuss {
        self.rednerliste.schnappschuss()
    }
}
