//! Teilnehmer-Kennungen
//!
//! Teilnehmer (Agenten oder Benutzer) werden ueber ein frei gewaehltes,
//! nicht-leeres Token identifiziert. Es gibt kein Register bekannter
//! Teilnehmer; Gleichheit ist exakter String-Vergleich.

use serde::{Deserialize, Serialize};

use crate::error::TribuneError;

/// Kennung eines Teilnehmers (`from` / `who` auf dem Draht)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeilnehmerId(String);

impl TeilnehmerId {
    /// Erstellt eine Kennung. Gibt `None` zurueck wenn der Wert leer ist.
    pub fn neu(roh: impl Into<String>) -> Option<Self> {
        let roh = roh.into();
        if roh.is_empty() {
            None
        } else {
            Some(Self(roh))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeilnehmerId {
    type Error = TribuneError;

    fn try_from(roh: String) -> Result<Self, Self::Error> {
        Self::neu(roh).ok_or(TribuneError::LeereTeilnehmerId)
    }
}

impl From<TeilnehmerId> for String {
    fn from(id: TeilnehmerId) -> Self {
        id.0
    }
}

impl AsRef<str> for TeilnehmerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeilnehmerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leere_kennung_wird_abgelehnt() {
        assert!(TeilnehmerId::neu("").is_none());
        assert!(TeilnehmerId::try_from(String::new()).is_err());
    }

    #[test]
    fn gleichheit_ist_exakter_vergleich() {
        let a = TeilnehmerId::neu("alice").unwrap();
        assert_eq!(a, TeilnehmerId::neu("alice").unwrap());
        assert_ne!(a, TeilnehmerId::neu("Alice").unwrap());
        assert_ne!(a, TeilnehmerId::neu("alice ").unwrap());
    }

    #[test]
    fn serialisiert_als_einfacher_string() {
        let id = TeilnehmerId::neu("bob").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"bob\"");
        assert!(serde_json::from_str::<TeilnehmerId>("\"\"").is_err());
    }
}
