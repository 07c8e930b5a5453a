//! tribune-moderation – Wer darf sprechen, und was darf gesagt werden
//!
//! - [`filter`]: Inhaltsfilter (Sperrliste, Teilstring-Suche)
//! - [`router`]: Klassifiziert eine Anfrage in genau eine [`Disposition`]
//! - [`warteschlange`]: Rednerliste (aktueller Sprecher + FIFO-Warteschlange)
//! - [`Moderator`]: verbindet alle drei zu einer [`Entscheidung`] pro Anfrage
//!
//! [`Entscheidung`]: tribune_core::Entscheidung

pub mod error;
pub mod filter;
pub mod moderator;
pub mod router;
pub mod warteschlange;

pub use error::{ModerationError, ModerationResult};
pub use filter::ist_verboten;
pub use moderator::Moderator;
pub use router::{klassifizieren, Disposition};
pub use warteschlange::{Rednerliste, Schnappschuss, StandBeobachter};
