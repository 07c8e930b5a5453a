//! Fehlertypen fuer das Moderations-Crate

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModerationError {
    #[error("Missing 'from'")]
    AbsenderFehlt,
}

pub type ModerationResult<T> = Result<T, ModerationError>;
