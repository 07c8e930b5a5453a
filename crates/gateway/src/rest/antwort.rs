//! Antwort-Erzeugung – die einzige Stelle, an der eine Entscheidung zu einer
//! HTTP-Antwort wird
//!
//! | Entscheidung | Status | Body |
//! |---|---|---|
//! | Grant | 200 | `{"from":"moderator","to":"all","command":"speak","who","waiting"}` |
//! | Queued | 200 | `{"from":"moderator","to":<anfrager>,"command":"queued","who","waiting"}` |
//! | Ignored | 204 | – |
//! | Forbidden | 403 | `{"command":"forbidden","to":<from>,"from":"system","message":"Forbidden message"}` |
//! | Redirect | 200 | `{"command":"redirect","to":"simulator","message"}` |
//! | Broadcast | 200 | `{"from","to":"all","message","command"}` |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Map, Value};
use tribune_core::{Entscheidung, TeilnehmerId};

pub const ABSENDER_MODERATOR: &str = "moderator";
pub const ABSENDER_SYSTEM: &str = "system";
pub const EMPFAENGER_ALLE: &str = "all";
pub const EMPFAENGER_SIMULATOR: &str = "simulator";
pub const NIEMAND: &str = "none";
pub const TEXT_VERBOTEN: &str = "Forbidden message";

/// Baut Status und JSON-Body zu einer Entscheidung
pub fn antwort_aus_entscheidung(entscheidung: &Entscheidung) -> Response {
    match entscheidung {
        Entscheidung::Grant { who, waiting } => (
            StatusCode::OK,
            Json(json!({
                "from": ABSENDER_MODERATOR,
                "to": EMPFAENGER_ALLE,
                "command": "speak",
                "who": sprecher_name(who.as_ref()),
                "waiting": waiting,
            })),
        )
            .into_response(),
        Entscheidung::Queued { to, who, waiting } => (
            StatusCode::OK,
            Json(json!({
                "from": ABSENDER_MODERATOR,
                "to": to,
                "command": "queued",
                "who": sprecher_name(who.as_ref()),
                "waiting": waiting,
            })),
        )
            .into_response(),
        Entscheidung::Ignored { .. } => StatusCode::NO_CONTENT.into_response(),
        Entscheidung::Forbidden { to } => {
            let mut body = Map::new();
            body.insert("command".into(), "forbidden".into());
            optional_einfuegen(&mut body, "to", to.as_deref());
            body.insert("from".into(), ABSENDER_SYSTEM.into());
            body.insert("message".into(), TEXT_VERBOTEN.into());
            (StatusCode::FORBIDDEN, Json(Value::Object(body))).into_response()
        }
        Entscheidung::Redirect { message } => (
            StatusCode::OK,
            Json(json!({
                "command": "redirect",
                "to": EMPFAENGER_SIMULATOR,
                "message": message,
            })),
        )
            .into_response(),
        Entscheidung::Broadcast {
            from,
            message,
            command,
        } => {
            let mut body = Map::new();
            optional_einfuegen(&mut body, "from", from.as_deref());
            body.insert("to".into(), EMPFAENGER_ALLE.into());
            optional_einfuegen(&mut body, "message", message.as_deref());
            optional_einfuegen(&mut body, "command", command.as_deref());
            (StatusCode::OK, Json(Value::Object(body))).into_response()
        }
    }
}

fn sprecher_name(who: Option<&TeilnehmerId>) -> &str {
    who.map(TeilnehmerId::as_str).unwrap_or(NIEMAND)
}

/// Fehlende Felder werden weggelassen statt als `null` gesendet
fn optional_einfuegen(body: &mut Map<String, Value>, schluessel: &str, wert: Option<&str>) {
    if let Some(wert) = wert {
        body.insert(schluessel.into(), wert.into());
    }
}
