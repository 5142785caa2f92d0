//! Boundary protocol messages.
//!
//! These mirror the JSON bodies the control page posts: key events
//! with numeric modifier flags, window-normalized mouse coordinates,
//! toggle booleans, the animation dropdown selection, and the
//! free-text utterance. Transport framing lives outside the crate;
//! this module only decodes payloads and routes them into a session.

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::actuator::Actuator;
use crate::session::RemoteSession;

/// Dropdown element name prefix; the digit slot follows it.
pub const SLOT_SELECT_PREFIX: &str = "animSelector";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMessage {
    pub key_code: u32,
    /// Modifier flags arrive as 0/1 on the wire.
    pub has_shift: u8,
    /// Carried on the wire but unused by the session.
    #[serde(default)]
    pub has_ctrl: u8,
    pub has_alt: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseMessage {
    /// 0..1, left to right across the window.
    pub client_x: f32,
    /// 0..1, top to bottom.
    pub client_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseLookMessage {
    pub is_mouse_look_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutonomyMessage {
    /// Freeplay on means the robot's own behavior stack has control.
    pub is_freeplay_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSelectMessage {
    pub selected_index: usize,
    /// Element name of the posting dropdown, `animSelector<digit>`.
    pub item_name: String,
}

impl SlotSelectMessage {
    /// Digit slot parsed from the element name; `None` when the name
    /// does not carry the expected prefix and numeric suffix.
    pub fn slot(&self) -> Option<usize> {
        self.item_name
            .strip_prefix(SLOT_SELECT_PREFIX)?
            .parse()
            .ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtteranceMessage {
    pub text_entered: String,
}

/// One decoded boundary event, ready to route into a session.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    KeyDown(KeyMessage),
    KeyUp(KeyMessage),
    MouseMove(MouseMessage),
    SetMouseLook(MouseLookMessage),
    SetAutonomy(AutonomyMessage),
    SelectSlotAnimation(SlotSelectMessage),
    SetUtterance(UtteranceMessage),
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("unknown event kind '{0}'")]
    UnknownKind(String),
    #[error("invalid {kind} payload at '{path}': {source}")]
    Payload {
        kind: &'static str,
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ControlEvent {
    /// Decodes one boundary message. `kind` names the posting
    /// endpoint: `keydown`, `keyup`, `mousemove`,
    /// `setMouseLookEnabled`, `setFreeplayEnabled`, `dropDownSelect`,
    /// or `sayText`.
    pub fn parse(kind: &str, payload: &str) -> Result<Self, EventError> {
        match kind {
            "keydown" => Ok(Self::KeyDown(parse_payload("keydown", payload)?)),
            "keyup" => Ok(Self::KeyUp(parse_payload("keyup", payload)?)),
            "mousemove" => Ok(Self::MouseMove(parse_payload("mousemove", payload)?)),
            "setMouseLookEnabled" => Ok(Self::SetMouseLook(parse_payload(
                "setMouseLookEnabled",
                payload,
            )?)),
            "setFreeplayEnabled" => Ok(Self::SetAutonomy(parse_payload(
                "setFreeplayEnabled",
                payload,
            )?)),
            "dropDownSelect" => Ok(Self::SelectSlotAnimation(parse_payload(
                "dropDownSelect",
                payload,
            )?)),
            "sayText" => Ok(Self::SetUtterance(parse_payload("sayText", payload)?)),
            other => Err(EventError::UnknownKind(other.to_string())),
        }
    }

    /// Routes the event into `session`. Boundary-level validation
    /// failures (a malformed dropdown name) are dropped with a
    /// warning; they never become session errors.
    pub fn apply<A: Actuator>(self, session: &mut RemoteSession<A>) {
        match self {
            Self::KeyDown(msg) => {
                session.handle_key(msg.key_code, msg.has_shift != 0, msg.has_alt != 0, true)
            }
            Self::KeyUp(msg) => {
                session.handle_key(msg.key_code, msg.has_shift != 0, msg.has_alt != 0, false)
            }
            Self::MouseMove(msg) => session.handle_mouse(msg.client_x, msg.client_y),
            Self::SetMouseLook(msg) => session.set_mouse_look_enabled(msg.is_mouse_look_enabled),
            Self::SetAutonomy(msg) => session.set_autonomy_enabled(msg.is_freeplay_enabled),
            Self::SelectSlotAnimation(msg) => match msg.slot() {
                Some(slot) => session.set_slot_binding(slot, msg.selected_index),
                None => warn!(item = %msg.item_name, "slot_select_ignored"),
            },
            Self::SetUtterance(msg) => session.set_utterance(msg.text_entered),
        }
    }
}

fn parse_payload<T>(kind: &'static str, payload: &str) -> Result<T, EventError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut deserializer = serde_json::Deserializer::from_str(payload);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|error| {
        let path = error.path().to_string();
        EventError::Payload {
            kind,
            path,
            source: error.into_inner(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_decodes_numeric_modifier_flags() {
        let event = ControlEvent::parse(
            "keydown",
            r#"{"keyCode":87,"hasShift":1,"hasCtrl":0,"hasAlt":0}"#,
        )
        .expect("keydown");
        assert_eq!(
            event,
            ControlEvent::KeyDown(KeyMessage {
                key_code: 87,
                has_shift: 1,
                has_ctrl: 0,
                has_alt: 0,
            })
        );
    }

    #[test]
    fn mouse_event_tolerates_extra_cursor_fields() {
        let event = ControlEvent::parse(
            "mousemove",
            r#"{"clientX":0.25,"clientY":0.75,"isButtonDown":0,"deltaX":0.01,"deltaY":0.0}"#,
        )
        .expect("mousemove");
        let ControlEvent::MouseMove(msg) = event else {
            panic!("expected mouse move");
        };
        assert!((msg.client_x - 0.25).abs() < 0.0001);
        assert!((msg.client_y - 0.75).abs() < 0.0001);
    }

    #[test]
    fn dropdown_slot_parses_from_the_element_name() {
        let msg = SlotSelectMessage {
            selected_index: 4,
            item_name: "animSelector7".to_string(),
        };
        assert_eq!(msg.slot(), Some(7));

        let bad = SlotSelectMessage {
            selected_index: 4,
            item_name: "somethingElse7".to_string(),
        };
        assert_eq!(bad.slot(), None);

        let empty = SlotSelectMessage {
            selected_index: 4,
            item_name: "animSelector".to_string(),
        };
        assert_eq!(empty.slot(), None);
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let error = ControlEvent::parse("shutdown", "{}").expect_err("unknown kind");
        assert!(matches!(error, EventError::UnknownKind(kind) if kind == "shutdown"));
    }

    #[test]
    fn malformed_payload_reports_the_failing_field() {
        let error = ControlEvent::parse("keyup", r#"{"keyCode":"W","hasShift":0,"hasAlt":0}"#)
            .expect_err("bad payload");
        let message = error.to_string();
        assert!(message.contains("keyup"), "{message}");
        assert!(message.contains("keyCode"), "{message}");
    }

    #[test]
    fn toggle_payloads_decode_booleans() {
        assert_eq!(
            ControlEvent::parse("setMouseLookEnabled", r#"{"isMouseLookEnabled":true}"#)
                .expect("toggle"),
            ControlEvent::SetMouseLook(MouseLookMessage {
                is_mouse_look_enabled: true
            })
        );
        assert_eq!(
            ControlEvent::parse("setFreeplayEnabled", r#"{"isFreeplayEnabled":false}"#)
                .expect("toggle"),
            ControlEvent::SetAutonomy(AutonomyMessage {
                is_freeplay_enabled: false
            })
        );
    }

    #[test]
    fn say_text_replaces_the_utterance_verbatim() {
        let event = ControlEvent::parse("sayText", r#"{"textEntered":""}"#).expect("sayText");
        assert_eq!(
            event,
            ControlEvent::SetUtterance(UtteranceMessage {
                text_entered: String::new()
            })
        );
    }
}
