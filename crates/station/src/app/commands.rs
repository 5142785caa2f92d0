use teleop::{ControlEvent, EventError};
use thiserror::Error;

/// One line of console input, parsed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StationCommand {
    Event(ControlEvent),
    ShowQueue,
    Quit,
}

#[derive(Debug, Error)]
pub(crate) enum CommandError {
    #[error(transparent)]
    Event(#[from] EventError),
}

/// Parses `<kind> <json>` lines plus the bare `queue` and `quit`
/// console verbs. Events with no body default to an empty object so
/// payload-free kinds still round-trip.
pub(crate) fn parse_command_line(line: &str) -> Result<StationCommand, CommandError> {
    let line = line.trim();
    match line {
        "queue" => return Ok(StationCommand::ShowQueue),
        "quit" | "exit" => return Ok(StationCommand::Quit),
        _ => {}
    }

    let (kind, payload) = match line.split_once(' ') {
        Some((kind, payload)) => (kind, payload.trim()),
        None => (line, "{}"),
    };
    Ok(StationCommand::Event(ControlEvent::parse(kind, payload)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use teleop::KeyMessage;

    #[test]
    fn bare_verbs_parse_before_event_kinds() {
        assert_eq!(
            parse_command_line("queue").expect("queue"),
            StationCommand::ShowQueue
        );
        assert_eq!(
            parse_command_line("quit").expect("quit"),
            StationCommand::Quit
        );
        assert_eq!(
            parse_command_line("  exit  ").expect("exit"),
            StationCommand::Quit
        );
    }

    #[test]
    fn event_lines_carry_their_json_body() {
        let command = parse_command_line(r#"keydown {"keyCode":87,"hasShift":0,"hasAlt":0}"#)
            .expect("keydown");
        assert_eq!(
            command,
            StationCommand::Event(ControlEvent::KeyDown(KeyMessage {
                key_code: 87,
                has_shift: 0,
                has_ctrl: 0,
                has_alt: 0,
            }))
        );
    }

    #[test]
    fn unknown_kinds_are_rejected() {
        let error = parse_command_line("reboot {}").expect_err("unknown kind");
        assert!(error.to_string().contains("reboot"));
    }
}
