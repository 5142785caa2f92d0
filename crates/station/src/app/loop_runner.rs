use std::io::BufRead;
use std::process::ExitCode;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use teleop::{Actuator, RemoteSession};
use tracing::{info, warn};

use super::bootstrap::AppWiring;
use super::commands::{self, StationCommand};

/// What one console line did to the session.
#[derive(Debug, PartialEq)]
enum LineOutcome {
    Handled,
    Output(String),
    Quit,
}

/// Runs the console loop: stdin lines drive the session while the
/// queue drains on a fixed cadence. Returns when stdin closes or a
/// quit verb arrives.
pub(crate) fn run(wiring: AppWiring) -> ExitCode {
    let mut session = RemoteSession::new(wiring.rig, &wiring.config);
    let tick = Duration::from_millis(wiring.tick_ms);

    let (line_tx, line_rx) = mpsc::channel::<String>();
    std::thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if line_tx.send(line).is_err() {
                    break;
                }
            }
        })
        .expect("spawn stdin reader");

    info!(tick_ms = wiring.tick_ms, "station_ready");

    let mut next_tick = Instant::now() + tick;
    loop {
        let now = Instant::now();
        if now >= next_tick {
            session.drain_step();
            // Catch up without bunching ticks after a stall.
            while next_tick <= now {
                next_tick += tick;
            }
            continue;
        }

        match line_rx.recv_timeout(next_tick - now) {
            Ok(line) => match handle_line(&mut session, &line) {
                LineOutcome::Handled => {}
                LineOutcome::Output(text) => println!("{text}"),
                LineOutcome::Quit => break,
            },
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    info!("station_shutdown");
    ExitCode::SUCCESS
}

fn handle_line<A: Actuator>(session: &mut RemoteSession<A>, line: &str) -> LineOutcome {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return LineOutcome::Handled;
    }

    match commands::parse_command_line(trimmed) {
        Ok(StationCommand::Event(event)) => {
            event.apply(session);
            LineOutcome::Handled
        }
        Ok(StationCommand::ShowQueue) => LineOutcome::Output(render_queue_listing(session)),
        Ok(StationCommand::Quit) => LineOutcome::Quit,
        Err(error) => {
            warn!(error = %error, "command_rejected");
            LineOutcome::Handled
        }
    }
}

fn render_queue_listing<A: Actuator>(session: &RemoteSession<A>) -> String {
    format!("Action Queue:\n{}", session.render_queue_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::sim::SimRig;
    use teleop::SessionConfig;

    fn test_session() -> RemoteSession<SimRig> {
        RemoteSession::new(SimRig::default(), &SessionConfig::default())
    }

    #[test]
    fn blank_and_comment_lines_are_ignored() {
        let mut session = test_session();
        assert_eq!(handle_line(&mut session, ""), LineOutcome::Handled);
        assert_eq!(handle_line(&mut session, "   "), LineOutcome::Handled);
        assert_eq!(
            handle_line(&mut session, "# warm up the rig"),
            LineOutcome::Handled
        );
    }

    #[test]
    fn quit_verb_ends_the_loop() {
        let mut session = test_session();
        assert_eq!(handle_line(&mut session, "quit"), LineOutcome::Quit);
    }

    #[test]
    fn queue_verb_lists_pending_actions() {
        let mut session = test_session();
        handle_line(
            &mut session,
            r#"sayText {"textEntered":"status check"}"#,
        );
        handle_line(
            &mut session,
            r#"keydown {"keyCode":32,"hasShift":0,"hasAlt":0}"#,
        );
        handle_line(
            &mut session,
            r#"keyup {"keyCode":32,"hasShift":0,"hasAlt":0}"#,
        );

        let LineOutcome::Output(listing) = handle_line(&mut session, "queue") else {
            panic!("expected queue listing");
        };
        assert!(listing.starts_with("Action Queue:\n"), "{listing}");
        assert!(listing.contains("1: speak_text( status check )"), "{listing}");
    }

    #[test]
    fn malformed_lines_are_dropped_without_state_change() {
        let mut session = test_session();
        assert_eq!(
            handle_line(&mut session, "keydown {not json}"),
            LineOutcome::Handled
        );
        assert_eq!(
            handle_line(&mut session, "launch {}"),
            LineOutcome::Handled
        );
        assert!(session.queue().is_empty());
    }

    #[test]
    fn key_events_reach_the_actuator() {
        let mut session = test_session();
        handle_line(
            &mut session,
            r#"keydown {"keyCode":87,"hasShift":0,"hasAlt":0}"#,
        );
        // Forward at the mid tier splits evenly across both wheels.
        let (left, right) = session.actuator().wheel_speeds();
        assert!((left - 75.0).abs() < 0.0001);
        assert!((right - 75.0).abs() < 0.0001);
    }
}
