use std::collections::VecDeque;
use std::fmt::{self, Write};

use crate::actuator::Actuator;

/// Eviction fires when the pending count exceeds this before an
/// append, so the steady-state capacity is one more than the cap.
const QUEUE_SOFT_CAP: usize = 10;

/// A discrete one-shot command. Immutable once enqueued: later edits
/// to the session's utterance or bindings never alter a pending entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Speak { text: String },
    PlayAnimation { name: String },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Speak { text } => write!(f, "speak_text( {text} )"),
            Action::PlayAnimation { name } => write!(f, "play_animation( {name} )"),
        }
    }
}

/// Bounded FIFO of pending one-shot commands, drained one head per
/// tick.
///
/// The head is re-dispatched on every drain until the actuator reports
/// completion: at-least-once dispatch, exactly-once commit. A head
/// that never completes blocks the queue indefinitely; there is no
/// timeout and no eviction of a stalled head.
#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: VecDeque<Action>,
}

impl ActionQueue {
    /// Appends an action, evicting the oldest entry first when the
    /// queue is full.
    pub fn enqueue(&mut self, action: Action) {
        if self.pending.len() > QUEUE_SOFT_CAP {
            self.pending.pop_front();
        }
        self.pending.push_back(action);
    }

    /// Attempts the head action once, popping it only when the
    /// actuator reports completion. Safe to call on an empty queue.
    pub fn drain_step<A: Actuator>(&mut self, actuator: &mut A) {
        let Some(head) = self.pending.front() else {
            return;
        };
        let completed = match head {
            Action::Speak { text } => actuator.speak_text(text),
            Action::PlayAnimation { name } => actuator.play_animation(name),
        };
        if completed {
            self.pending.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.pending.iter()
    }

    /// 1-indexed listing of pending actions for diagnostic display.
    /// Pure formatting, no side effect.
    pub fn render_queue_text(&self) -> String {
        let mut out = String::new();
        for (i, action) in self.pending.iter().enumerate() {
            let _ = writeln!(out, "{}: {action}", i + 1);
        }
        out
    }
}
