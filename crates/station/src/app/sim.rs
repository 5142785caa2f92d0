use teleop::Actuator;
use tracing::debug;

/// Drain ticks a discrete action reports "still running" before it
/// completes.
const ACTION_POLLS_TO_COMPLETE: u32 = 3;

/// Head tilt limits of the simulated rig, degrees.
const HEAD_ANGLE_MIN_DEGREES: f32 = -25.0;
const HEAD_ANGLE_MAX_DEGREES: f32 = 45.0;

/// Animation triggers the simulated rig understands. Includes the
/// stock excluded test entries so the catalog filter is exercised.
const BUILTIN_ANIMATIONS: &[&str] = &[
    "ANIMATION_TEST",
    "soundTestAnim",
    "anim_turn_left_01",
    "anim_blackjack_victorwin_01",
    "anim_pounce_success_02",
    "anim_feedback_shutup_01",
    "anim_knowledgegraph_success_01",
    "anim_wakeword_groggyeyes_listenloop_01",
    "anim_fistbump_success_01",
    "anim_reacttoface_unidentified_01",
    "anim_rtpickup_loop_10",
    "anim_volume_stage_05",
    "anim_greeting_hello_01",
    "anim_eyepose_curious",
];

/// An in-process robot stand-in.
///
/// Motors record their last command and the head angle integrates the
/// commanded velocity per command, coarsely. Discrete actions take a
/// fixed number of polls to finish: re-dispatching the in-flight
/// action continues it rather than restarting it, matching the
/// duplicate-start suppression the drain protocol relies on.
#[derive(Debug)]
pub(crate) struct SimRig {
    head_angle_degrees: f32,
    wheel_speeds: (f32, f32),
    lift_velocity: f32,
    autonomy_enabled: bool,
    busy: Option<BusyAction>,
    animations: Vec<String>,
}

#[derive(Debug)]
struct BusyAction {
    label: String,
    polls_remaining: u32,
}

impl Default for SimRig {
    fn default() -> Self {
        Self {
            head_angle_degrees: 0.0,
            wheel_speeds: (0.0, 0.0),
            lift_velocity: 0.0,
            autonomy_enabled: false,
            busy: None,
            animations: BUILTIN_ANIMATIONS
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl SimRig {
    pub(crate) fn wheel_speeds(&self) -> (f32, f32) {
        self.wheel_speeds
    }

    pub(crate) fn lift_velocity(&self) -> f32 {
        self.lift_velocity
    }

    pub(crate) fn autonomy_enabled(&self) -> bool {
        self.autonomy_enabled
    }

    fn poll_discrete(&mut self, label: String) -> bool {
        match self.busy.as_mut() {
            Some(busy) if busy.label == label => {
                busy.polls_remaining = busy.polls_remaining.saturating_sub(1);
                if busy.polls_remaining == 0 {
                    debug!(action = %label, "sim_action_completed");
                    self.busy = None;
                    true
                } else {
                    false
                }
            }
            // A different action while one is in flight starts the
            // new one; the queue never does this, but the rig stays
            // well-defined if a caller does.
            _ => {
                debug!(action = %label, "sim_action_started");
                // The starting dispatch counts as the first poll.
                self.busy = Some(BusyAction {
                    label,
                    polls_remaining: ACTION_POLLS_TO_COMPLETE - 1,
                });
                false
            }
        }
    }
}

impl Actuator for SimRig {
    fn set_wheel_motors(&mut self, left: f32, right: f32, left_accel: f32, right_accel: f32) {
        self.wheel_speeds = (left, right);
        debug!(left, right, left_accel, right_accel, "sim_wheel_motors");
    }

    fn set_lift_motor(&mut self, velocity: f32) {
        self.lift_velocity = velocity;
        debug!(velocity, "sim_lift_motor");
    }

    fn set_head_motor(&mut self, velocity: f32) {
        self.head_angle_degrees = (self.head_angle_degrees + velocity)
            .clamp(HEAD_ANGLE_MIN_DEGREES, HEAD_ANGLE_MAX_DEGREES);
        debug!(velocity, angle = self.head_angle_degrees, "sim_head_motor");
    }

    fn head_angle_degrees(&self) -> f32 {
        self.head_angle_degrees
    }

    fn play_animation(&mut self, name: &str) -> bool {
        self.poll_discrete(format!("play:{name}"))
    }

    fn speak_text(&mut self, text: &str) -> bool {
        self.poll_discrete(format!("speak:{text}"))
    }

    fn animation_names(&self) -> Vec<String> {
        self.animations.clone()
    }

    fn set_autonomy_enabled(&mut self, enabled: bool) {
        self.autonomy_enabled = enabled;
        debug!(enabled, "sim_autonomy");
    }
}
