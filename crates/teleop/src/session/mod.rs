pub mod keys;
pub mod queue;

pub use keys::ControlKey;
pub use queue::{Action, ActionQueue};

use tracing::{debug, info, warn};

use crate::actuator::Actuator;
use crate::catalog::{AnimationCatalog, SlotBindings};
use crate::config::SessionConfig;
use crate::util::remap_to_range;

/// Speeds picked by the shift/alt modifier tier.
#[derive(Debug, Clone, Copy)]
struct SpeedTiers {
    fast: f32,
    mid: f32,
    slow: f32,
}

const FORWARD_SPEEDS: SpeedTiers = SpeedTiers {
    fast: 150.0,
    mid: 75.0,
    slow: 50.0,
};
const TURN_SPEEDS: SpeedTiers = SpeedTiers {
    fast: 100.0,
    mid: 50.0,
    slow: 30.0,
};
const LIFT_SPEEDS: SpeedTiers = SpeedTiers {
    fast: 8.0,
    mid: 4.0,
    slow: 2.0,
};
const HEAD_SPEEDS: SpeedTiers = SpeedTiers {
    fast: 2.0,
    mid: 1.0,
    slow: 0.5,
};

/// Acceleration sent alongside each wheel speed.
const WHEEL_ACCEL_FACTOR: f32 = 4.0;
/// Horizontal mouse position maps onto a -S..S steering bias.
/// Higher is twitchier.
const MOUSE_SENSITIVITY: f32 = 1.5;
/// Head tilt range aimed by vertical mouse position; y=0 (top of the
/// window) maps to the top of the range.
const MOUSE_HEAD_ANGLE_TOP_DEGREES: f32 = 45.0;
const MOUSE_HEAD_ANGLE_BOTTOM_DEGREES: f32 = -25.0;
/// Proportional gain for mouse-look head tracking. A separate tuned
/// constant, not derived from the discrete head speed tiers.
const MOUSE_HEAD_GAIN: f32 = 0.03;

/// Translates raw operator input into continuous motor intent and
/// discrete queued actions for one control connection.
///
/// Held key state is the source of truth: wheel, lift, and head
/// outputs are recomputed from it on every relevant change and issued
/// to the actuator immediately, never cached. One session is one
/// exclusive-access domain; input events and drain ticks must not be
/// interleaved concurrently.
pub struct RemoteSession<A: Actuator> {
    actuator: A,

    drive_forward: bool,
    drive_back: bool,
    turn_left: bool,
    turn_right: bool,
    lift_up: bool,
    lift_down: bool,
    head_up: bool,
    head_down: bool,

    go_fast: bool,
    go_slow: bool,

    mouse_look_enabled: bool,
    mouse_aim: f32,

    catalog: AnimationCatalog,
    slot_bindings: SlotBindings,
    utterance: String,
    queue: ActionQueue,
}

impl<A: Actuator> RemoteSession<A> {
    /// Builds a session bound to `actuator` for its lifetime. The
    /// animation list is queried once here; the catalog is immutable
    /// afterwards.
    pub fn new(actuator: A, config: &SessionConfig) -> Self {
        let catalog =
            AnimationCatalog::from_names(actuator.animation_names(), &config.excluded_animations);
        let slot_bindings = SlotBindings::from_defaults(&catalog, config);
        info!(animations = catalog.len(), "session_created");

        Self {
            actuator,
            drive_forward: false,
            drive_back: false,
            turn_left: false,
            turn_right: false,
            lift_up: false,
            lift_down: false,
            head_up: false,
            head_down: false,
            go_fast: false,
            go_slow: false,
            mouse_look_enabled: config.mouse_look_enabled,
            mouse_aim: 0.0,
            catalog,
            slot_bindings,
            utterance: config.default_utterance.clone(),
            queue: ActionQueue::default(),
        }
    }

    /// Handles one key transition. Holding a key down may repeat the
    /// call with `is_down` still true; discrete triggers (digits,
    /// space) fire once per press, on the key-up edge only.
    pub fn handle_key(&mut self, key_code: u32, shift_held: bool, alt_held: bool, is_down: bool) {
        let tier_changed = self.go_fast != shift_held || self.go_slow != alt_held;
        self.go_fast = shift_held;
        self.go_slow = alt_held;

        let key = ControlKey::from_code(key_code);

        // A modifier change retunes all three categories even when no
        // directional key changed.
        let mut update_drive = tier_changed;
        let mut update_lift = tier_changed;
        let mut update_head = tier_changed;
        match key {
            Some(ControlKey::DriveForward) => {
                self.drive_forward = is_down;
                update_drive = true;
            }
            Some(ControlKey::DriveBack) => {
                self.drive_back = is_down;
                update_drive = true;
            }
            Some(ControlKey::TurnLeft) => {
                self.turn_left = is_down;
                update_drive = true;
            }
            Some(ControlKey::TurnRight) => {
                self.turn_right = is_down;
                update_drive = true;
            }
            Some(ControlKey::LiftUp) => {
                self.lift_up = is_down;
                update_lift = true;
            }
            Some(ControlKey::LiftDown) => {
                self.lift_down = is_down;
                update_lift = true;
            }
            Some(ControlKey::HeadUp) => {
                self.head_up = is_down;
                update_head = true;
            }
            Some(ControlKey::HeadDown) => {
                self.head_down = is_down;
                update_head = true;
            }
            Some(ControlKey::Digit(_)) | Some(ControlKey::Space) | None => {}
        }

        if update_drive {
            self.update_driving();
        }
        if update_head {
            self.update_head();
        }
        if update_lift {
            self.update_lift();
        }

        if !is_down {
            match key {
                Some(ControlKey::Digit(slot)) => self.enqueue_slot_animation(slot as usize),
                Some(ControlKey::Space) => self.queue.enqueue(Action::Speak {
                    text: self.utterance.clone(),
                }),
                _ => {}
            }
        }
    }

    /// Handles a mouse move with window-normalized coordinates
    /// (0,0 top-left to 1,1 bottom-right). A no-op unless mouse-look
    /// is enabled.
    pub fn handle_mouse(&mut self, mouse_x: f32, mouse_y: f32) {
        if !self.mouse_look_enabled {
            return;
        }

        self.mouse_aim =
            remap_to_range(mouse_x, 0.0, 1.0, -MOUSE_SENSITIVITY, MOUSE_SENSITIVITY);
        self.update_driving();

        let desired_head_angle = remap_to_range(
            mouse_y,
            0.0,
            1.0,
            MOUSE_HEAD_ANGLE_TOP_DEGREES,
            MOUSE_HEAD_ANGLE_BOTTOM_DEGREES,
        );
        let head_angle_delta = desired_head_angle - self.actuator.head_angle_degrees();
        self.actuator.set_head_motor(head_angle_delta * MOUSE_HEAD_GAIN);
    }

    /// Toggles mouse-look. Disabling cancels the steering bias and
    /// recomputes drive and head outputs once, so held keys resume
    /// their discrete-speed behavior cleanly.
    pub fn set_mouse_look_enabled(&mut self, enabled: bool) {
        let was_enabled = self.mouse_look_enabled;
        self.mouse_look_enabled = enabled;
        if !enabled {
            self.mouse_aim = 0.0;
            if was_enabled {
                debug!("mouse_look_disabled");
                self.update_driving();
                self.update_head();
            }
        }
    }

    /// Rebinds a digit slot to a catalog index. Out-of-range input is
    /// ignored; the dropdown boundary owns validation.
    pub fn set_slot_binding(&mut self, slot: usize, catalog_index: usize) {
        self.slot_bindings.set(slot, catalog_index, &self.catalog);
    }

    /// Replaces the utterance verbatim. Empty text is permitted and
    /// already-queued speak actions keep the text they captured.
    pub fn set_utterance(&mut self, text: impl Into<String>) {
        self.utterance = text.into();
    }

    /// Pass-through to the actuator's behavior stack toggle.
    pub fn set_autonomy_enabled(&mut self, enabled: bool) {
        self.actuator.set_autonomy_enabled(enabled);
    }

    /// Attempts the head-of-queue action once; called on the external
    /// drain tick.
    pub fn drain_step(&mut self) {
        self.queue.drain_step(&mut self.actuator);
    }

    pub fn render_queue_text(&self) -> String {
        self.queue.render_queue_text()
    }

    pub fn queue(&self) -> &ActionQueue {
        &self.queue
    }

    pub fn catalog(&self) -> &AnimationCatalog {
        &self.catalog
    }

    pub fn slot_binding(&self, slot: usize) -> Option<usize> {
        self.slot_bindings.get(slot)
    }

    pub fn utterance(&self) -> &str {
        &self.utterance
    }

    pub fn mouse_look_enabled(&self) -> bool {
        self.mouse_look_enabled
    }

    pub fn mouse_aim(&self) -> f32 {
        self.mouse_aim
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    fn enqueue_slot_animation(&mut self, slot: usize) {
        let Some(index) = self.slot_bindings.get(slot) else {
            return;
        };
        let Some(name) = self.catalog.name(index) else {
            warn!(slot, index, "animation_binding_unresolved");
            return;
        };
        self.queue.enqueue(Action::PlayAnimation {
            name: name.to_string(),
        });
    }

    fn pick_speed(&self, tiers: SpeedTiers) -> f32 {
        // Fast wins only on its own; fast+slow resolves to slow.
        if self.go_fast && !self.go_slow {
            tiers.fast
        } else if self.go_slow {
            tiers.slow
        } else {
            tiers.mid
        }
    }

    fn axis(positive: bool, negative: bool) -> f32 {
        (positive as i8 - negative as i8) as f32
    }

    fn update_driving(&mut self) {
        let drive_dir = Self::axis(self.drive_forward, self.drive_back);
        let mut turn_dir = Self::axis(self.turn_right, self.turn_left) + self.mouse_aim;
        if drive_dir < 0.0 {
            // Steering the opposite way while reversing feels natural.
            turn_dir = -turn_dir;
        }

        let forward_speed = self.pick_speed(FORWARD_SPEEDS);
        let turn_speed = self.pick_speed(TURN_SPEEDS);

        let left = drive_dir * forward_speed + turn_speed * turn_dir;
        let right = drive_dir * forward_speed - turn_speed * turn_dir;
        self.actuator.set_wheel_motors(
            left,
            right,
            left * WHEEL_ACCEL_FACTOR,
            right * WHEEL_ACCEL_FACTOR,
        );
    }

    fn update_lift(&mut self) {
        let velocity = Self::axis(self.lift_up, self.lift_down) * self.pick_speed(LIFT_SPEEDS);
        self.actuator.set_lift_motor(velocity);
    }

    fn update_head(&mut self) {
        // Mouse-look owns the head motor while enabled; the discrete
        // path stays quiet until it is turned off.
        if self.mouse_look_enabled {
            return;
        }
        let velocity = Self::axis(self.head_up, self.head_down) * self.pick_speed(HEAD_SPEEDS);
        self.actuator.set_head_motor(velocity);
    }
}
