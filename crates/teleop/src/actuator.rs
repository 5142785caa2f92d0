/// Capability surface of the robot, polymorphic over a live rig or a
/// simulator.
///
/// Motor setters are fire-and-forget; no return value is consulted.
/// `play_animation` and `speak_text` are polled: `true` means the
/// action completed, `false` means it is still running and the caller
/// should poll again. Implementations must tolerate being re-invoked
/// for an action already in flight (continue it, do not restart it).
pub trait Actuator {
    /// Wheel speeds in mm/s plus the acceleration pair sent alongside.
    fn set_wheel_motors(&mut self, left: f32, right: f32, left_accel: f32, right_accel: f32);

    fn set_lift_motor(&mut self, velocity: f32);

    fn set_head_motor(&mut self, velocity: f32);

    /// Current head tilt, synchronous read.
    fn head_angle_degrees(&self) -> f32;

    fn play_animation(&mut self, name: &str) -> bool;

    fn speak_text(&mut self, text: &str) -> bool;

    /// Full animation list, queried once at session creation.
    fn animation_names(&self) -> Vec<String>;

    /// Hands control back to (or takes it from) the robot's own
    /// behavior stack. Orthogonal to the drive/queue machinery.
    fn set_autonomy_enabled(&mut self, enabled: bool);
}
