/// Key codes as posted by the control page: ASCII codes for letters,
/// digits, and space.
pub const KEY_DRIVE_FORWARD: u32 = b'W' as u32;
pub const KEY_DRIVE_BACK: u32 = b'S' as u32;
pub const KEY_TURN_LEFT: u32 = b'A' as u32;
pub const KEY_TURN_RIGHT: u32 = b'D' as u32;
pub const KEY_LIFT_UP: u32 = b'R' as u32;
pub const KEY_LIFT_DOWN: u32 = b'F' as u32;
pub const KEY_HEAD_UP: u32 = b'T' as u32;
pub const KEY_HEAD_DOWN: u32 = b'G' as u32;
pub const KEY_SPACE: u32 = b' ' as u32;

const KEY_DIGIT_0: u32 = b'0' as u32;
const KEY_DIGIT_9: u32 = b'9' as u32;

/// A key code resolved to its control meaning. Codes outside the
/// fixed mapping resolve to `None` and are ignored by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    DriveForward,
    DriveBack,
    TurnLeft,
    TurnRight,
    LiftUp,
    LiftDown,
    HeadUp,
    HeadDown,
    /// Digit keys 0..=9 trigger the bound animation on key-up.
    Digit(u8),
    /// Space triggers the current utterance on key-up.
    Space,
}

impl ControlKey {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            KEY_DRIVE_FORWARD => Some(Self::DriveForward),
            KEY_DRIVE_BACK => Some(Self::DriveBack),
            KEY_TURN_LEFT => Some(Self::TurnLeft),
            KEY_TURN_RIGHT => Some(Self::TurnRight),
            KEY_LIFT_UP => Some(Self::LiftUp),
            KEY_LIFT_DOWN => Some(Self::LiftDown),
            KEY_HEAD_UP => Some(Self::HeadUp),
            KEY_HEAD_DOWN => Some(Self::HeadDown),
            KEY_SPACE => Some(Self::Space),
            KEY_DIGIT_0..=KEY_DIGIT_9 => Some(Self::Digit((code - KEY_DIGIT_0) as u8)),
            _ => None,
        }
    }
}
