pub mod actuator;
pub mod catalog;
pub mod config;
pub mod events;
pub mod session;
mod util;

pub use actuator::Actuator;
pub use catalog::{AnimationCatalog, SlotBindings};
pub use config::{SessionConfig, DIGIT_SLOT_COUNT};
pub use events::{
    AutonomyMessage, ControlEvent, EventError, KeyMessage, MouseLookMessage, MouseMessage,
    SlotSelectMessage, UtteranceMessage,
};
pub use session::{Action, ActionQueue, ControlKey, RemoteSession};
pub use util::remap_to_range;
