/// Number of digit-key animation slots (keys 0 through 9).
pub const DIGIT_SLOT_COUNT: usize = 10;

/// Construction-time configuration for a control session.
///
/// Modeled as an explicit value handed to the session constructor so
/// concurrent sessions (and tests) never share binding state.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Animation names hidden from the catalog. The stock entries are
    /// test animations that misbehave under remote control.
    pub excluded_animations: Vec<String>,
    /// Default animation name bound to each digit key 0..=9.
    pub default_slot_animations: [String; DIGIT_SLOT_COUNT],
    /// Text spoken on the space key until the operator edits it.
    pub default_utterance: String,
    /// Whether mouse-look starts enabled.
    pub mouse_look_enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            excluded_animations: vec!["ANIMATION_TEST".to_string(), "soundTestAnim".to_string()],
            default_slot_animations: [
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
            ]
            .map(String::from),
            default_utterance: "Hi, I am online".to_string(),
            mouse_look_enabled: false,
        }
    }
}
