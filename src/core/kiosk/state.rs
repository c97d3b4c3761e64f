use crate::core::sheet::ReservationRecord;

/// Which UI mode the kiosk is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    NameInput,
    Result,
}

/// The character's current visual activity.
///
/// Each clip maps to a fixed descriptor (label, color, media); see
/// [`super::clips`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    Idle,
    Greeting,
    Explaining,
    Agreeing,
    Delivery,
    Thinking,
    Warning,
}

/// Why the result screen is being shown. Auxiliary display only; transitions
/// never branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultContext {
    StaffDispatch,
    CallInstruction,
    Found(ReservationRecord),
    NotFound,
    Error,
}

/// Menu entries offered to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Reservation,
    Delivery,
    Inquiry,
    Other,
}

/// The single mutable entity owned by the state machine.
///
/// Created once at kiosk boot; every transition overwrites fields freely
/// except `has_started`, which latches on the first start gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    pub screen: Screen,
    pub clip: Clip,
    pub message: String,
    pub is_loading: bool,
    pub is_speaking: bool,
    pub has_started: bool,
    pub pending_input: String,
    /// Present iff `screen == Result`.
    pub result: Option<ResultContext>,
    /// Generation counter for in-flight lookups; a settled lookup carrying a
    /// stale token is discarded.
    pub(crate) lookup_token: u64,
    /// Generation counter for in-flight utterances.
    pub(crate) speech_token: u64,
}

impl InteractionState {
    /// Pre-gesture boot state: idle character, nothing unlocked yet.
    pub fn new() -> Self {
        Self {
            screen: Screen::Menu,
            clip: Clip::Idle,
            message: String::new(),
            is_loading: false,
            is_speaking: false,
            has_started: false,
            pending_input: String::new(),
            result: None,
            lookup_token: 0,
            speech_token: 0,
        }
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new()
    }
}
