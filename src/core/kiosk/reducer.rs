//! Pure transition logic for the kiosk.
//!
//! `reduce` applies one action to the interaction state and returns the side
//! effects to perform as explicit commands. All screen/clip/message changes
//! for a transition happen here atomically, before any speech or lookup is
//! dispatched.

use super::messages;
use super::state::{Clip, InteractionState, MenuChoice, ResultContext, Screen};
use crate::core::sheet::ReservationRecord;

/// How an in-flight lookup settled.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(ReservationRecord),
    NotFound,
    /// The lookup call itself failed (transport/decoding), distinct from a
    /// clean "no match".
    Failed,
}

/// Discrete external events driving the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The initial user gesture that unlocks audio playback.
    Start,
    Choose(MenuChoice),
    InputChanged(String),
    /// Submit button or enter key; both are equivalent.
    SubmitName,
    LookupSettled { token: u64, outcome: LookupOutcome },
    SpeechFinished { token: u64 },
    ReturnToMenu,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Speak the given text; the executor must report completion back via
    /// [`Action::SpeechFinished`] with the same token.
    Speak { text: String, token: u64 },
    /// Run a reservation lookup; the executor must report the outcome back
    /// via [`Action::LookupSettled`] with the same token.
    BeginLookup { name: String, token: u64 },
}

/// Mark the state as speaking and emit the matching speak command.
fn speak(state: &mut InteractionState, text: impl Into<String>, commands: &mut Vec<Command>) {
    state.speech_token += 1;
    state.is_speaking = true;
    commands.push(Command::Speak {
        text: text.into(),
        token: state.speech_token,
    });
}

/// Apply `action` to `state`, returning the commands to execute.
///
/// Guarded actions (menu choices while speaking, submits while loading or
/// empty, stale completions) are no-ops: the state is left untouched and no
/// commands are produced.
pub fn reduce(state: &mut InteractionState, action: Action) -> Vec<Command> {
    let mut commands = Vec::new();

    match action {
        Action::Start => {
            if state.has_started {
                return commands;
            }
            state.has_started = true;
            state.screen = Screen::Menu;
            state.clip = Clip::Greeting;
            state.message = messages::GREETING.to_string();
            state.result = None;
            speak(state, messages::GREETING, &mut commands);
        }

        Action::Choose(choice) => {
            // Choice buttons are disabled while the character is speaking.
            if state.screen != Screen::Menu || state.is_speaking || !state.has_started {
                return commands;
            }
            match choice {
                MenuChoice::Reservation => {
                    state.screen = Screen::NameInput;
                    state.clip = Clip::Explaining;
                    state.message = messages::ASK_NAME.to_string();
                    speak(state, messages::ASK_NAME, &mut commands);
                }
                MenuChoice::Delivery => {
                    state.screen = Screen::Result;
                    state.clip = Clip::Delivery;
                    state.message = messages::STAFF_DISPATCH.to_string();
                    state.result = Some(ResultContext::StaffDispatch);
                    speak(state, messages::STAFF_DISPATCH, &mut commands);
                }
                MenuChoice::Inquiry | MenuChoice::Other => {
                    state.screen = Screen::Result;
                    state.clip = Clip::Explaining;
                    state.message = messages::CALL_INSTRUCTION.to_string();
                    state.result = Some(ResultContext::CallInstruction);
                    speak(state, messages::CALL_INSTRUCTION_SPOKEN, &mut commands);
                }
            }
        }

        Action::InputChanged(value) => {
            if state.screen == Screen::NameInput {
                state.pending_input = value;
            }
        }

        Action::SubmitName => {
            // The loading guard makes a double submit a no-op by design.
            let name = state.pending_input.trim().to_string();
            if state.screen != Screen::NameInput || state.is_loading || name.is_empty() {
                return commands;
            }
            state.is_loading = true;
            state.clip = Clip::Thinking;
            state.message = messages::SEARCHING.to_string();
            state.lookup_token += 1;
            commands.push(Command::BeginLookup {
                name,
                token: state.lookup_token,
            });
        }

        Action::LookupSettled { token, outcome } => {
            // A stale response must never overwrite a newer screen.
            if token != state.lookup_token || state.screen != Screen::NameInput {
                return commands;
            }
            state.is_loading = false;
            state.screen = Screen::Result;
            match outcome {
                LookupOutcome::Found(record) => {
                    state.clip = Clip::Agreeing;
                    state.message = messages::found_message(&record);
                    let spoken = messages::found_spoken(&record);
                    state.result = Some(ResultContext::Found(record));
                    speak(state, spoken, &mut commands);
                }
                LookupOutcome::NotFound => {
                    state.clip = Clip::Warning;
                    state.message = messages::NOT_FOUND.to_string();
                    state.result = Some(ResultContext::NotFound);
                    speak(state, messages::NOT_FOUND_SPOKEN, &mut commands);
                }
                LookupOutcome::Failed => {
                    state.clip = Clip::Warning;
                    state.message = messages::SYSTEM_ERROR.to_string();
                    state.result = Some(ResultContext::Error);
                    speak(state, messages::SYSTEM_ERROR_SPOKEN, &mut commands);
                }
            }
        }

        Action::SpeechFinished { token } => {
            if token == state.speech_token {
                state.is_speaking = false;
            }
        }

        Action::ReturnToMenu => {
            if !state.has_started || state.is_speaking || state.is_loading {
                return commands;
            }
            state.screen = Screen::Menu;
            state.clip = Clip::Greeting;
            state.message = messages::GREETING.to_string();
            state.pending_input.clear();
            state.result = None;
            speak(state, messages::GREETING, &mut commands);
        }
    }

    commands
}
