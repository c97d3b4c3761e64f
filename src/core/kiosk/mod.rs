//! Visitor interaction state machine.
//!
//! The kiosk walks a visitor through: start gesture → menu → (name input →)
//! result → back to menu, showing a character clip and a message on every
//! screen and speaking each prompt aloud. The transition logic is a pure
//! reducer ([`reducer::reduce`]): it mutates only [`state::InteractionState`]
//! and returns the side effects (speak, lookup) as explicit commands.
//! [`session::KioskSession`] executes those commands and feeds completion
//! events back through a single action queue, so no two transitions ever
//! interleave.

pub mod clips;
pub mod messages;
pub mod reducer;
pub mod session;
pub mod state;

pub use clips::ClipDescriptor;
pub use reducer::{Action, Command, LookupOutcome, reduce};
pub use session::{KioskSession, ReservationLookup};
pub use state::{Clip, InteractionState, MenuChoice, ResultContext, Screen};
