mod context;
mod controller;
mod events;

pub use context::{SessionContext, DEFAULT_SYSTEM_PROMPT};
pub use controller::{apology, CycleOutcome, SessionController, Turn};
pub use events::{ControlEvent, ControlSlot, TurnState};
