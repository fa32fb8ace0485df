/// Transient commands serviced by the controller's next cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// The model changed while the conversation ended with an answer.
    RegenerateLastAnswer,
}

/// Single-slot queue. Holds at most one event, drained exactly once.
#[derive(Debug, Default)]
pub struct ControlSlot {
    slot: Option<ControlEvent>,
}

impl ControlSlot {
    /// Places `event` in the slot. An already queued event is kept and
    /// `false` is returned.
    pub fn offer(&mut self, event: ControlEvent) -> bool {
        if self.slot.is_some() {
            return false;
        }
        self.slot = Some(event);
        true
    }

    pub fn take(&mut self) -> Option<ControlEvent> {
        self.slot.take()
    }

    pub fn peek(&self) -> Option<ControlEvent> {
        self.slot
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }
}

/// What the next control cycle is going to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    PendingGeneration,
    PendingRegeneration,
}
