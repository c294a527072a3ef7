//! Trailing-Edge Debounce
//!
//! Timer-agnostic bookkeeping: the caller owns the timer and hands back the
//! ticket when it fires. Only the most recent ticket can commit, so a timer
//! that was superseded or outlived its owner is harmless.

/// Identifies one `push`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    committed: T,
    pending: Option<T>,
    generation: u64,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T) -> Self {
        Self {
            committed: initial,
            pending: None,
            generation: 0,
        }
    }

    /// Last value that survived a full quiet window
    pub fn committed(&self) -> &T {
        &self.committed
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a new input value, restarting the window
    pub fn push(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// The window for `ticket` elapsed. Returns the newly committed value,
    /// or `None` if the ticket is stale or the value did not change.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        let value = self.pending.take()?;
        if value == self.committed {
            return None;
        }
        self.committed = value.clone();
        Some(value)
    }

    /// Drop any pending value; outstanding tickets become stale
    pub fn cancel(&mut self) {
        self.pending = None;
        self.generation += 1;
    }
}
