//! Absolute-time schedule deadline.

use embassy_time::Instant;

/// The single pending point in time at which the next scheduled action is
/// due.
///
/// Arming replaces any pending value; there is no cancellation concept
/// beyond clearing or superseding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline {
    due: Option<Instant>,
}

impl Deadline {
    /// Create a cleared deadline.
    pub const fn new() -> Self {
        Self { due: None }
    }

    /// Arm the deadline at `at`, superseding any pending value.
    pub fn arm(&mut self, at: Instant) {
        self.due = Some(at);
    }

    /// Arm the deadline at `at` unless the pending value lies in the future.
    ///
    /// Used when re-entering idle after a refresh, where an inherited
    /// deadline must not be pushed back.
    pub fn arm_unless_future(&mut self, at: Instant, now: Instant) {
        match self.due {
            Some(due) if due > now => {}
            _ => self.due = Some(at),
        }
    }

    /// Clear the pending deadline.
    pub fn clear(&mut self) {
        self.due = None;
    }

    /// The pending point in time, if any.
    pub const fn due(self) -> Option<Instant> {
        self.due
    }

    /// Whether the deadline is armed and due at or before `now`.
    pub fn is_elapsed(self, now: Instant) -> bool {
        matches!(self.due, Some(due) if due <= now)
    }
}
