use alloc::vec::Vec;
use core::time::Duration;

use crate::{PendingRevert, RevertTicket};

/// Host timer facility that fires mismatch reverts after their delay.
///
/// A fired timer must be fed back through the session; cancelled handles must never fire.
pub trait RevertScheduler {
    type Handle;

    fn schedule(&mut self, revert: PendingRevert) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Handle into [`VirtualTimers`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Armed {
    id: TimerId,
    due: Duration,
    ticket: RevertTicket,
}

/// Deterministic scheduler driven by an explicit clock, for headless hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct VirtualTimers {
    now: Duration,
    next_id: u64,
    armed: Vec<Armed>,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }

    /// Moves the clock forward and returns the tickets that came due, earliest first.
    pub fn advance(&mut self, by: Duration) -> Vec<RevertTicket> {
        self.now = self.now.saturating_add(by);
        let now = self.now;

        let mut due: Vec<Armed> = Vec::new();
        self.armed.retain(|armed| {
            if armed.due <= now {
                due.push(armed.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|armed| (armed.due, armed.id.0));
        due.into_iter().map(|armed| armed.ticket).collect()
    }
}

impl RevertScheduler for VirtualTimers {
    type Handle = TimerId;

    fn schedule(&mut self, revert: PendingRevert) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.armed.push(Armed {
            id,
            due: self.now.saturating_add(revert.delay),
            ticket: revert.ticket,
        });
        log::trace!("timer {:?} armed for revert {}", id, revert.ticket.id());
        id
    }

    fn cancel(&mut self, handle: TimerId) {
        self.armed.retain(|armed| armed.id != handle);
        log::trace!("timer {:?} cancelled", handle);
    }
}
