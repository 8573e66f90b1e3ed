use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Monotonic request counter for one endpoint.
///
/// Responses are applied in whatever order they resolve, except that one
/// older than the last applied response is dropped. A service slower than
/// the poll interval still gets every response shown; an out-of-order
/// response never overwrites a newer one.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.issued.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Marks `ticket` as applied unless a newer one already was.
    ///
    /// Callers must hold the lock guarding whatever the response is applied to.
    pub fn try_apply(&self, ticket: RequestTicket) -> bool {
        let previous = self.applied.fetch_max(ticket.0, Ordering::AcqRel);
        previous <= ticket.0
    }

    pub fn last_applied(&self) -> Option<RequestTicket> {
        match self.applied.load(Ordering::Acquire) {
            0 => None,
            ticket => Some(RequestTicket(ticket)),
        }
    }
}
