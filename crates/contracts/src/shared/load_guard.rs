//! Generation guard for page loads.
//!
//! A page takes a ticket before it starts fetching and commits the results
//! only while that ticket is still current. Starting a newer load (subject
//! switch, refetch after save) or leaving the page makes older tickets stale,
//! so their late responses are dropped.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Default, Clone)]
pub struct LoadGuard {
    generation: u64,
    closed: bool,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load; every earlier ticket becomes stale.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        !self.closed && ticket.0 == self.generation
    }

    /// Owner is gone; no ticket will ever be current again.
    pub fn close(&mut self) {
        self.closed = true;
        self.generation += 1;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_load_supersedes_older() {
        let mut guard = LoadGuard::new();
        let first = guard.begin();
        assert!(guard.is_current(first));
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_close_drops_everything() {
        let mut guard = LoadGuard::new();
        let ticket = guard.begin();
        guard.close();
        assert!(!guard.is_current(ticket));
        let late = guard.begin();
        assert!(!guard.is_current(late));
        assert!(guard.is_closed());
    }
}
