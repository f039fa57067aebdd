//! # Logical-Clock Scheduler
//!
//! A delayed, cancellable one-shot event queue decoupled from any rendering
//! frame loop or wall clock.
//!
//! The session uses it to pace the enemy's automatic battle turn and the
//! scene transition after a battle resolves. Cancellation is by liveness
//! check rather than removal: every entry carries the session generation it
//! was scheduled under, and entries whose generation no longer matches are
//! dropped on drain. A scene torn down while a callback is pending (the
//! player losing the run, for instance) therefore can never mutate the
//! replacement session's state.

/// A pending one-shot event.
#[derive(Debug, Clone)]
struct Pending<E> {
    due_at: u64,
    generation: u64,
    event: E,
}

/// Logical-time one-shot scheduler.
///
/// Time is whatever monotonic millisecond counter the caller advances; tests
/// drive it directly without real delays.
///
/// # Examples
///
/// ```
/// use mazebound::Scheduler;
///
/// let mut scheduler: Scheduler<&str> = Scheduler::new();
/// scheduler.schedule(100, 0, "ping");
/// assert!(scheduler.drain_due(50, 0).is_empty());
/// assert_eq!(scheduler.drain_due(100, 0), vec!["ping"]);
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    pending: Vec<Pending<E>>,
}

impl<E> Scheduler<E> {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Schedules `event` to fire once `now >= due_at`, tagged with the
    /// generation it belongs to.
    pub fn schedule(&mut self, due_at: u64, generation: u64, event: E) {
        self.pending.push(Pending {
            due_at,
            generation,
            event,
        });
    }

    /// Removes and returns all events due at `now`, in due-time order.
    ///
    /// Events tagged with a generation other than `live_generation` are
    /// discarded unfired.
    pub fn drain_due(&mut self, now: u64, live_generation: u64) -> Vec<E> {
        self.pending.retain(|p| p.generation == live_generation);

        let mut due: Vec<Pending<E>> = Vec::new();
        let mut rest: Vec<Pending<E>> = Vec::new();
        for p in self.pending.drain(..) {
            if p.due_at <= now {
                due.push(p);
            } else {
                rest.push(p);
            }
        }
        self.pending = rest;

        due.sort_by_key(|p| p.due_at);
        due.into_iter().map(|p| p.event).collect()
    }

    /// Whether nothing is scheduled.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drops every pending event.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_fires_at_deadline() {
        let mut s: Scheduler<u32> = Scheduler::new();
        s.schedule(1000, 0, 7);

        assert!(s.drain_due(999, 0).is_empty());
        assert!(!s.is_idle());
        assert_eq!(s.drain_due(1000, 0), vec![7]);
        assert!(s.is_idle());
    }

    #[test]
    fn test_events_drain_in_due_order() {
        let mut s: Scheduler<&str> = Scheduler::new();
        s.schedule(200, 0, "late");
        s.schedule(100, 0, "early");

        assert_eq!(s.drain_due(500, 0), vec!["early", "late"]);
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let mut s: Scheduler<&str> = Scheduler::new();
        s.schedule(100, 0, "stale");
        s.schedule(100, 1, "live");

        assert_eq!(s.drain_due(100, 1), vec!["live"]);
        assert!(s.is_idle());
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut s: Scheduler<u32> = Scheduler::new();
        s.schedule(100, 0, 1);
        s.schedule(200, 0, 2);
        s.clear();
        assert!(s.is_idle());
        assert!(s.drain_due(1000, 0).is_empty());
    }
}
