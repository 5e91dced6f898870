//! Debounced value delivery.
//!
//! A value becomes deliverable only after a quiet window with no newer
//! input. A newer input replaces the pending one, which is then never
//! delivered. The state machine takes explicit millisecond timestamps so
//! it can be driven by a browser timer or by tests.

use std::time::Duration;

/// Milliseconds since an arbitrary epoch
pub type Millis = u64;

/// Delay for a browser timer, saturating at the largest value it accepts.
pub fn timer_millis(ms: Millis) -> u32 {
    u32::try_from(ms).unwrap_or(u32::MAX)
}

pub const DEFAULT_WINDOW: Duration = Duration::from_millis(400);

/// Handle for one scheduled delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    deadline: Millis,
}

impl Ticket {
    pub fn deadline(&self) -> Millis {
        self.deadline
    }
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    ticket: Ticket,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Millis,
    generation: u64,
    pending: Option<Pending<T>>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window: Millis::try_from(window.as_millis()).unwrap_or(Millis::MAX),
            generation: 0,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window)
    }

    /// Schedule `value`, discarding whatever was pending.
    pub fn input(&mut self, value: T, now: Millis) -> Ticket {
        self.generation += 1;
        let ticket = Ticket {
            generation: self.generation,
            deadline: now.saturating_add(self.window),
        };
        self.pending = Some(Pending { value, ticket });
        ticket
    }

    /// Deliver the pending value if its quiet window has elapsed at `now`.
    pub fn poll(&mut self, now: Millis) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.ticket.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Timer callback path: deliver only if `ticket` is still the newest.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        match &self.pending {
            Some(p) if p.ticket == ticket => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.value)
    }

    pub fn deadline(&self) -> Option<Millis> {
        self.pending.as_ref().map(|p| p.ticket.deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversized_windows_saturate() {
        assert_eq!(timer_millis(3000), 3000);
        assert_eq!(timer_millis(u64::from(u32::MAX) + 1), u32::MAX);
        let d = Debouncer::<()>::new(Duration::from_secs(u64::MAX));
        assert_eq!(d.window(), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn test_last_write_wins() {
        let mut d = Debouncer::new(Duration::from_millis(400));
        d.input("a", 0);
        d.input("ab", 100);
        d.input("abc", 600);
        assert_eq!(d.deadline(), Some(1000));
        assert_eq!(d.poll(999), None);
        assert_eq!(d.poll(1000), Some("abc"));
        assert_eq!(d.poll(5000), None);
    }

    #[test]
    fn test_quiet_window_restarts_on_input() {
        let mut d = Debouncer::new(Duration::from_millis(400));
        d.input(1, 0);
        assert_eq!(d.poll(300), None);
        d.input(2, 300);
        assert_eq!(d.poll(400), None);
        assert_eq!(d.poll(700), Some(2));
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut d = Debouncer::new(Duration::from_millis(400));
        let first = d.input("old", 0);
        let second = d.input("new", 10);
        assert_eq!(d.fire(first), None);
        assert_eq!(d.pending(), Some(&"new"));
        assert_eq!(d.fire(second), Some("new"));
        assert_eq!(d.fire(second), None);
    }

    #[test]
    fn test_cancel() {
        let mut d: Debouncer<&str> = Debouncer::default();
        let t = d.input("x", 0);
        d.cancel();
        assert_eq!(d.fire(t), None);
        assert_eq!(d.poll(10_000), None);
        assert_eq!(d.window(), DEFAULT_WINDOW);
    }
}
