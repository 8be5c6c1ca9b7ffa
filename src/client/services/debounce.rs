use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Trailing-edge debouncer holding at most one pending value.
///
/// Every `push` replaces the pending value and hands out a fresh [`Ticket`];
/// older tickets become stale. A ticket only yields the value when it is
/// still the latest one at the moment it fires.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<T>,
}

/// Timer handle for one scheduled firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    deadline: Instant,
}

impl Ticket {
    pub async fn wait(self) -> Ticket {
        sleep_until(self.deadline).await;
        self
    }
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn push(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket {
            generation: self.generation,
            deadline: Instant::now() + self.delay,
        }
    }

    /// Takes the pending value if `ticket` is the most recent one.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.generation != self.generation {
            return None;
        }
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_fires() {
        let mut debouncer = Debouncer::new(Duration::from_millis(1000));
        let first = debouncer.push("0");
        let second = debouncer.push("01");
        let third = debouncer.push("013");

        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.fire(third), Some("013"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn ticket_fires_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        let ticket = debouncer.push(42);
        assert_eq!(debouncer.fire(ticket), Some(42));
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_sleeps_for_the_window() {
        let mut debouncer = Debouncer::new(Duration::from_millis(1000));
        let start = Instant::now();
        let ticket = debouncer.push("01310-100");
        let ticket = ticket.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert_eq!(debouncer.fire(ticket), Some("01310-100"));
    }

    #[tokio::test(start_paused = true)]
    async fn push_inside_window_moves_the_deadline() {
        let mut debouncer = Debouncer::new(Duration::from_millis(1000));
        let start = Instant::now();
        let early = debouncer.push("0131");
        tokio::time::sleep(Duration::from_millis(600)).await;
        let late = debouncer.push("01310");

        let early = early.wait().await;
        assert_eq!(debouncer.fire(early), None);

        let late = late.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(1600));
        assert_eq!(debouncer.fire(late), Some("01310"));
    }
}
