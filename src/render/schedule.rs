use std::time::Duration;

/// Quiet period after the last trigger before a redraw runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// A pending redraw. Only the most recently scheduled one can ever run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledRedraw {
    pub id: u64,
    pub due: Duration,
}

/// Trailing-edge debounce for map redraws.
///
/// Time is an offset from an arbitrary origin chosen by the caller (session start),
/// which keeps the scheduler usable where no monotonic clock exists.
#[derive(Debug, Clone)]
pub struct RedrawScheduler {
    delay: Duration,
    pending: Option<ScheduledRedraw>,
    next_id: u64,
}

impl Default for RedrawScheduler {
    fn default() -> Self { Self::new(DEFAULT_DEBOUNCE) }
}

impl RedrawScheduler {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None, next_id: 0 }
    }

    pub fn delay(&self) -> Duration { self.delay }

    /// Schedule a redraw at `now + delay`, superseding any pending one.
    pub fn schedule(&mut self, now: Duration) -> ScheduledRedraw {
        let task = ScheduledRedraw { id: self.next_id, due: now + self.delay };
        self.next_id += 1;
        self.pending = Some(task);
        task
    }

    /// Drop the pending redraw, if any.
    pub fn cancel(&mut self) -> Option<ScheduledRedraw> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<ScheduledRedraw> { self.pending }

    /// Take the pending redraw if it is due at `now`. Each scheduled task fires at most once.
    pub fn poll(&mut self, now: Duration) -> Option<ScheduledRedraw> {
        match self.pending {
            Some(task) if task.due <= now => self.pending.take(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    #[test]
    fn fires_once_after_delay() {
        let mut scheduler = RedrawScheduler::default();
        scheduler.schedule(ms(0));
        assert_eq!(scheduler.poll(ms(99)), None);
        assert!(scheduler.poll(ms(100)).is_some());
        assert_eq!(scheduler.poll(ms(200)), None);
    }

    #[test]
    fn burst_coalesces_into_latest_task() {
        let mut scheduler = RedrawScheduler::new(ms(100));
        let mut last = None;
        for t in [0, 20, 40, 60, 80] {
            last = Some(scheduler.schedule(ms(t)));
        }
        // The first trigger's deadline has passed but it was superseded.
        assert_eq!(scheduler.poll(ms(150)), None);
        let fired = scheduler.poll(ms(180)).unwrap();
        assert_eq!(Some(fired), last);
        assert_eq!(fired.id, 4);
        assert_eq!(scheduler.poll(ms(1000)), None);
    }

    #[test]
    fn cancel_drops_pending() {
        let mut scheduler = RedrawScheduler::default();
        scheduler.schedule(ms(0));
        assert!(scheduler.cancel().is_some());
        assert_eq!(scheduler.pending(), None);
        assert_eq!(scheduler.poll(ms(500)), None);
    }
}
