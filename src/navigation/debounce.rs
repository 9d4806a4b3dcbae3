use std::time::{Duration, Instant};

/// Trailing-edge debounce that sums every value pushed during a burst.
///
/// Each push restarts the quiet period. Once it elapses with no further
/// pushes, [`poll`](TrailingDebounce::poll) hands out the accumulated sum
/// exactly once and the accumulator starts again from zero.
///
#[derive(Debug, Clone)]
pub struct TrailingDebounce {
    quiet_period: Duration,
    sum: f64,
    deadline: Option<Instant>,
}

impl TrailingDebounce {
    pub fn new(quiet_period: Duration) -> Self {
        TrailingDebounce {
            quiet_period,
            sum: 0.0,
            deadline: None,
        }
    }

    /// Add a value to the current burst and restart the quiet period.
    ///
    pub fn push(&mut self, value: f64, now: Instant) {
        self.sum += value;
        self.deadline = Some(now + self.quiet_period);
    }

    /// Return the burst total once the quiet period has elapsed.
    ///
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        match self.deadline {
            Some(at) if at <= now => {
                self.deadline = None;
                Some(std::mem::take(&mut self.sum))
            }
            _ => None,
        }
    }

    /// Drop the current burst without reporting it.
    ///
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.sum = 0.0;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[cfg(test)]
    pub fn sum(&self) -> f64 {
        self.sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn idle_debounce_reports_nothing() {
        let mut debounce = TrailingDebounce::new(ms(50));
        assert!(!debounce.is_pending());
        assert_eq!(debounce.poll(Instant::now()), None);
    }

    #[test]
    fn each_push_restarts_quiet_period() {
        let mut debounce = TrailingDebounce::new(ms(50));
        let t0 = Instant::now();
        debounce.push(10.0, t0);
        debounce.push(15.0, t0 + ms(40));
        assert_eq!(debounce.poll(t0 + ms(60)), None);
        assert_eq!(debounce.deadline(), Some(t0 + ms(90)));
        assert_eq!(debounce.poll(t0 + ms(90)), Some(25.0));
    }

    #[test]
    fn sum_is_reported_once_then_reset() {
        let mut debounce = TrailingDebounce::new(ms(50));
        let t0 = Instant::now();
        debounce.push(-70.0, t0);
        assert_eq!(debounce.poll(t0 + ms(50)), Some(-70.0));
        assert_eq!(debounce.poll(t0 + ms(100)), None);
        assert_eq!(debounce.sum(), 0.0);
        debounce.push(5.0, t0 + ms(200));
        assert_eq!(debounce.poll(t0 + ms(250)), Some(5.0));
    }

    #[test]
    fn opposite_values_cancel() {
        let mut debounce = TrailingDebounce::new(ms(50));
        let t0 = Instant::now();
        debounce.push(40.0, t0);
        debounce.push(-40.0, t0 + ms(5));
        assert_eq!(debounce.poll(t0 + ms(55)), Some(0.0));
    }

    #[test]
    fn cancel_discards_burst() {
        let mut debounce = TrailingDebounce::new(ms(50));
        let t0 = Instant::now();
        debounce.push(90.0, t0);
        debounce.cancel();
        assert!(!debounce.is_pending());
        assert_eq!(debounce.poll(t0 + ms(500)), None);
        assert_eq!(debounce.sum(), 0.0);
    }
}
