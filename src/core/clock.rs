use crate::time::{Duration, Instant};

const SECOND: Duration = Duration::from_secs(1);

/// Poll-driven 1 Hz clock.
///
/// Hosts without a timer callback (render loops, frame-paced UIs) call
/// `poll` whenever convenient and forward the returned number of whole
/// seconds to the session as individual ticks. Sub-second remainders carry
/// over to the next poll.
#[derive(Debug, Clone, Default)]
pub struct SecondTicker {
    last: Option<Instant>,
}

impl SecondTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: Instant) {
        self.last = Some(now);
    }

    pub fn stop(&mut self) {
        self.last = None;
    }

    pub fn is_running(&self) -> bool {
        self.last.is_some()
    }

    /// Whole seconds elapsed since the last accounted second.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(last);
        let whole = (elapsed.as_millis() / SECOND.as_millis()).min(u32::MAX as u128) as u32;
        if whole > 0 {
            self.last = Some(last + SECOND * whole);
        }
        whole
    }

    pub fn poll_now(&mut self) -> u32 {
        self.poll(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_remainder() {
        let t0 = Instant::now();
        let mut ticker = SecondTicker::new();
        assert_eq!(ticker.poll(t0), 0);

        ticker.start(t0);
        assert_eq!(ticker.poll(t0 + Duration::from_millis(700)), 0);
        assert_eq!(ticker.poll(t0 + Duration::from_millis(1400)), 1);
        // 400 ms carried from the previous poll plus 700 more.
        assert_eq!(ticker.poll(t0 + Duration::from_millis(2100)), 1);
        assert_eq!(ticker.poll(t0 + Duration::from_millis(5000)), 3);
    }

    #[test]
    fn stop_halts_ticks() {
        let t0 = Instant::now();
        let mut ticker = SecondTicker::new();
        ticker.start(t0);
        ticker.stop();
        assert!(!ticker.is_running());
        assert_eq!(ticker.poll(t0 + Duration::from_secs(10)), 0);
    }

    #[test]
    fn earlier_instant_is_zero() {
        let t0 = Instant::now() + Duration::from_secs(5);
        let mut ticker = SecondTicker::new();
        ticker.start(t0);
        assert_eq!(ticker.poll(t0 - Duration::from_secs(2)), 0);
    }
}
