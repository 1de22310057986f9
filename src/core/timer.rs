/// What a single `tick()` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting; seconds left after this tick.
    Running(u32),
    /// This tick reached zero. Reported once.
    Expired,
    /// Already at zero before this tick.
    AlreadyExpired,
    /// The timer is not running.
    Stopped,
}

/// One-second countdown. Saturates at zero and reports expiry once.
#[derive(Debug, Clone, Default)]
pub struct CountdownTimer {
    remaining: u32,
    running: bool,
    expired: bool,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero-length countdown expires on its first tick.
    pub fn start(&mut self, duration_secs: u32) {
        self.remaining = duration_secs;
        self.running = true;
        self.expired = false;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.expired {
            return TickOutcome::AlreadyExpired;
        }
        if !self.running {
            return TickOutcome::Stopped;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.expired = true;
            self.running = false;
            return TickOutcome::Expired;
        }
        TickOutcome::Running(self.remaining)
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}
