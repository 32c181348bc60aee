//! Countdown clock for challenge sessions.
//!
//! [`Countdown`] is a pure value: it never schedules anything itself. The
//! runtime drives it with one [`Countdown::tick`] per elapsed second, and
//! tests advance it synchronously. Expiry is reported exactly once per
//! started countdown.

/// Result of advancing a [`Countdown`] by one second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickStatus {
    /// The countdown is not running; nothing changed.
    Idle,
    /// Still counting down.
    Running { remaining: u32 },
    /// Reached zero on this tick. The countdown has stopped itself.
    Expired,
}

/// One-second-granularity countdown with idempotent restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    /// A countdown that is not running. Practice sessions keep this state.
    pub const fn idle() -> Self {
        Self {
            remaining: 0,
            running: false,
        }
    }

    pub fn started(limit_secs: u32) -> Self {
        Self {
            remaining: limit_secs,
            running: true,
        }
    }

    /// Begins counting down from `limit_secs`. Any previous countdown is
    /// discarded first, so restarting can never double-expire.
    pub fn start(&mut self, limit_secs: u32) {
        self.remaining = limit_secs;
        self.running = true;
    }

    /// Halts the countdown. Safe to call when not running.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Advances by one second.
    ///
    /// Returns [`TickStatus::Expired`] on the tick that reaches zero and
    /// stops the countdown, so later ticks report [`TickStatus::Idle`].
    pub fn tick(&mut self) -> TickStatus {
        if !self.running {
            return TickStatus::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            TickStatus::Expired
        } else {
            TickStatus::Running {
                remaining: self.remaining,
            }
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_countdown_does_not_tick() {
        let mut clock = Countdown::idle();
        assert_eq!(clock.tick(), TickStatus::Idle);
        assert_eq!(clock.remaining(), 0);
    }

    #[test]
    fn counts_down_and_expires_once() {
        let mut clock = Countdown::started(3);

        assert_eq!(clock.tick(), TickStatus::Running { remaining: 2 });
        assert_eq!(clock.tick(), TickStatus::Running { remaining: 1 });
        assert_eq!(clock.tick(), TickStatus::Expired);
        assert!(!clock.is_running());

        // Expiry never fires twice.
        assert_eq!(clock.tick(), TickStatus::Idle);
    }

    #[test]
    fn stop_before_tick_never_expires() {
        let mut clock = Countdown::started(1);
        clock.stop();
        assert_eq!(clock.tick(), TickStatus::Idle);
    }

    #[test]
    fn restart_discards_previous_countdown() {
        let mut clock = Countdown::started(1);
        clock.stop();
        clock.start(5);

        assert_eq!(clock.tick(), TickStatus::Running { remaining: 4 });
        assert_eq!(clock.remaining(), 4);
    }

    #[test]
    fn full_limit_expires_on_final_tick() {
        let mut clock = Countdown::started(120);
        let mut expirations = 0;
        for _ in 0..120 {
            if clock.tick() == TickStatus::Expired {
                expirations += 1;
            }
        }
        assert_eq!(expirations, 1);
        assert_eq!(clock.remaining(), 0);
    }
}
