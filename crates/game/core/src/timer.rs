//! Turn countdown.
//!
//! [`Countdown`] is the clock-free half of the turn timer: it only counts.
//! Something else (the runtime's timer task, or a test) calls [`Countdown::tick`]
//! once per second.

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown is paused or already expired; nothing happened.
    Idle,
    /// One second elapsed and time remains.
    Running(u32),
    /// The countdown just reached zero. Reported once per run.
    Expired,
}

/// Per-turn countdown in whole seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    active: bool,
}

impl Countdown {
    /// A paused countdown holding `seconds`.
    pub const fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            active: false,
        }
    }

    /// Advances one second.
    ///
    /// The tick that brings the count to zero returns [`TickOutcome::Expired`]
    /// and deactivates the countdown, so expiry cannot fire twice.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.active {
            return TickOutcome::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.active = false;
            TickOutcome::Expired
        } else {
            TickOutcome::Running(self.remaining)
        }
    }

    pub fn pause(&mut self) {
        self.active = false;
    }

    /// Sets the count and runs it. A zero count stays inactive.
    pub fn restart(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.active = seconds > 0;
    }

    /// Sets the count without running it.
    pub fn reset(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.active = false;
    }

    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_run_expires_exactly_once() {
        let mut countdown = Countdown::new(10);
        countdown.restart(10);

        let outcomes: Vec<_> = (0..12).map(|_| countdown.tick()).collect();

        let expired = outcomes
            .iter()
            .filter(|outcome| **outcome == TickOutcome::Expired)
            .count();
        assert_eq!(expired, 1);
        assert_eq!(outcomes[9], TickOutcome::Expired);
        assert_eq!(outcomes[10], TickOutcome::Idle);
        assert_eq!(countdown.remaining(), 0);
        assert!(!countdown.is_active());
    }

    #[test]
    fn paused_countdown_holds_its_value() {
        let mut countdown = Countdown::new(5);
        countdown.restart(5);
        countdown.tick();
        countdown.pause();

        assert_eq!(countdown.tick(), TickOutcome::Idle);
        assert_eq!(countdown.remaining(), 4);
    }

    #[test]
    fn restart_with_zero_never_fires() {
        let mut countdown = Countdown::default();
        countdown.restart(0);

        assert!(!countdown.is_active());
        assert_eq!(countdown.tick(), TickOutcome::Idle);
    }

    #[test]
    fn reset_stops_and_reloads() {
        let mut countdown = Countdown::new(3);
        countdown.restart(3);
        countdown.tick();
        countdown.reset(10);

        assert_eq!(countdown.remaining(), 10);
        assert_eq!(countdown.tick(), TickOutcome::Idle);
    }
}
