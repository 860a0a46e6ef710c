//! Wall-clock driver for [`game_core::Countdown`].

use std::time::Duration;

use game_core::{Countdown, TickOutcome, TurnTag};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Messages from the timer task, tagged with the turn and the restart
/// generation they were started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick {
        tag: TurnTag,
        generation: u64,
        remaining: u32,
    },
    Expired {
        tag: TurnTag,
        generation: u64,
    },
}

impl TimerEvent {
    pub fn generation(&self) -> u64 {
        match self {
            TimerEvent::Tick { generation, .. } | TimerEvent::Expired { generation, .. } => {
                *generation
            }
        }
    }
}

/// One-second countdown running in its own task.
///
/// At most one countdown runs at a time: restarting or stopping aborts the
/// previous task and bumps the generation, so events the old task already
/// queued fail [`CountdownTimer::is_current`].
pub struct CountdownTimer {
    events: mpsc::UnboundedSender<TimerEvent>,
    task: Option<JoinHandle<()>>,
    tag: Option<TurnTag>,
    generation: u64,
}

impl CountdownTimer {
    pub fn new(events: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            events,
            task: None,
            tag: None,
            generation: 0,
        }
    }

    /// Counts `seconds` down for the turn `tag`. Zero seconds starts nothing.
    pub fn restart(&mut self, tag: TurnTag, seconds: u32) {
        self.stop();
        if seconds == 0 {
            return;
        }

        let events = self.events.clone();
        let generation = self.generation;
        self.tag = Some(tag);
        self.task = Some(tokio::spawn(async move {
            let mut countdown = Countdown::new(seconds);
            countdown.restart(seconds);

            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.tick().await;

            loop {
                interval.tick().await;
                let event = match countdown.tick() {
                    TickOutcome::Running(remaining) => TimerEvent::Tick {
                        tag,
                        generation,
                        remaining,
                    },
                    TickOutcome::Expired => TimerEvent::Expired { tag, generation },
                    TickOutcome::Idle => break,
                };
                let expired = matches!(event, TimerEvent::Expired { .. });
                if events.send(event).is_err() || expired {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.tag = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Whether an event came from the countdown started by the latest restart.
    pub fn is_current(&self, generation: u64) -> bool {
        self.tag.is_some() && generation == self.generation
    }

    /// Turn the running countdown belongs to.
    pub fn running_for(&self) -> Option<TurnTag> {
        self.tag
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAG: TurnTag = TurnTag { round: 1, nonce: 0 };

    fn tick(generation: u64, remaining: u32) -> TimerEvent {
        TimerEvent::Tick {
            tag: TAG,
            generation,
            remaining,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn counts_down_then_expires_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = CountdownTimer::new(tx);

        timer.restart(TAG, 3);
        let first = rx.recv().await.unwrap();
        let generation = first.generation();

        assert_eq!(first, tick(generation, 2));
        assert_eq!(rx.recv().await, Some(tick(generation, 1)));
        assert_eq!(
            rx.recv().await,
            Some(TimerEvent::Expired { tag: TAG, generation })
        );
        assert!(timer.is_current(generation));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_replaces_previous_countdown() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = CountdownTimer::new(tx);
        let next = TurnTag { round: 1, nonce: 1 };

        timer.restart(TAG, 2);
        timer.restart(next, 2);

        let first = rx.recv().await.unwrap();
        let generation = first.generation();

        assert_eq!(
            first,
            TimerEvent::Tick {
                tag: next,
                generation,
                remaining: 1
            }
        );
        assert!(timer.is_current(generation));
        assert_eq!(
            rx.recv().await,
            Some(TimerEvent::Expired {
                tag: next,
                generation
            })
        );
        assert_eq!(timer.running_for(), Some(next));
    }

    #[tokio::test(start_paused = true)]
    async fn events_queued_before_restart_are_not_current() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = CountdownTimer::new(tx);

        timer.restart(TAG, 1);
        tokio::time::sleep(Duration::from_millis(1_500)).await;

        // Same turn, new budget: the expiry already sits in the channel.
        timer.restart(TAG, 40);
        let queued = rx.recv().await.unwrap();

        assert!(matches!(queued, TimerEvent::Expired { .. }));
        assert!(!timer.is_current(queued.generation()));
        assert_eq!(timer.running_for(), Some(TAG));
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_timer_sends_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = CountdownTimer::new(tx);

        timer.restart(TAG, 2);
        timer.stop();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(rx.try_recv().is_err());
        assert_eq!(timer.running_for(), None);
        assert!(!timer.is_current(0));
    }
}
