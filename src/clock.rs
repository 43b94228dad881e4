//! Frame pacing.

use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Admits one frame at a time at a fixed rate
#[allow(async_fn_in_trait)]
pub trait FrameClock {
    /// Wait until the next frame is due
    async fn tick(&mut self);
}

/// A clock backed by a tokio interval
pub struct IntervalClock {
    timer: Interval,
}

impl IntervalClock {
    /// One frame every `period`; the first tick completes immediately
    pub fn new(period: Duration) -> Self {
        let mut timer = interval(period);
        // A slow frame pushes the schedule back instead of bursting to catch up
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { timer }
    }
}

impl FrameClock for IntervalClock {
    async fn tick(&mut self) {
        self.timer.tick().await;
    }
}
