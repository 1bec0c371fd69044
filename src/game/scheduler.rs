use crate::consts;
use std::fmt;
use std::time::{Duration, Instant};

/// Return the time between ticks for a game with the given score.  The period
/// starts at [`BASE_TICK_PERIOD`][consts::BASE_TICK_PERIOD] and shrinks
/// linearly with the score until it reaches
/// [`MIN_TICK_PERIOD`][consts::MIN_TICK_PERIOD].
pub(crate) fn tick_interval(score: u32) -> Duration {
    let speedup = consts::SPEEDUP_PER_POINT
        .saturating_mul(score)
        .min(consts::MAX_SPEEDUP);
    consts::BASE_TICK_PERIOD
        .saturating_sub(speedup)
        .max(consts::MIN_TICK_PERIOD)
}

/// Identifies one scheduled tick.  Every call to [`TickScheduler::schedule()`]
/// issues a new ID.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct TickId(u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PendingTick {
    pub(crate) id: TickId,
    pub(crate) due: Instant,
}

/// Keeps track of when the next update of a game should happen.  At most one
/// tick is pending at any time.
///
/// The scheduler never reads the clock itself; callers pass in the current
/// time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct TickScheduler {
    pending: Option<PendingTick>,
    issued: u64,
}

impl TickScheduler {
    pub(crate) fn new() -> TickScheduler {
        TickScheduler::default()
    }

    /// Schedule a tick for `interval` after `now`, replacing any tick that is
    /// already pending
    pub(crate) fn schedule(&mut self, now: Instant, interval: Duration) -> TickId {
        if let Some(old) = self.pending.take() {
            log::debug!("Tick {} replaced before it was due", old.id);
        }
        self.issued += 1;
        let id = TickId(self.issued);
        self.pending = Some(PendingTick {
            id,
            due: now + interval,
        });
        id
    }

    /// Cancel the pending tick, if any, and return its ID
    pub(crate) fn cancel(&mut self) -> Option<TickId> {
        self.pending.take().map(|p| p.id)
    }

    pub(crate) fn pending(&self) -> Option<PendingTick> {
        self.pending
    }

    /// Return how long until the pending tick is due, or `None` if nothing is
    /// scheduled.  A tick that is overdue has zero time remaining.
    pub(crate) fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending().map(|p| p.due.saturating_duration_since(now))
    }

    /// If the pending tick is due at or before `now`, remove it and return its
    /// ID
    pub(crate) fn take_due(&mut self, now: Instant) -> Option<TickId> {
        let pending = self.pending.filter(|p| p.due <= now)?;
        self.pending = None;
        Some(pending.id)
    }
}
