use std::time::{Duration, Instant};

use mazetrace_core::Trace;
use serde::{Deserialize, Serialize};

use crate::AnimationStep;

/// Interval between two replay ticks, in milliseconds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "u16", into = "u16")]
#[display("{_0} ms")]
pub struct Cadence(u16);

/// A cadence outside [`Cadence::MIN`]..=[`Cadence::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cadence {_0} ms is outside {}..={} ms", Cadence::MIN.0, Cadence::MAX.0)]
pub struct CadenceError(#[error(not(source))] u16);

impl Cadence {
    /// Fastest allowed cadence.
    pub const MIN: Self = Self(10);
    /// Slowest allowed cadence.
    pub const MAX: Self = Self(200);
    /// Cadence used when nothing else is configured.
    pub const DEFAULT: Self = Self(50);

    /// Creates a cadence from milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`CadenceError`] if `millis` is outside `10..=200`.
    pub const fn new(millis: u16) -> Result<Self, CadenceError> {
        if millis < Self::MIN.0 || millis > Self::MAX.0 {
            return Err(CadenceError(millis));
        }
        Ok(Self(millis))
    }

    /// Creates a cadence, clamping `millis` into the allowed range.
    #[must_use]
    pub fn clamped(millis: u16) -> Self {
        Self(millis.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// The cadence in milliseconds.
    #[must_use]
    #[inline]
    pub const fn millis(self) -> u16 {
        self.0
    }

    /// The cadence as a [`Duration`].
    #[must_use]
    #[inline]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u16> for Cadence {
    type Error = CadenceError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cadence> for u16 {
    fn from(cadence: Cadence) -> Self {
        cadence.0
    }
}

/// Identifies one run of the scheduler.
///
/// A token is only honoured while its run is still the current one; any
/// `start` or `cancel` retires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(u64);

/// Where the scheduler is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum ReplayStatus {
    /// No replay has run since the last reset or cancel.
    #[default]
    Idle,
    /// Ticks are being scheduled.
    Running,
    /// The step reached its terminal value and scheduling stopped.
    Finished,
}

/// Result of delivering a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TickOutcome {
    /// The step advanced to the contained value.
    Advanced(AnimationStep),
    /// The replay reached its end; no further ticks are scheduled.
    Finished,
    /// The token belongs to a superseded run; nothing changed.
    Stale,
}

/// Errors produced when starting a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ReplayError {
    /// The trace has no visited cells or no path.
    #[display("cannot replay an empty trace")]
    EmptyTrace,
}

/// Drives an [`AnimationStep`] from `1` to `trace.len() + 1`.
///
/// The scheduler owns no timer. The caller asks when the next tick is due
/// ([`time_until_next_tick`](Self::time_until_next_tick)) and delivers it
/// through [`poll`](Self::poll) or [`tick`](Self::tick).
#[derive(Debug, Clone)]
pub struct ReplayScheduler {
    step: AnimationStep,
    total: usize,
    cadence: Cadence,
    epoch: u64,
    status: ReplayStatus,
    next_due: Option<Instant>,
}

impl Default for ReplayScheduler {
    fn default() -> Self {
        Self::new(Cadence::default())
    }
}

impl ReplayScheduler {
    /// Creates an idle scheduler.
    #[must_use]
    pub fn new(cadence: Cadence) -> Self {
        Self {
            step: AnimationStep::ZERO,
            total: 0,
            cadence,
            epoch: 0,
            status: ReplayStatus::Idle,
            next_due: None,
        }
    }

    /// The current step.
    #[must_use]
    #[inline]
    pub fn step(&self) -> AnimationStep {
        self.step
    }

    /// The current cadence.
    #[must_use]
    #[inline]
    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// The lifecycle status.
    #[must_use]
    #[inline]
    pub fn status(&self) -> ReplayStatus {
        self.status
    }

    /// Returns `true` while ticks are being scheduled.
    #[must_use]
    #[inline]
    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    /// The step at which the current replay ends.
    #[must_use]
    pub fn terminal_step(&self) -> AnimationStep {
        AnimationStep::new(self.total + 1)
    }

    /// Token of the current run.
    #[must_use]
    pub fn token(&self) -> TickToken {
        TickToken(self.epoch)
    }

    /// Starts replaying `trace`, cancelling any run in progress.
    ///
    /// The step becomes `1` and the first tick is due one cadence after `now`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::EmptyTrace`] if the trace has no visited cells or
    /// no path. The scheduler is left cancelled in that case.
    pub fn start(&mut self, trace: &Trace, now: Instant) -> Result<TickToken, ReplayError> {
        self.cancel();
        if !trace.is_replayable() {
            return Err(ReplayError::EmptyTrace);
        }
        self.epoch += 1;
        self.step = AnimationStep::new(1);
        self.total = trace.len();
        self.status = ReplayStatus::Running;
        self.next_due = Some(now + self.cadence.as_duration());
        log::debug!(
            "replay started: {} ticks at {}",
            self.total + 1,
            self.cadence
        );
        Ok(self.token())
    }

    /// Delivers a tick for the run identified by `token`.
    pub fn tick(&mut self, token: TickToken, now: Instant) -> TickOutcome {
        if token != self.token() || !self.is_running() {
            return TickOutcome::Stale;
        }
        if self.step.get() <= self.total {
            self.step = self.step.next();
            self.next_due = Some(now + self.cadence.as_duration());
            TickOutcome::Advanced(self.step)
        } else {
            self.status = ReplayStatus::Finished;
            self.next_due = None;
            log::debug!("replay finished at step {}", self.step);
            TickOutcome::Finished
        }
    }

    /// Delivers the pending tick if it is due at `now`.
    ///
    /// At most one tick fires per call, so a late frame never replays a burst
    /// of steps.
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        let due = self.next_due?;
        if now < due {
            return None;
        }
        Some(self.tick(self.token(), now))
    }

    /// Time left until the pending tick, or `None` when nothing is scheduled.
    #[must_use]
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Stops scheduling and retires the current token.
    ///
    /// Calling it again, or on an idle scheduler, is harmless. The step keeps
    /// its value until [`reset`](Self::reset) or the next [`start`](Self::start).
    pub fn cancel(&mut self) {
        self.epoch += 1;
        self.next_due = None;
        if self.is_running() {
            self.status = ReplayStatus::Idle;
            log::debug!("replay cancelled at step {}", self.step);
        }
    }

    /// Cancels and rewinds the step to zero.
    pub fn reset(&mut self) {
        self.cancel();
        self.step = AnimationStep::ZERO;
        self.total = 0;
        self.status = ReplayStatus::Idle;
    }

    /// Changes the cadence.
    ///
    /// A pending tick is re-armed one new interval after `now`; the step is
    /// untouched.
    pub fn set_cadence(&mut self, cadence: Cadence, now: Instant) {
        if cadence == self.cadence {
            return;
        }
        self.cadence = cadence;
        if self.next_due.is_some() {
            self.next_due = Some(now + cadence.as_duration());
        }
        log::debug!("replay cadence set to {cadence}");
    }
}
