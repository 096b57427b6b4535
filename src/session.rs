//! Playback of a single animation
//!
//! A session is a state machine advanced by [`AnimationSession::step`]. It
//! never touches hardware itself: each step tells the caller whether to push
//! a frame, how long to wait, or that playback is over.
//!
//! ```text
//! Active ──(active elapsed)──▶ Hold ──(hold elapsed)──▶ Done
//!    └──────────(interrupt)────────┴──────────────────────▶ Done
//! ```

use embassy_time::{Duration, Instant};

use crate::animation::{AnimationSlot, AnimationSpec};
use crate::button::ButtonId;
use crate::config::Timings;
use crate::frame::Frame;
use crate::rng::SessionRng;

/// Session state, strictly moving forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Moving animation, one frame per frame interval
    Active,
    /// Terminal frame stays on screen
    Hold,
    Done,
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome<T = ButtonId> {
    Completed,
    /// Cut short by an input, which the caller should act on next
    Interrupted(T),
}

/// What the caller must do after a step
#[derive(Debug, PartialEq, Eq)]
pub enum Step<'a, T = ButtonId> {
    /// Push `frame` to the display, then sleep for `sleep`
    Draw { frame: &'a Frame, sleep: Duration },
    /// Nothing to draw, sleep for the given time
    Wait(Duration),
    /// Active phase just ended and hold started; step again immediately
    Transition,
    Done(SessionOutcome<T>),
}

/// One playback of an animation
#[derive(Debug, Clone)]
pub struct AnimationSession {
    spec: AnimationSpec,
    slot: AnimationSlot,
    start: Instant,
    phase: Phase,
    hold_start: Instant,
    hold_drawn: bool,
    frame_interval: Duration,
    hold_poll: Duration,
    frame: Frame,
}

impl AnimationSession {
    /// Start a session at `start`. The animation parameters are drawn from a
    /// generator seeded with `seed`, so equal seeds give equal frames.
    pub fn new(spec: AnimationSpec, start: Instant, seed: u64, timings: &Timings) -> Self {
        let mut rng = SessionRng::new(seed);
        Self {
            slot: spec.animation.to_slot(&mut rng),
            spec,
            start,
            phase: Phase::Active,
            hold_start: start,
            hold_drawn: false,
            frame_interval: timings.frame_interval,
            hold_poll: timings.hold_poll,
            frame: Frame::new(),
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    pub const fn start(&self) -> Instant {
        self.start
    }

    pub fn slot(&self) -> &AnimationSlot {
        &self.slot
    }

    /// Advance the session to `now`.
    ///
    /// `interrupt` is called at most once, and never on the tick where the
    /// active phase ends. Stepping a finished session reports `Completed`.
    pub fn step<T>(&mut self, now: Instant, interrupt: impl FnOnce() -> Option<T>) -> Step<'_, T> {
        match self.phase {
            Phase::Active => self.step_active(now, interrupt),
            Phase::Hold => self.step_hold(now, interrupt),
            Phase::Done => Step::Done(SessionOutcome::Completed),
        }
    }

    fn step_active<T>(&mut self, now: Instant, interrupt: impl FnOnce() -> Option<T>) -> Step<'_, T> {
        let elapsed = now.saturating_duration_since(self.start);
        let Some(remaining) = time_left(self.spec.active, elapsed) else {
            return match self.spec.hold {
                Some(_) => {
                    self.phase = Phase::Hold;
                    self.hold_start = now;
                    Step::Transition
                }
                None => self.finish(SessionOutcome::Completed),
            };
        };

        if let Some(input) = interrupt() {
            return self.finish(SessionOutcome::Interrupted(input));
        }

        self.frame.clear();
        self.slot.render(elapsed, &mut self.frame);
        Step::Draw {
            frame: &self.frame,
            sleep: self.frame_interval.min(remaining),
        }
    }

    fn step_hold<T>(&mut self, now: Instant, interrupt: impl FnOnce() -> Option<T>) -> Step<'_, T> {
        let hold = self.spec.hold.unwrap_or(Duration::from_ticks(0));
        let elapsed = now.saturating_duration_since(self.hold_start);
        let Some(remaining) = time_left(hold, elapsed) else {
            return self.finish(SessionOutcome::Completed);
        };

        if let Some(input) = interrupt() {
            return self.finish(SessionOutcome::Interrupted(input));
        }

        let sleep = self.hold_poll.min(remaining);
        if self.hold_drawn {
            return Step::Wait(sleep);
        }

        self.hold_drawn = true;
        self.frame.clear();
        self.slot.render_hold(&mut self.frame);
        Step::Draw {
            frame: &self.frame,
            sleep,
        }
    }

    fn finish<T>(&mut self, outcome: SessionOutcome<T>) -> Step<'_, T> {
        self.phase = Phase::Done;
        Step::Done(outcome)
    }
}

/// Time left in a phase of length `total`, `None` once it is over
fn time_left(total: Duration, elapsed: Duration) -> Option<Duration> {
    total
        .checked_sub(elapsed)
        .filter(|left| *left > Duration::from_ticks(0))
}

/// How the startup animation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootOutcome {
    Completed,
    /// A button was held; boot was cut short
    Aborted,
}

impl From<SessionOutcome<()>> for BootOutcome {
    fn from(outcome: SessionOutcome<()>) -> Self {
        match outcome {
            SessionOutcome::Completed => Self::Completed,
            SessionOutcome::Interrupted(()) => Self::Aborted,
        }
    }
}

/// Session for the startup animation.
///
/// It has no hold phase and takes a plain yes/no stop check instead of a
/// button, since boot never hands a press on to the main loop.
#[derive(Debug, Clone)]
pub struct BootSession {
    inner: AnimationSession,
}

impl BootSession {
    pub fn new(spec: AnimationSpec, start: Instant, seed: u64, timings: &Timings) -> Self {
        Self {
            inner: AnimationSession::new(spec.with_hold(None), start, seed, timings),
        }
    }

    pub fn step(&mut self, now: Instant, stop: impl FnOnce() -> bool) -> Step<'_, ()> {
        self.inner.step(now, || stop().then_some(()))
    }

    pub const fn phase(&self) -> Phase {
        self.inner.phase()
    }
}
