//! Main control loop
//!
//! The controller owns every port and all loop state. Each [`Controller::tick`]
//! either puts the toy to sleep, plays one animation to its end, or yields
//! briefly when nothing happened.

use embassy_time::Instant;
use log::{debug, info, warn};

use crate::animation::AnimationSpec;
use crate::brightness::BrightnessControl;
use crate::button::{AuxButton, ButtonId};
use crate::config::ToyConfig;
use crate::debouncer::Debouncer;
use crate::error::Error;
use crate::idle_timer::IdleTimer;
use crate::rng::SessionRng;
use crate::session::{AnimationSession, BootOutcome, BootSession, SessionOutcome, Step};
use crate::{Clock, InputPort, MatrixDisplay, SoundPort};

/// What a single loop iteration did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No input, the loop yielded
    Idle,
    /// The toy slept and has been woken again
    Slept,
    /// An accepted button has no animation
    Unmapped(ButtonId),
    /// An animation ran to its end
    Played {
        button: ButtonId,
        outcome: SessionOutcome,
    },
}

pub struct Controller<I, D, S, C>
where
    I: InputPort,
    D: MatrixDisplay,
    S: SoundPort,
    C: Clock,
{
    debouncer: Debouncer<I>,
    idle: IdleTimer,
    display: D,
    sound: S,
    clock: C,
    config: ToyConfig,
    brightness: BrightnessControl,
    /// Button whose animation is playing
    current: Option<ButtonId>,
    /// Button that interrupted the previous animation, played next tick
    pending: Option<ButtonId>,
    rng: SessionRng,
}

impl<I, D, S, C> Controller<I, D, S, C>
where
    I: InputPort,
    D: MatrixDisplay,
    S: SoundPort,
    C: Clock,
{
    pub fn new(input: I, display: D, sound: S, clock: C, config: ToyConfig) -> Self {
        Self {
            debouncer: Debouncer::with_window(input, config.timings.debounce),
            idle: IdleTimer::new(),
            display,
            sound,
            clock,
            brightness: BrightnessControl::new(config.brightness),
            current: None,
            pending: None,
            rng: SessionRng::new(config.seed),
            config,
        }
    }

    /// Apply brightness and volume, play the startup animation and arm the
    /// idle timer.
    pub fn start(&mut self) -> Option<BootOutcome> {
        if let Err(err) = self.display.set_brightness(self.brightness.level()) {
            warn!("setting brightness: {}", err);
        }
        if let Err(err) = self.sound.set_volume(self.config.volume) {
            warn!("setting volume: {}", err);
        }

        let boot = self.config.boot;
        let outcome = boot.map(|spec| self.play_boot(spec));
        self.clear_display();
        self.idle.reset(self.clock.now());
        info!("ready");
        outcome
    }

    /// Start up, then run the loop forever
    pub fn run(&mut self) -> ! {
        self.start();
        loop {
            self.tick();
        }
    }

    /// Run one iteration of the loop
    pub fn tick(&mut self) -> Tick {
        let now = self.clock.now();
        if self.idle.should_sleep(now, self.config.timings.idle_timeout) {
            self.enter_sleep();
            self.pending = None;
            return Tick::Slept;
        }

        adjust_brightness(
            &mut self.debouncer,
            &mut self.brightness,
            &mut self.display,
            now,
        );

        let button = self.pending.take().or_else(|| self.debouncer.scan(now));
        let tick = match button {
            Some(button) => self.dispatch(button, now),
            None => Tick::Idle,
        };

        if !matches!(tick, Tick::Played { .. }) {
            self.clock.sleep(self.config.timings.idle_poll);
        }
        tick
    }

    fn dispatch(&mut self, button: ButtonId, now: Instant) -> Tick {
        self.idle.reset(now);
        if let Err(err) = self.sound.stop() {
            warn!("stopping sound: {}", err);
        }

        let Some(spec) = self.config.animations.get(button).copied() else {
            debug!("{}", Error::UnknownButtonMapping(button));
            return Tick::Unmapped(button);
        };

        info!("button {}: playing {}", button, spec.animation.as_str());
        self.current = Some(button);
        let outcome = self.play(spec);
        self.current = None;
        match outcome {
            SessionOutcome::Completed => {
                debug!("{} completed", spec.animation.as_str());
                self.clear_display();
            }
            SessionOutcome::Interrupted(next) => {
                debug!("{} interrupted by {}", spec.animation.as_str(), next);
                if let Err(err) = self.sound.stop() {
                    warn!("stopping sound: {}", err);
                }
                self.pending = Some(next);
            }
        }

        self.idle.reset(self.clock.now());
        Tick::Played { button, outcome }
    }

    /// Run one animation session until it completes or a button interrupts it
    fn play(&mut self, spec: AnimationSpec) -> SessionOutcome {
        self.start_sound(&spec);
        let seed = self.rng.next_u64();
        let mut session =
            AnimationSession::new(spec, self.clock.now(), seed, &self.config.timings);

        loop {
            let now = self.clock.now();
            let step = session.step(now, || {
                adjust_brightness(
                    &mut self.debouncer,
                    &mut self.brightness,
                    &mut self.display,
                    now,
                );
                self.debouncer.scan(now)
            });
            if let Some(outcome) = self.perform(step) {
                return outcome;
            }
        }
    }

    /// Play the startup animation, stopping early while any button is held
    fn play_boot(&mut self, spec: AnimationSpec) -> BootOutcome {
        self.start_sound(&spec);
        let seed = self.rng.next_u64();
        let mut session = BootSession::new(spec, self.clock.now(), seed, &self.config.timings);

        let outcome: BootOutcome = loop {
            let now = self.clock.now();
            let step = session.step(now, || self.debouncer.any_raw_pressed());
            if let Some(outcome) = self.perform(step) {
                break outcome.into();
            }
        };

        if outcome == BootOutcome::Aborted {
            if let Err(err) = self.sound.stop() {
                warn!("stopping sound: {}", err);
            }
        }
        info!("boot {:?}", outcome);
        outcome
    }

    /// Carry out the I/O a session step asks for
    fn perform<T>(&mut self, step: Step<'_, T>) -> Option<SessionOutcome<T>> {
        match step {
            Step::Draw { frame, sleep } => {
                if let Err(err) = self.display.render_frame(frame) {
                    warn!("rendering frame: {}", err);
                }
                self.clock.sleep(sleep);
                None
            }
            Step::Wait(sleep) => {
                self.clock.sleep(sleep);
                None
            }
            Step::Transition => None,
            Step::Done(outcome) => Some(outcome),
        }
    }

    /// Blank the display and wait in low power for a press.
    ///
    /// Returns only after the waking button has been released, so the press
    /// does not also start an animation.
    fn enter_sleep(&mut self) {
        info!("entering sleep");
        self.clear_display();
        if let Err(err) = self.display.enter_low_power() {
            warn!("entering low power: {}", err);
        }

        while !self.debouncer.any_raw_pressed() {
            self.clock.sleep(self.config.timings.sleep_poll);
        }
        self.debouncer
            .wait_for_release(&mut self.clock, self.config.timings.release_poll);

        if let Err(err) = self.display.exit_low_power() {
            warn!("leaving low power: {}", err);
        }
        self.idle.reset(self.clock.now());
        info!("woke from sleep");
    }

    fn start_sound(&mut self, spec: &AnimationSpec) {
        if let Some(sound) = spec.sound {
            if let Err(err) = self.sound.play(sound) {
                warn!("playing {}: {}", sound, err);
            }
        }
    }

    fn clear_display(&mut self) {
        if let Err(err) = self.display.clear_display() {
            warn!("clearing display: {}", err);
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn idle_timer(&self) -> &IdleTimer {
        &self.idle
    }

    pub fn debouncer(&self) -> &Debouncer<I> {
        &self.debouncer
    }

    /// Button being played; `None` between ticks
    pub fn current_button(&self) -> Option<ButtonId> {
        self.current
    }

    /// Button queued by the last interruption
    pub fn pending(&self) -> Option<ButtonId> {
        self.pending
    }

    pub fn brightness(&self) -> u8 {
        self.brightness.level()
    }
}

/// Step brightness for every held auxiliary button
fn adjust_brightness<I: InputPort, D: MatrixDisplay>(
    debouncer: &mut Debouncer<I>,
    brightness: &mut BrightnessControl,
    display: &mut D,
    now: Instant,
) {
    for button in AuxButton::ALL {
        if !debouncer.poll_aux(button) {
            continue;
        }
        if let Some(level) = brightness.press(button, now) {
            debug!("brightness {}", level);
            if let Err(err) = display.set_brightness(level) {
                warn!("setting brightness: {}", err);
            }
        }
    }
}
