//! Button debouncing
//!
//! A press is accepted when the button reads pressed and the previous
//! accepted press of the same button is more than one debounce window old.
//! A held button is therefore re-accepted once per window.

use embassy_time::{Duration, Instant};
use log::warn;

use crate::button::{AuxButton, ButtonId};
use crate::config::DEBOUNCE;
use crate::{Clock, InputPort};

/// Debounce bookkeeping for one button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Time of the last accepted press, `None` until the first one
    pub last_accepted_at: Option<Instant>,
}

/// Turns raw button reads into debounced activation events
pub struct Debouncer<I: InputPort> {
    input: I,
    states: [ButtonState; ButtonId::COUNT],
    window: Duration,
}

impl<I: InputPort> Debouncer<I> {
    /// Create a debouncer with the default 50 ms window
    pub fn new(input: I) -> Self {
        Self::with_window(input, DEBOUNCE)
    }

    pub fn with_window(input: I, window: Duration) -> Self {
        Self {
            input,
            states: [ButtonState::default(); ButtonId::COUNT],
            window,
        }
    }

    /// Raw, undebounced read. Read failures count as not pressed.
    pub fn poll(&mut self, button: ButtonId) -> bool {
        match self.input.read_raw(button) {
            Ok(pressed) => pressed,
            Err(err) => {
                warn!("reading button {}: {}", button, err);
                false
            }
        }
    }

    /// Raw read of an auxiliary button
    pub fn poll_aux(&mut self, button: AuxButton) -> bool {
        match self.input.read_aux(button) {
            Ok(pressed) => pressed,
            Err(err) => {
                warn!("reading {:?}: {}", button, err);
                false
            }
        }
    }

    /// Accept a press of `button` if it is held and outside the debounce
    /// window of its previous accepted press.
    pub fn try_accept(&mut self, button: ButtonId, now: Instant) -> bool {
        if !self.poll(button) {
            return false;
        }

        let state = &mut self.states[button.index()];
        let outside_window = match state.last_accepted_at {
            None => true,
            Some(last) => now
                .checked_duration_since(last)
                .is_some_and(|elapsed| elapsed > self.window),
        };
        if outside_window {
            state.last_accepted_at = Some(now);
        }
        outside_window
    }

    /// Return the highest priority button with an accepted press
    pub fn scan(&mut self, now: Instant) -> Option<ButtonId> {
        ButtonId::PRIORITY
            .into_iter()
            .find(|button| self.try_accept(*button, now))
    }

    /// Whether any play button is held, without debouncing
    pub fn any_raw_pressed(&mut self) -> bool {
        ButtonId::PRIORITY
            .into_iter()
            .any(|button| self.poll(button))
    }

    /// Wait until no play button is held, polling every `interval`
    pub fn wait_for_release<C: Clock>(&mut self, clock: &mut C, interval: Duration) {
        while self.any_raw_pressed() {
            clock.sleep(interval);
        }
    }

    /// Forget all accepted presses
    pub fn reset(&mut self) {
        self.states = [ButtonState::default(); ButtonId::COUNT];
    }

    pub fn state(&self, button: ButtonId) -> ButtonState {
        self.states[button.index()]
    }

    pub fn last_accepted_at(&self, button: ButtonId) -> Option<Instant> {
        self.states[button.index()].last_accepted_at
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}
