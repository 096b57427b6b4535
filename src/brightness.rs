//! Brightness adjustment from the board's auxiliary buttons
//!
//! Holding a button keeps stepping, but no faster than the repeat interval.

use embassy_time::{Duration, Instant};

use crate::button::AuxButton;

/// Default brightness (50 %)
pub const DEFAULT_BRIGHTNESS: u8 = 128;
/// Lowest reachable brightness (10 %)
pub const MIN_BRIGHTNESS: u8 = 26;
/// Highest reachable brightness
pub const MAX_BRIGHTNESS: u8 = 255;
/// One press changes brightness by about 10 %
pub const BRIGHTNESS_STEP: u8 = 26;
/// Minimum time between two steps while a button is held
pub const BRIGHTNESS_REPEAT: Duration = Duration::from_millis(200);

/// Configuration for the brightness control
#[derive(Debug, Clone, Copy)]
pub struct BrightnessConfig {
    /// Level applied at startup
    pub initial: u8,
    pub min: u8,
    pub max: u8,
    pub step: u8,
    pub repeat: Duration,
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self {
            initial: DEFAULT_BRIGHTNESS,
            min: MIN_BRIGHTNESS,
            max: MAX_BRIGHTNESS,
            step: BRIGHTNESS_STEP,
            repeat: BRIGHTNESS_REPEAT,
        }
    }
}

/// Current brightness and its step limits
#[derive(Debug, Clone)]
pub struct BrightnessControl {
    config: BrightnessConfig,
    level: u8,
    last_change: Option<Instant>,
}

impl BrightnessControl {
    pub fn new(config: BrightnessConfig) -> Self {
        Self {
            level: config.initial.clamp(config.min, config.max),
            config,
            last_change: None,
        }
    }

    /// Current level (0-255)
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Handle a held auxiliary button.
    ///
    /// Returns the new level if it changed.
    pub fn press(&mut self, button: AuxButton, now: Instant) -> Option<u8> {
        if let Some(last) = self.last_change {
            if now.saturating_duration_since(last) < self.config.repeat {
                return None;
            }
        }

        let next = match button {
            AuxButton::BrightnessUp => self.level.saturating_add(self.config.step),
            AuxButton::BrightnessDown => self.level.saturating_sub(self.config.step),
        }
        .clamp(self.config.min, self.config.max);

        if next == self.level {
            return None;
        }
        self.level = next;
        self.last_change = Some(now);
        Some(next)
    }
}
