//! Control loop configuration

use embassy_time::Duration;

use crate::animation::{AnimationMap, AnimationSpec};
use crate::brightness::BrightnessConfig;

/// Minimum time between two accepted presses of the same button
pub const DEBOUNCE: Duration = Duration::from_millis(50);
/// Inactivity before the toy goes to sleep (2 minutes)
pub const IDLE_TIMEOUT: Duration = Duration::from_millis(120_000);
/// Frame interval during the active phase (~30 FPS)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);
/// Polling interval during the hold phase
pub const HOLD_POLL_INTERVAL: Duration = Duration::from_millis(50);
/// Yield between idle loop ticks
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(10);
/// Polling interval while asleep
pub const SLEEP_POLL_INTERVAL: Duration = Duration::from_millis(50);
/// Polling interval while waiting for buttons to be released
pub const RELEASE_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Fixed speaker volume (~45 %)
pub const DEFAULT_VOLUME: u8 = 115;

/// Loop timing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub debounce: Duration,
    pub idle_timeout: Duration,
    pub frame_interval: Duration,
    pub hold_poll: Duration,
    pub idle_poll: Duration,
    pub sleep_poll: Duration,
    pub release_poll: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            debounce: DEBOUNCE,
            idle_timeout: IDLE_TIMEOUT,
            frame_interval: FRAME_INTERVAL,
            hold_poll: HOLD_POLL_INTERVAL,
            idle_poll: IDLE_POLL_INTERVAL,
            sleep_poll: SLEEP_POLL_INTERVAL,
            release_poll: RELEASE_POLL_INTERVAL,
        }
    }
}

/// Everything the controller needs to know at startup
#[derive(Debug, Clone)]
pub struct ToyConfig {
    pub timings: Timings,
    pub brightness: BrightnessConfig,
    pub volume: u8,
    /// Seed for per-session random parameters
    pub seed: u64,
    /// Button to animation table
    pub animations: AnimationMap,
    /// Startup animation, `None` to skip it
    pub boot: Option<AnimationSpec>,
}

impl Default for ToyConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            brightness: BrightnessConfig::default(),
            volume: DEFAULT_VOLUME,
            seed: 0,
            animations: AnimationMap::default(),
            boot: Some(AnimationSpec::boot()),
        }
    }
}

impl ToyConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    #[must_use]
    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.timings.idle_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_animations(mut self, animations: AnimationMap) -> Self {
        self.animations = animations;
        self
    }

    #[must_use]
    pub fn with_boot(mut self, boot: Option<AnimationSpec>) -> Self {
        self.boot = boot;
        self
    }

    #[must_use]
    pub fn with_brightness(mut self, brightness: BrightnessConfig) -> Self {
        self.brightness = brightness;
        self
    }
}
