#![no_std]

pub mod animation;
pub mod brightness;
pub mod button;
pub mod clock;
pub mod color;
pub mod config;
pub mod controller;
pub mod debouncer;
pub mod error;
pub mod frame;
pub mod idle_timer;
#[cfg(feature = "esp32-log")]
pub mod logger;
pub mod rng;
pub mod session;
pub mod sound;

pub use animation::{AnimationId, AnimationMap, AnimationSlot, AnimationSpec};
pub use brightness::{BrightnessConfig, BrightnessControl};
pub use button::{AuxButton, ButtonId};
pub use clock::EmbassyClock;
pub use config::{Timings, ToyConfig};
pub use controller::{Controller, Tick};
pub use debouncer::{ButtonState, Debouncer};
pub use error::{AssetError, Error, Port, Result};
pub use frame::{Frame, Pixel};
pub use idle_timer::IdleTimer;
pub use rng::SessionRng;
pub use session::{AnimationSession, BootOutcome, BootSession, Phase, SessionOutcome, Step};
pub use sound::SoundId;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Raw button hardware.
///
/// Implementations report the instantaneous level of each button; debouncing
/// is done by [`Debouncer`].
pub trait InputPort {
    /// Read whether the button is currently held down
    fn read_raw(&mut self, button: ButtonId) -> Result<bool>;

    /// Read an auxiliary (brightness) button
    fn read_aux(&mut self, _button: AuxButton) -> Result<bool> {
        Ok(false)
    }
}

/// LED matrix output.
pub trait MatrixDisplay {
    /// Push a complete frame to the matrix
    fn render_frame(&mut self, frame: &Frame) -> Result<()>;

    /// Blank the matrix
    fn clear_display(&mut self) -> Result<()>;

    /// Set global brightness (0-255)
    fn set_brightness(&mut self, _level: u8) -> Result<()> {
        Ok(())
    }

    /// Put the panel into its low power state
    fn enter_low_power(&mut self) -> Result<()> {
        Ok(())
    }

    /// Leave the low power state
    fn exit_low_power(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Speaker output.
///
/// Playback is fire-and-forget: `play` must return immediately and a new
/// `play` replaces whatever was playing.
pub trait SoundPort {
    /// Start playing a sound
    fn play(&mut self, sound: SoundId) -> Result<()>;

    /// Stop the current sound, if any
    fn stop(&mut self) -> Result<()>;

    /// Set output volume (0-255)
    fn set_volume(&mut self, _level: u8) -> Result<()> {
        Ok(())
    }
}

/// Time source for the control loop.
///
/// All waiting in the crate goes through [`Clock::sleep`], so a fake clock
/// can drive the whole loop in tests.
pub trait Clock {
    /// Current time
    fn now(&self) -> Instant;

    /// Block the loop for `duration`
    fn sleep(&mut self, duration: Duration);
}
