//! Startup splash: rainbow rings expanding from the center

use embassy_time::Duration;

use super::Animation;
use crate::{
    color::hue_degrees,
    frame::{Frame, HEIGHT, WIDTH},
    rng::SessionRng,
};

/// Nominal frame period the ring speed is tuned for
const FRAME_MS: u64 = 33;
const CENTER: f32 = 7.5;
const RING_PERIOD: f32 = 12.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct BootAnimation;

impl Animation for BootAnimation {
    fn new(_rng: &mut SessionRng) -> Self {
        Self
    }

    #[allow(clippy::cast_possible_wrap)]
    fn render(&self, elapsed: Duration, frame: &mut Frame) {
        let step = (elapsed.as_millis() / FRAME_MS) as f32;
        let max_radius = libm::fmodf(step / 2.0, RING_PERIOD);

        for y in 0..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                let dx = x as f32 - CENTER;
                let dy = y as f32 - CENTER;
                let dist = libm::sqrtf(dx * dx + dy * dy);
                if dist <= max_radius + 2.0 {
                    frame.set(x, y, hue_degrees(dist * 20.0 + step * 5.0));
                }
            }
        }
    }
}
