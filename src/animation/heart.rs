//! Beating heart
//!
//! A pink heart pulses with a double "lub-dub" beat, then rests.

use embassy_time::Duration;

use super::{Animation, seconds};
use crate::{
    color::{Rgb, shift_color},
    frame::{Frame, HEIGHT, WIDTH},
    rng::SessionRng,
};

const HOT_PINK: Rgb = Rgb {
    r: 255,
    g: 105,
    b: 180,
};
const MAX_COLOR_SHIFT: i32 = 15;
const SPEED_JITTER: f32 = 0.15;
/// Beats per second at nominal speed
const BEAT_RATE: f32 = 1.2;

const CENTER_X: f32 = 7.5;
const CENTER_Y: f32 = 8.0;
/// Radius of the unit heart in pixels
const HEART_RADIUS: f32 = 6.0;

#[derive(Debug, Clone)]
pub struct HeartAnimation {
    color: Rgb,
    beat_speed: f32,
}

impl HeartAnimation {
    /// Heart size at a point in the beat cycle (0.0-1.0)
    fn beat_scale(cycle: f32) -> f32 {
        if cycle < 0.15 {
            1.0 + 0.15 * (cycle / 0.15)
        } else if cycle < 0.25 {
            1.15 - 0.15 * ((cycle - 0.15) / 0.1)
        } else if cycle < 0.35 {
            1.0 + 0.1 * ((cycle - 0.25) / 0.1)
        } else if cycle < 0.5 {
            1.1 - 0.1 * ((cycle - 0.35) / 0.15)
        } else {
            1.0
        }
    }

    /// Fill the implicit heart curve `(x² + y² - 1)³ - x²y³ < 0`
    #[allow(clippy::cast_possible_wrap)]
    fn draw(&self, frame: &mut Frame, scale: f32) {
        let radius = HEART_RADIUS * scale;
        for y in 0..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                let nx = (x as f32 - CENTER_X) / radius;
                let ny = (CENTER_Y - y as f32) / radius;
                let a = nx * nx + ny * ny - 1.0;
                if a * a * a - nx * nx * ny * ny * ny < 0.0 {
                    frame.set(x, y, self.color);
                }
            }
        }
    }
}

impl Animation for HeartAnimation {
    fn new(rng: &mut SessionRng) -> Self {
        let shift = rng.range_i32(-MAX_COLOR_SHIFT, MAX_COLOR_SHIFT);
        let half = shift.div_euclid(2);
        Self {
            color: shift_color(HOT_PINK, shift, half, -half),
            beat_speed: 1.0 + rng.uniform(-SPEED_JITTER, SPEED_JITTER),
        }
    }

    fn render(&self, elapsed: Duration, frame: &mut Frame) {
        let t = seconds(elapsed);
        let cycle = libm::fmodf(t * self.beat_speed * BEAT_RATE, 1.0);
        self.draw(frame, Self::beat_scale(cycle));
    }

    fn render_hold(&self, frame: &mut Frame) {
        self.draw(frame, 1.0);
    }
}
