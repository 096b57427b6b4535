//! Flapping butterfly
//!
//! Not mapped to a button by default. Wings flap while the body bobs
//! gently, and the hold frame shows the wings fully spread.

use core::f32::consts::PI;

use embassy_time::Duration;

use super::{Animation, seconds};
use crate::{
    color::{Rgb, WHITE},
    frame::Frame,
    rng::SessionRng,
};

/// Wing colors from the body outwards
const WING_COLORS: [Rgb; 5] = [
    Rgb { r: 255, g: 50, b: 150 },
    Rgb { r: 255, g: 100, b: 50 },
    Rgb { r: 255, g: 255, b: 0 },
    Rgb { r: 100, g: 200, b: 255 },
    Rgb { r: 200, g: 100, b: 255 },
];
const BODY: Rgb = Rgb { r: 40, g: 20, b: 10 };
const ANTENNA: Rgb = Rgb { r: 60, g: 30, b: 15 };

const FLAP_SPEED: f32 = 4.0;
const FLAP_JITTER: f32 = 0.5;
const BOB_AMPLITUDE: f32 = 0.5;
const CENTER: f32 = 8.0;
const SIDES: [i32; 2] = [-1, 1];

#[derive(Debug, Clone)]
pub struct ButterflyAnimation {
    /// Rotation applied to the wing palette
    palette_shift: usize,
    flap_speed: f32,
}

impl ButterflyAnimation {
    fn wing_color(&self, index: usize) -> Rgb {
        WING_COLORS[(index + self.palette_shift) % WING_COLORS.len()]
    }

    /// `wing_angle` of 0 is half open, `PI / 2` fully spread
    fn draw(&self, frame: &mut Frame, cx: f32, cy: f32, wing_angle: f32) {
        let spread = 0.5 + 0.5 * libm::sinf(wing_angle);
        let x0 = cx as i32;

        for dy in -3..=3 {
            frame.set(x0, (cy + dy as f32) as i32, BODY);
        }

        // Upper wings narrow towards the top
        let upper_width = (4.0 * spread) as i32 + 2;
        let lift = (spread * 2.0) as i32;
        for side in SIDES {
            for wy in 0..4 {
                let row_width = upper_width - wy / 2;
                let y = (cy - 2.0 + wy as f32 - lift as f32) as i32;
                for wx in 1..=row_width {
                    let color = self.wing_color((wx as usize - 1).min(WING_COLORS.len() - 1));
                    frame.set((cx + (side * wx) as f32) as i32, y, color);
                }
            }
        }

        // Lower wings are rounder and offset in the palette
        let lower_width = (3.0 * spread) as i32 + 1;
        for side in SIDES {
            for wy in 0..3 {
                let row_width = lower_width - (wy - 1_i32).abs();
                let y = (cy + 1.0 + wy as f32) as i32;
                for wx in 1..=row_width {
                    let index = (wx as usize - 1).min(WING_COLORS.len() - 1) + 2;
                    frame.set((cx + (side * wx) as f32) as i32, y, self.wing_color(index));
                }
            }
        }

        for side in SIDES {
            let upper_x = (cx + (side * (2.0 * spread + 1.0) as i32) as f32) as i32;
            let upper_y = (cy - 1.0 - (spread as i32) as f32) as i32;
            frame.set(upper_x, upper_y, WHITE);

            let lower_x = (cx + (side * (1.5 * spread + 1.0) as i32) as f32) as i32;
            frame.set(lower_x, (cy + 2.0) as i32, WHITE);

            frame.set((cx + side as f32) as i32, (cy - 4.0) as i32, ANTENNA);
        }
    }
}

impl Animation for ButterflyAnimation {
    fn new(rng: &mut SessionRng) -> Self {
        Self {
            palette_shift: rng.range_i32(0, WING_COLORS.len() as i32 - 1) as usize,
            flap_speed: FLAP_SPEED + rng.uniform(-FLAP_JITTER, FLAP_JITTER),
        }
    }

    fn render(&self, elapsed: Duration, frame: &mut Frame) {
        let t = seconds(elapsed);
        let wing_angle = t * self.flap_speed * PI;
        let bob = libm::sinf(t * 2.0) * BOB_AMPLITUDE;
        self.draw(frame, CENTER, CENTER + bob, wing_angle);
    }

    fn render_hold(&self, frame: &mut Frame) {
        self.draw(frame, CENTER, CENTER, PI / 2.0);
    }
}
