//! Growing flower
//!
//! A stem grows up from the bottom edge, two leaves sprout, then the flower
//! blooms at the top. Full growth takes roughly four seconds.

use core::f32::consts::PI;

use embassy_time::Duration;

use super::{Animation, seconds};
use crate::{
    color::{Rgb, shift_color},
    frame::Frame,
    rng::SessionRng,
};

const PETAL_COLORS: [Rgb; 5] = [
    Rgb { r: 255, g: 100, b: 150 },
    Rgb { r: 255, g: 80, b: 80 },
    Rgb { r: 255, g: 150, b: 50 },
    Rgb { r: 200, g: 100, b: 255 },
    Rgb { r: 255, g: 200, b: 100 },
];
const STEM: Rgb = Rgb { r: 34, g: 139, b: 34 };
const CENTER: Rgb = Rgb { r: 255, g: 200, b: 50 };
const LEAF: Rgb = Rgb { r: 50, g: 180, b: 50 };

const MAX_COLOR_SHIFT: i32 = 20;
const SPEED_JITTER: f32 = 0.15;
const PETAL_COUNTS: [u8; 3] = [5, 6, 7];
const GROWTH_SECONDS: f32 = 4.0;

const STEM_X: i32 = 7;
const STEM_BOTTOM: i32 = 15;
const STEM_TOP: i32 = 5;
const LEFT_LEAF_Y: i32 = STEM_BOTTOM - 4;
const RIGHT_LEAF_Y: i32 = STEM_BOTTOM - 7;
const LEAF_LENGTH: f32 = 3.0;
const MAX_PETAL_RADIUS: f32 = 3.0;

#[derive(Debug, Clone)]
pub struct FlowerAnimation {
    petal_color: Rgb,
    growth_speed: f32,
    petals: u8,
}

impl FlowerAnimation {
    /// Draw the plant at a growth progress in 0.0-1.0
    fn draw(&self, frame: &mut Frame, progress: f32) {
        let stem_progress = (progress / 0.4).min(1.0);
        let stem_height = ((STEM_BOTTOM - STEM_TOP) as f32 * stem_progress) as i32;
        let stem_top = STEM_BOTTOM - stem_height;

        for y in stem_top..=STEM_BOTTOM {
            frame.set(STEM_X, y, STEM);
            // Thicker at the base
            if y > STEM_BOTTOM - 3 {
                frame.set(STEM_X + 1, y, STEM);
            }
        }

        if progress > 0.2 {
            let leaf_progress = ((progress - 0.2) / 0.4).min(1.0);
            let length = (LEAF_LENGTH * leaf_progress) as i32;
            if stem_top <= LEFT_LEAF_Y {
                Self::draw_leaf(frame, LEFT_LEAF_Y, -1, length);
            }
            if stem_top <= RIGHT_LEAF_Y {
                Self::draw_leaf(frame, RIGHT_LEAF_Y, 1, length);
            }
        }

        if progress > 0.5 {
            self.draw_bloom(frame, (progress - 0.5) / 0.5);
        }
    }

    /// Diagonal leaf growing away from the stem on `side`
    fn draw_leaf(frame: &mut Frame, y: i32, side: i32, length: i32) {
        for i in 0..length {
            let x = STEM_X + side * (1 + i);
            frame.set(x, y + i, LEAF);
            if i > 0 {
                frame.set(x, y + i - 1, LEAF);
            }
        }
    }

    fn draw_bloom(&self, frame: &mut Frame, bloom: f32) {
        let cx = STEM_X as f32 + 0.5;
        let cy = STEM_TOP as f32;
        let petal_radius = MAX_PETAL_RADIUS * bloom;
        let petal_size = ((petal_radius * 0.8) as i32).max(1);

        for i in 0..self.petals {
            let angle = f32::from(i) / f32::from(self.petals) * 2.0 * PI - PI / 2.0;
            let px = cx + libm::cosf(angle) * petal_radius * 0.7;
            let py = cy + libm::sinf(angle) * petal_radius * 0.7;
            fill_blob(frame, px, py, petal_size, self.petal_color);
        }

        if bloom > 0.3 {
            let center_progress = (bloom - 0.3) / 0.7;
            let center_size = ((2.0 * center_progress) as i32).max(1);
            fill_blob(frame, cx, cy, center_size, CENTER);
        }
    }
}

/// Integer-radius disc whose offsets are added to a fractional center
fn fill_blob(frame: &mut Frame, cx: f32, cy: f32, size: i32, color: Rgb) {
    for dy in -size..=size {
        for dx in -size..=size {
            if dx * dx + dy * dy <= size * size {
                frame.set((cx + dx as f32) as i32, (cy + dy as f32) as i32, color);
            }
        }
    }
}

impl Animation for FlowerAnimation {
    fn new(rng: &mut SessionRng) -> Self {
        let base = rng.choose(&PETAL_COLORS);
        let petal_color = shift_color(
            base,
            rng.range_i32(-MAX_COLOR_SHIFT, MAX_COLOR_SHIFT),
            rng.range_i32(-MAX_COLOR_SHIFT, MAX_COLOR_SHIFT),
            rng.range_i32(-MAX_COLOR_SHIFT, MAX_COLOR_SHIFT),
        );
        Self {
            petal_color,
            growth_speed: 1.0 + rng.uniform(-SPEED_JITTER, SPEED_JITTER),
            petals: rng.choose(&PETAL_COUNTS),
        }
    }

    fn render(&self, elapsed: Duration, frame: &mut Frame) {
        let t = seconds(elapsed);
        self.draw(frame, (t * self.growth_speed / GROWTH_SECONDS).min(1.0));
    }

    fn render_hold(&self, frame: &mut Frame) {
        self.draw(frame, 1.0);
    }
}
