//! Bouncing, spinning star
//!
//! A five-pointed yellow star covering most of the matrix bobs up and down
//! while rotating, then settles upright in the center.

use core::cmp::Ordering;
use core::f32::consts::PI;

use embassy_time::Duration;
use heapless::Vec;

use super::{Animation, seconds};
use crate::{
    color::{Rgb, shift_color},
    frame::{Frame, HEIGHT},
    rng::SessionRng,
};

const YELLOW: Rgb = Rgb { r: 255, g: 220, b: 0 };
const MAX_COLOR_SHIFT: i32 = 20;
const SPEED_JITTER: f32 = 0.15;
const ROTATION_SPEED: f32 = 0.8;

const POINTS: usize = 5;
const VERTICES: usize = POINTS * 2;
/// Outer radius, roughly 70 % of the matrix
const OUTER_RADIUS: f32 = 5.5;
/// Inner radius as a fraction of the outer one
const INNER_RATIO: f32 = 0.4;
const CENTER: f32 = 7.5;
const BOUNCE_AMPLITUDE: f32 = 2.5;

#[derive(Debug, Clone)]
pub struct StarAnimation {
    color: Rgb,
    /// Radians per second, sign gives direction
    rotation_speed: f32,
    bounce_speed: f32,
}

impl StarAnimation {
    /// Scanline-fill the star polygon
    #[allow(clippy::cast_possible_wrap)]
    fn draw(&self, frame: &mut Frame, cx: f32, cy: f32, rotation: f32) {
        let mut vertices = [(0.0_f32, 0.0_f32); VERTICES];
        for (i, vertex) in vertices.iter_mut().enumerate() {
            let angle = rotation + (i as f32 * PI / POINTS as f32) - PI / 2.0;
            let radius = if i % 2 == 0 {
                OUTER_RADIUS
            } else {
                OUTER_RADIUS * INNER_RATIO
            };
            *vertex = (
                cx + radius * libm::cosf(angle),
                cy + radius * libm::sinf(angle),
            );
        }

        let min_y = vertices.iter().map(|v| v.1).fold(f32::MAX, f32::min) as i32;
        let max_y = vertices.iter().map(|v| v.1).fold(f32::MIN, f32::max) as i32;

        for y in min_y.max(0)..(max_y + 1).min(HEIGHT as i32) {
            let yf = y as f32;
            let mut crossings: Vec<f32, VERTICES> = Vec::new();
            for i in 0..VERTICES {
                let (x1, y1) = vertices[i];
                let (x2, y2) = vertices[(i + 1) % VERTICES];
                let spans = (y1 <= yf && yf < y2) || (y2 <= yf && yf < y1);
                if spans && y1 != y2 {
                    // At most one crossing per edge
                    let _ = crossings.push(x1 + (yf - y1) * (x2 - x1) / (y2 - y1));
                }
            }
            crossings.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

            for span in crossings.chunks_exact(2) {
                for x in (span[0] as i32)..=(span[1] as i32) {
                    frame.set(x, y, self.color);
                }
            }
        }
    }
}

impl Animation for StarAnimation {
    fn new(rng: &mut SessionRng) -> Self {
        let shift = rng.range_i32(-MAX_COLOR_SHIFT, MAX_COLOR_SHIFT);
        let direction = rng.sign() as f32;
        Self {
            color: shift_color(YELLOW, shift, shift, 0),
            rotation_speed: (ROTATION_SPEED + rng.uniform(-SPEED_JITTER, SPEED_JITTER))
                * direction,
            bounce_speed: 1.0 + rng.uniform(-SPEED_JITTER, SPEED_JITTER),
        }
    }

    fn render(&self, elapsed: Duration, frame: &mut Frame) {
        let t = seconds(elapsed);
        let rotation = t * self.rotation_speed * 2.0;
        let cy = CENTER + libm::sinf(t * self.bounce_speed * 4.0) * BOUNCE_AMPLITUDE;
        self.draw(frame, CENTER, cy, rotation);
    }

    fn render_hold(&self, frame: &mut Frame) {
        self.draw(frame, CENTER, CENTER, 0.0);
    }
}
