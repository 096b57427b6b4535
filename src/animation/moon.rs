//! Night sky with a rising moon
//!
//! A full moon rises from the bottom-left corner to the center over four
//! seconds. Once it arrives, a handful of stars fade in and twinkle.

use core::f32::consts::PI;

use embassy_time::Duration;
use heapless::Vec;

use super::{Animation, fill_disc, seconds};
use crate::{
    color::{Rgb, WHITE, blend_colors},
    frame::Frame,
    rng::SessionRng,
};

const SKY: Rgb = Rgb { r: 5, g: 5, b: 20 };
const MOON_RADIUS: f32 = 6.0;
const START: (f32, f32) = (-3.0, 19.0);
const END: (f32, f32) = (8.0, 8.0);
/// Time for the moon to reach the center
const RISE_SECONDS: f32 = 4.0;
/// Time for the stars to fade in after the moon arrives
const STAR_FADE_SECONDS: f32 = 1.0;

const MIN_STARS: i32 = 8;
const MAX_STARS: usize = 15;
const PLACEMENT_ATTEMPTS: usize = 20;

#[derive(Debug, Clone, Copy)]
struct SkyStar {
    x: i32,
    y: i32,
    brightness: f32,
    twinkle_offset: f32,
}

impl SkyStar {
    fn draw(&self, frame: &mut Frame, t: f32, fade: f32) {
        let twinkle = 0.7 + 0.3 * libm::sinf(t * 3.0 + self.twinkle_offset);
        let level = (self.brightness * fade * twinkle).clamp(0.0, 1.0) * 255.0;
        frame.set(self.x, self.y, blend_colors(SKY, WHITE, level as u8));
    }
}

#[derive(Debug, Clone)]
pub struct MoonAnimation {
    moon_color: Rgb,
    stars: Vec<SkyStar, MAX_STARS>,
}

impl MoonAnimation {
    fn place_stars(rng: &mut SessionRng) -> Vec<SkyStar, MAX_STARS> {
        let mut stars = Vec::new();
        let count = rng.range_i32(MIN_STARS, MAX_STARS as i32);
        for _ in 0..count {
            for _ in 0..PLACEMENT_ATTEMPTS {
                let x = rng.range_i32(0, 15);
                let y = rng.range_i32(0, 15);
                let dx = x as f32 - END.0;
                let dy = y as f32 - END.1;
                // Keep clear of where the moon ends up
                if libm::sqrtf(dx * dx + dy * dy) > MOON_RADIUS + 1.0 {
                    let _ = stars.push(SkyStar {
                        x,
                        y,
                        brightness: rng.range_i32(100, 255) as f32 / 255.0,
                        twinkle_offset: rng.uniform(0.0, 2.0 * PI),
                    });
                    break;
                }
            }
        }
        stars
    }

    /// Number of stars placed for this session
    pub fn star_count(&self) -> usize {
        self.stars.len()
    }
}

impl Animation for MoonAnimation {
    fn new(rng: &mut SessionRng) -> Self {
        let level = rng.range_i32(200, 255) as u8;
        Self {
            moon_color: Rgb {
                r: level,
                g: level,
                b: (f32::from(level) * 0.9) as u8,
            },
            stars: Self::place_stars(rng),
        }
    }

    fn render(&self, elapsed: Duration, frame: &mut Frame) {
        let t = seconds(elapsed);
        let progress = (t / RISE_SECONDS).min(1.0);

        frame.fill(SKY);

        if t >= RISE_SECONDS {
            let fade = ((t - RISE_SECONDS) / STAR_FADE_SECONDS).min(1.0);
            for star in &self.stars {
                star.draw(frame, t, fade);
            }
        }

        let cx = START.0 + (END.0 - START.0) * progress;
        let cy = START.1 + (END.1 - START.1) * progress;
        fill_disc(frame, cx, cy, MOON_RADIUS, self.moon_color);
    }

    fn render_hold(&self, frame: &mut Frame) {
        frame.fill(SKY);
        for star in &self.stars {
            star.draw(frame, 0.0, 1.0);
        }
        fill_disc(frame, END.0, END.1, MOON_RADIUS, self.moon_color);
    }
}
