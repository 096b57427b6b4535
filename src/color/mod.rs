//! Color helpers for the animation renderers
//!
//! 8-bit math follows the `FastLED` conventions (0-255 is 0.0-1.0).

use smart_leds::{RGB8, hsv::Hsv as HSV, hsv::hsv2rgb};

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_possible_wrap)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16;
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    );
    partial = partial.wrapping_add(0x8000);

    (partial >> 16) as u8
}

/// Blend two RGB colors
///
/// `amount_of_b` of 0 gives `a`, 255 gives `b`.
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Add a signed offset to a channel, clamping to 0-255
pub fn shift_channel(value: u8, delta: i32) -> u8 {
    (i32::from(value) + delta).clamp(0, 255) as u8
}

/// Shift every channel of a color by its own offset
pub fn shift_color(color: Rgb, dr: i32, dg: i32, db: i32) -> Rgb {
    Rgb {
        r: shift_channel(color.r, dr),
        g: shift_channel(color.g, dg),
        b: shift_channel(color.b, db),
    }
}

/// Fully saturated color for a hue in degrees
pub fn hue_degrees(hue: f32) -> Rgb {
    let wrapped = libm::fmodf(hue, 360.0);
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
    hsv2rgb(Hsv {
        hue: ((wrapped * 256.0) / 360.0) as u8,
        sat: 255,
        val: 255,
    })
}
