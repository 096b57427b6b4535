//! Per-session random parameters
//!
//! Each animation session draws its visual jitter (color shift, speed, star
//! positions) from its own generator, seeded once when the session starts.

/// Small deterministic generator (`SplitMix64`).
#[derive(Debug, Clone)]
pub struct SessionRng {
    state: u64,
}

impl SessionRng {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform integer in `low..=high`
    #[allow(clippy::cast_possible_wrap)]
    pub fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        let span = (i64::from(high) - i64::from(low) + 1) as u64;
        low + (self.next_u64() % span) as i32
    }

    /// Uniform float in `low..high`
    pub fn uniform(&mut self, low: f32, high: f32) -> f32 {
        // 24 bits is the full f32 mantissa
        let unit = (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32;
        low + (high - low) * unit
    }

    /// Pick one element; `items` must not be empty
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        let index = (self.next_u64() % items.len() as u64) as usize;
        items[index]
    }

    /// Either `1` or `-1`
    pub fn sign(&mut self) -> i32 {
        if self.next_u64() & 1 == 0 { 1 } else { -1 }
    }
}
