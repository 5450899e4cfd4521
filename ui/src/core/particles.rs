//! Seeded layout for decorative particles.
//!
//! `Mulberry32` is a 32-bit state generator with multiply-xorshift mixing.
//! A fixed seed gives the same layout on every load and every render, so
//! nothing shifts between server render, hydration and re-renders. Not for
//! anything security sensitive.

use rand::{Error, RngCore, SeedableRng};

const INCREMENT: u32 = 0x6D2B_79F5;
const UNIT_SCALE: f64 = 4_294_967_296.0; // 2^32

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / UNIT_SCALE
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        Mulberry32::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(Mulberry32::next_u32(self));
        let hi = u64::from(Mulberry32::next_u32(self));
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = Mulberry32::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Placement and timing of one decorative particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container (0..=100).
    pub left_pct: u8,
    /// Vertical position, percent of the container (0..=100).
    pub top_pct: u8,
    /// Animation duration in seconds (3..=7).
    pub duration_s: u8,
    /// Animation delay in seconds, two decimals (0..=2).
    pub delay_s: f64,
}

impl Particle {
    /// Inline style carrying position and timing as CSS variables.
    pub fn style(&self) -> String {
        format!(
            "left:{}%;top:{}%;--particle-dur:{}s;--particle-delay:{:.2}s",
            self.left_pct, self.top_pct, self.duration_s, self.delay_s
        )
    }
}

/// Derive `count` particles from `seed`, four draws per particle.
pub fn scatter(seed: u32, count: usize) -> Vec<Particle> {
    let mut rng = Mulberry32::new(seed);
    (0..count)
        .map(|_| {
            let left_pct = (rng.next_unit() * 100.0).round() as u8;
            let top_pct = (rng.next_unit() * 100.0).round() as u8;
            let duration_s = 3 + (rng.next_unit() * 4.0).round() as u8;
            let delay_s = (rng.next_unit() * 200.0).round() / 100.0;
            Particle {
                left_pct,
                top_pct,
                duration_s,
                delay_s,
            }
        })
        .collect()
}
