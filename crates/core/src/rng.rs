//! RNG module - seeded randomness for names, box scatter and route sampling
//!
//! A small LCG keeps every random decision reproducible from a single seed,
//! which the tests and `HAROLD_SEED` rely on.

use std::time::{SystemTime, UNIX_EPOCH};

const NAME_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock, for runs without an explicit seed
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // The low bits of a power-of-two LCG cycle quickly; hand out the high half.
        self.state >> 8
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Generate random value in the inclusive range [min, max]
    pub fn next_between(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max - min) as u32 + 1;
        min + self.next_range(span) as i32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Random alphanumeric name of the given length
    pub fn name(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| {
                let idx = self.next_range(NAME_CHARSET.len() as u32) as usize;
                NAME_CHARSET[idx] as char
            })
            .collect()
    }

    /// Pick `amount` distinct indices out of `0..len`, keeping ascending order
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        self.shuffle(&mut indices);
        indices.truncate(amount.min(len));
        indices.sort_unstable();
        indices
    }
}
