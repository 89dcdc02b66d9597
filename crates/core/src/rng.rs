//! RNG module - deterministic seeding for the initial population
//!
//! A run must be reproducible from the seed printed at startup, so the grid is
//! filled from a small LCG rather than an OS entropy source.

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Fair coin flip.
    ///
    /// Uses the high bit; the low bits of an LCG have short periods.
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() < u32::MAX / 2
    }
}
