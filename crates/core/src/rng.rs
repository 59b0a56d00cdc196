//! RNG module - seedable randomness for tile spawning
//!
//! A simple LCG keeps the engine deterministic: the same seed produces the
//! same spawn sequence, which makes whole games replayable in tests. The
//! generator is owned by the engine and injected via a seed parameter;
//! nothing in the core reads a global random source.

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

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Roll a percentage check: true with probability `percent`/100.
    pub fn chance(&mut self, percent: u32) -> bool {
        if percent == 0 {
            return false;
        }
        if percent >= 100 {
            return true;
        }
        self.next_range(100) < percent
    }

    /// Get the current RNG state (for restarting a game with a derived seed)
    pub fn state(&self) -> u32 {
        self.state
    }
}
