//! RNG module - deterministic LCG for scramble and authoring tools
//!
//! Level authoring must be reproducible: scrambling a solved layout with the
//! same seed has to produce the same starting state every time, so the
//! engine carries its own tiny LCG instead of an OS-seeded generator.

/// Deterministic 32-bit linear congruential generator.
///
/// One wrapping multiply-add per draw (Numerical Recipes parameters,
/// modulus 2^32). Statistical quality only has to cover shuffling a few
/// dozen tile rotations; seed-for-seed reproducibility is the contract.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed the generator. A zero seed is remapped to 1 so every seed
    /// selects a nonzero starting state.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Next raw 32-bit draw
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Draw a value in `[0, max)`
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}
