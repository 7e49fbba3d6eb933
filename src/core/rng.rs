//! RNG module - the session's injected random source
//!
//! All randomness in the core flows through a [`GameRng`] handed to the
//! spawner, never a hidden thread-local. The wrapper remembers its seed so
//! a session can be replayed exactly, and delegates `RngCore` to a seeded
//! `SmallRng` so any `rand` API works on it.

use rand::rngs::SmallRng;
use rand::{Error, RngCore, SeedableRng};

/// Deterministic random source with a recoverable seed
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: SmallRng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG from the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.rng.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = GameRng::new(12345);
        let mut rng2 = GameRng::new(12345);

        // Same seed should produce the same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = GameRng::new(12345);
        let mut rng2 = GameRng::new(54321);

        assert_ne!(rng1.next_u64(), rng2.next_u64());
    }

    #[test]
    fn test_rng_remembers_seed() {
        let mut rng = GameRng::new(7);
        let _ = rng.next_u64();
        assert_eq!(rng.seed(), 7);
    }
}
