//! RNG module - seeded random piece selection
//!
//! Kind selection is uniform over the seven kinds with no bag or
//! anti-repeat policy, so back-to-back repeats are allowed. A fixed seed
//! makes games reproducible in tests.

use crate::types::PieceKind;

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a uniformly random piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        let idx = self.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_kind_draws_cover_all_kinds() {
        let mut rng = SimpleRng::new(7);

        let mut seen = [false; 7];
        for _ in 0..1000 {
            let kind = rng.next_kind();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }

        assert!(seen.iter().all(|&s| s), "all 7 kinds should appear");
    }

    #[test]
    fn test_kind_draws_allow_back_to_back_repeats() {
        let mut rng = SimpleRng::new(1);

        // With no bag policy, 1000 draws are effectively certain to
        // contain at least one immediate repeat.
        let mut prev = rng.next_kind();
        let mut repeated = false;
        for _ in 0..1000 {
            let next = rng.next_kind();
            if next == prev {
                repeated = true;
                break;
            }
            prev = next;
        }
        assert!(repeated);
    }
}
