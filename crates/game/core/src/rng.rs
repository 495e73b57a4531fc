//! RNG oracle for deterministic round generation.
//!
//! Rounds are generated from a seed so that a session can be replayed and
//! tests can pin exact hidden sequences. Entropy is injected by the caller
//! (the runtime draws a session seed once), never pulled from the OS here.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same value.

/// RNG oracle for deterministic random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a value in range [0, bound) (returns 0 for `bound == 0`).
    fn below(&self, seed: u64, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        // Lemire's multiply-shift reduction keeps the bias below 2^-32.
        ((self.next_u32(seed) as u64 * bound as u64) >> 32) as u32
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state, a single multiply
/// plus xorshift and rotate.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed for one draw.
///
/// # Arguments
///
/// * `session_seed` - Base seed chosen when the session starts
/// * `nonce` - Round sequence number (increments each generated round)
/// * `context` - Distinguishes multiple draws within the same round
///   (the shuffle uses one context value per swap)
pub fn compute_seed(session_seed: u64, nonce: u64, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing constants
    let mut hash = session_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_value() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
    }

    #[test]
    fn below_stays_in_bounds() {
        let rng = PcgRng;
        for nonce in 0..500 {
            let seed = compute_seed(7, nonce, 0);
            assert!(rng.below(seed, 4) < 4);
        }
        assert_eq!(rng.below(1, 0), 0);
    }

    #[test]
    fn context_changes_seed() {
        assert_ne!(compute_seed(1, 1, 0), compute_seed(1, 1, 1));
        assert_ne!(compute_seed(1, 1, 0), compute_seed(1, 2, 0));
    }
}
