//! Mersenne Twister random number generator
//!
//! This is a deterministic PRNG producing a reproducible sequence of
//! 32-bit values from a single seed.
//!
//! # Algorithm
//!
//! The generator keeps a fixed-size array of 32-bit words and a cursor.
//! When the cursor wraps to zero, the whole array is regenerated in one
//! left-to-right sweep (the "twist"); each returned word is then run
//! through the standard tempering cascade. The sweep order is part of
//! the recurrence and must not be reordered.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce an exact run)
//! - Testing (verify behavior against known vectors)
//! - Research (validate results)
//!
//! NOT suitable for security-sensitive randomness.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conventional state array length (MT19937).
pub const DEFAULT_STATE_SIZE: usize = 624;

// Twist parameters.
const TWIST_OFFSET: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

// Knuth-style multiplier for the seed expansion.
const INIT_MULTIPLIER: u64 = 1_812_433_253;

// Tempering masks.
const TEMPER_B: u32 = 0x9d2c_5680;
const TEMPER_C: u32 = 0xefc6_0000;

/// Errors that can occur during generator construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RngError {
    /// The state array must hold at least one word.
    #[error("Invalid parameter: state size must be positive (got {size})")]
    InvalidParameter { size: usize },
}

/// Deterministic random number generator using the Mersenne Twister
///
/// # Example
/// ```
/// use twister_core_rs::MersenneTwister;
///
/// let mut rng = MersenneTwister::from_seed(12345);
/// let word = rng.extract();
/// let die = rng.bounded_int(1, 6); // [1, 6]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MersenneTwister {
    /// State array length; immutable after construction
    size: usize,
    /// The state words, rewritten in place by every regeneration
    state: Vec<u32>,
    /// Next word to temper; 0 means "regenerate before extracting"
    cursor: usize,
}

impl MersenneTwister {
    /// Create a generator with an explicit state size
    ///
    /// # Arguments
    /// * `seed` - Initial seed value; determines the whole sequence
    /// * `size` - State array length, conventionally 624
    ///
    /// # Errors
    /// Returns [`RngError::InvalidParameter`] when `size` is zero.
    ///
    /// # Example
    /// ```
    /// use twister_core_rs::MersenneTwister;
    ///
    /// let rng = MersenneTwister::new(42, 624).unwrap();
    /// assert!(MersenneTwister::new(42, 0).is_err());
    /// ```
    pub fn new(seed: u64, size: usize) -> Result<Self, RngError> {
        if size == 0 {
            return Err(RngError::InvalidParameter { size });
        }
        Ok(Self::seeded(seed, size))
    }

    /// Create a generator with the conventional state size (624)
    ///
    /// # Example
    /// ```
    /// use twister_core_rs::MersenneTwister;
    ///
    /// let mut rng = MersenneTwister::from_seed(42);
    /// assert_eq!(rng.extract(), 1608637542);
    /// ```
    pub fn from_seed(seed: u64) -> Self {
        Self::seeded(seed, DEFAULT_STATE_SIZE)
    }

    /// Create a generator seeded from a caller-supplied strategy
    ///
    /// The generator never reads the clock on its own; pass
    /// [`SystemClockSeed`](crate::seed::SystemClockSeed) to reproduce the
    /// classic timestamp-seeded default.
    ///
    /// # Example
    /// ```
    /// use twister_core_rs::{FixedSeed, MersenneTwister};
    ///
    /// let mut rng = MersenneTwister::from_source(&FixedSeed(42));
    /// assert_eq!(rng.extract(), 1608637542);
    /// ```
    pub fn from_source(source: &impl crate::seed::SeedSource) -> Self {
        Self::from_seed(source.seed())
    }

    // Precondition: size > 0.
    fn seeded(seed: u64, size: usize) -> Self {
        let mut state = vec![0u32; size];
        state[0] = seed as u32;
        // The first expansion step sees the full unmasked seed; every
        // stored word is masked to 32 bits.
        let mut prev = seed;
        for (i, word) in state.iter_mut().enumerate().skip(1) {
            let next = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u64)
                & 0xffff_ffff;
            *word = next as u32;
            prev = next;
        }
        Self {
            size,
            state,
            cursor: 0,
        }
    }

    /// Rewrite the entire state array with the twist recurrence.
    ///
    /// Single forward sweep: index `i+1` is read before this pass
    /// overwrites it, while `i+397` may already hold this pass's value
    /// after wraparound. That asymmetry is canonical.
    fn regenerate(&mut self) {
        for i in 0..self.size {
            // The two masks cover disjoint bit ranges, so this add is a
            // bitwise concatenation and cannot overflow.
            let y = (self.state[i] & UPPER_MASK)
                + (self.state[(i + 1) % self.size] & LOWER_MASK);
            let mut word = self.state[(i + TWIST_OFFSET) % self.size] ^ (y >> 1);
            if y & 1 != 0 {
                word ^= MATRIX_A;
            }
            self.state[i] = word;
        }
    }

    /// Extract the next tempered 32-bit value
    ///
    /// Regenerates the whole state array every `size` calls.
    ///
    /// # Example
    /// ```
    /// use twister_core_rs::MersenneTwister;
    ///
    /// let mut rng = MersenneTwister::from_seed(42);
    /// let value = rng.extract();
    /// ```
    pub fn extract(&mut self) -> u32 {
        if self.cursor == 0 {
            self.regenerate();
        }

        let mut y = self.state[self.cursor];
        y ^= y >> 11;
        y ^= (y << 7) & TEMPER_B;
        y ^= (y << 15) & TEMPER_C;
        y ^= y >> 18;

        self.cursor = (self.cursor + 1) % self.size;
        y
    }

    // Two extractions glued into one 64-bit draw, high word first.
    fn extract_u64(&mut self) -> u64 {
        let hi = self.extract() as u64;
        (hi << 32) | self.extract() as u64
    }

    /// Generate a random integer in `[min, max]` inclusive
    ///
    /// Bounds given in the wrong order are swapped, not rejected.
    ///
    /// Uses modulo reduction of a single 32-bit extraction, so ranges
    /// whose size does not divide 2^32 are biased slightly toward low
    /// values. This matches the reference behavior; see
    /// [`bounded_int_unbiased`](Self::bounded_int_unbiased) for the
    /// uniform variant.
    ///
    /// # Example
    /// ```
    /// use twister_core_rs::MersenneTwister;
    ///
    /// let mut rng = MersenneTwister::from_seed(42);
    /// let percent = rng.bounded_int(0, 100);
    /// assert!(percent >= 0 && percent <= 100);
    /// ```
    pub fn bounded_int(&mut self, min: i64, max: i64) -> i64 {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        // i128 keeps `max - min + 1` representable for every i64 pair.
        let span = max as i128 - min as i128 + 1;
        (min as i128 + self.extract() as i128 % span) as i64
    }

    /// Generate a uniformly distributed integer in `[min, max]` inclusive
    ///
    /// Opt-in alternative to [`bounded_int`](Self::bounded_int): draws
    /// 64-bit samples (two extractions per attempt) and rejects the
    /// leftover values at the top of the 64-bit range, so no modulo bias
    /// remains. Consumes a different number of raw words than
    /// `bounded_int`, so the two are not sequence-compatible.
    pub fn bounded_int_unbiased(&mut self, min: i64, max: i64) -> i64 {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        let span = (max as i128 - min as i128 + 1) as u128;
        if span == 1u128 << 64 {
            // Full i64 domain: every 64-bit draw is already uniform.
            return self.extract_u64() as i64;
        }
        let span = span as u64;
        // Number of draws at the top of the range that would skew the
        // distribution if kept.
        let rem = (u64::MAX % span + 1) % span;
        loop {
            let v = self.extract_u64();
            if v <= u64::MAX - rem {
                return (min as i128 + (v % span) as i128) as i64;
            }
        }
    }

    /// Generate a random f64 in the closed interval `[0.0, 1.0]`
    ///
    /// Divides by `0xFFFF_FFFF` (not 2^32), so the result is exactly 1.0
    /// when the raw extraction is `u32::MAX`. This closed upper bound is
    /// reference behavior.
    ///
    /// # Example
    /// ```
    /// use twister_core_rs::MersenneTwister;
    ///
    /// let mut rng = MersenneTwister::from_seed(12345);
    /// let p = rng.unit_float();
    /// assert!((0.0..=1.0).contains(&p));
    /// ```
    pub fn unit_float(&mut self) -> f64 {
        f64::from(self.extract()) / f64::from(u32::MAX)
    }

    /// Get the state array length
    pub fn state_size(&self) -> usize {
        self.size
    }

    /// Get the cursor position within the current batch
    ///
    /// Returns to 0 exactly every `state_size()` extractions, at which
    /// point the next extraction regenerates the batch.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(
            MersenneTwister::new(42, 0).unwrap_err(),
            RngError::InvalidParameter { size: 0 }
        );
    }

    #[test]
    fn test_new_starts_at_cursor_zero() {
        let rng = MersenneTwister::new(12345, 16).unwrap();
        assert_eq!(rng.state_size(), 16);
        assert_eq!(rng.cursor(), 0);
    }

    #[test]
    fn test_unit_float_in_range() {
        let mut rng = MersenneTwister::from_seed(12345);

        for _ in 0..1000 {
            let val = rng.unit_float();
            assert!(
                (0.0..=1.0).contains(&val),
                "unit_float() produced value {} outside [0.0, 1.0]",
                val
            );
        }
    }

    #[test]
    fn test_unit_float_deterministic() {
        let mut rng1 = MersenneTwister::from_seed(99999);
        let mut rng2 = MersenneTwister::from_seed(99999);

        for _ in 0..100 {
            let val1 = rng1.unit_float();
            let val2 = rng2.unit_float();
            assert_eq!(val1, val2, "unit_float() not deterministic");
        }
    }

    #[test]
    fn test_size_one_state() {
        // Degenerate but legal: every extraction regenerates.
        let mut rng = MersenneTwister::new(7, 1).unwrap();
        for _ in 0..10 {
            rng.extract();
            assert_eq!(rng.cursor(), 0);
        }
    }

    #[test]
    fn test_bounded_int_unbiased_in_range() {
        let mut rng = MersenneTwister::from_seed(12345);
        for _ in 0..1000 {
            let val = rng.bounded_int_unbiased(-7, 5);
            assert!((-7..=5).contains(&val), "value {} out of [-7, 5]", val);
        }
    }

    #[test]
    fn test_bounded_int_unbiased_full_domain() {
        let mut rng = MersenneTwister::from_seed(12345);
        // Must not overflow or loop forever on the widest range.
        rng.bounded_int_unbiased(i64::MIN, i64::MAX);
    }
}
