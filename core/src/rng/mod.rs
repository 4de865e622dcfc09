//! Deterministic random number generation
//!
//! Uses the Mersenne Twister algorithm for reproducible random number
//! generation. CRITICAL: every operation is deterministic for a fixed seed.

mod mersenne;

pub use mersenne::{MersenneTwister, RngError, DEFAULT_STATE_SIZE};
