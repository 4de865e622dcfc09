//! Twister Core - Deterministic Mersenne Twister PRNG
//!
//! Reproducible pseudo-random 32-bit values from a single seed, plus
//! bounded integers and unit-interval floats derived from them.
//!
//! # Architecture
//!
//! - **rng**: The generator itself (state array, twist, tempering)
//! - **seed**: Seed-source strategies injected by the caller
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (same seed, same sequence)
//! 2. Every state word is masked to 32 bits after any write
//! 3. The generator never reads the clock on its own; wall-clock
//!    seeding is an explicit, caller-supplied strategy

// Module declarations
pub mod rng;
pub mod seed;

// Re-exports for convenience
pub use rng::{MersenneTwister, RngError, DEFAULT_STATE_SIZE};
pub use seed::{FixedSeed, SeedSource, SystemClockSeed};
