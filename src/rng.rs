//! Random source helpers shared by every generator.
//!
//! All generators take any [`RngCore`] by mutable reference so one seeded stream feeds every
//! phase of a run. Each random choice costs exactly one `u32` draw reduced modulo the number of
//! candidates, which keeps the draw count stable and a seed reproducible.
//!
//! Runs are seeded with ChaCha8, whose output stream is fixed across platforms and releases,
//! so a logged seed regenerates the same dungeon anywhere.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws a single value and reduces it to an index in `0..len`.
///
/// `len` must be non-zero.
pub fn draw_index<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0, "cannot draw an index from an empty range");
    rng.next_u32() as usize % len
}

/// Creates the generator used for a run from an explicit seed.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Picks a fresh seed from the thread-local generator.
pub fn random_seed() -> u64 {
    rand::random()
}
