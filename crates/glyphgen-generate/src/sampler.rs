use rand::Rng;

use glyphgen_core::CharSet;

/// Draw one character uniformly at random from `set`.
///
/// The set must be non-empty; the planner rejects configurations that would
/// hand an empty set to the assembler.
pub fn sample<R: Rng + ?Sized>(set: &CharSet, rng: &mut R) -> char {
    assert!(!set.is_empty(), "sampled an empty character set");
    set.get(rng.random_range(0..set.len()))
}
