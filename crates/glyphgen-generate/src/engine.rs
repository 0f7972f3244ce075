use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use glyphgen_core::GenerateOptions;

use crate::errors::GenerationError;
use crate::model::GenerateRequest;
use crate::params::{check_length, validate_length};
use crate::planner::{GenerationPlan, build_plan};
use crate::sampler::sample;

/// Generate a random string honoring `options`, using the thread-local RNG.
///
/// The output has exactly `max(length, sum of group minimums)` code points
/// and honors every include and exclude constraint.
pub fn generate(length: i64, options: &GenerateOptions) -> Result<String, GenerationError> {
    generate_with(length, options, &mut rand::rng())
}

/// Generate with a caller-supplied randomness source.
pub fn generate_with<R: Rng + ?Sized>(
    length: i64,
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<String, GenerationError> {
    let length = check_length(length)?;
    let plan = build_plan(length, options)?;
    Ok(assemble(&plan, rng))
}

/// Generate from a request whose `length` arrived untyped.
pub fn generate_request(request: &GenerateRequest) -> Result<String, GenerationError> {
    generate_request_with(request, &mut rand::rng())
}

/// Generate from an untyped request with a caller-supplied randomness source.
pub fn generate_request_with<R: Rng + ?Sized>(
    request: &GenerateRequest,
    rng: &mut R,
) -> Result<String, GenerationError> {
    let length = validate_length(request.length.as_ref())?;
    let plan = build_plan(length, &request.options)?;
    Ok(assemble(&plan, rng))
}

/// RNG for reproducible generation runs.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn assemble<R: Rng + ?Sized>(plan: &GenerationPlan, rng: &mut R) -> String {
    let mut drawn = Vec::with_capacity(plan.final_length);
    for group in &plan.groups {
        for _ in 0..group.min {
            drawn.push(sample(&group.set, rng));
        }
    }
    while drawn.len() < plan.final_length {
        drawn.push(sample(&plan.pool, rng));
    }
    // Mandated characters must not sit at predictable positions.
    drawn.shuffle(rng);
    debug!(length = drawn.len(), "assembled output");
    drawn.into_iter().collect()
}
