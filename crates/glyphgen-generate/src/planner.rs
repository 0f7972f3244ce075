use tracing::debug;

use glyphgen_core::{CharSet, GenerateOptions};

use crate::errors::GenerationError;

/// One include group with its sampling pool reduced by the exclusions.
#[derive(Debug, Clone)]
pub struct PlannedGroup {
    pub set: CharSet,
    pub min: usize,
}

/// Everything the assembler needs for one call: per-group pools, the shared
/// fill pool, and the reconciled output length.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub final_length: usize,
    pub groups: Vec<PlannedGroup>,
    pub pool: CharSet,
}

/// Materialize character sets and reconcile the requested length with the
/// group minimums.
///
/// A group whose effective set is empty is a no-op when its minimum is zero
/// and a configuration fault otherwise. Both fault paths fire here, before
/// any sampling.
pub fn build_plan(
    length: usize,
    options: &GenerateOptions,
) -> Result<GenerationPlan, GenerationError> {
    let excluded = options.exclude.iter().fold(CharSet::new(), |set, group| {
        set.union(&CharSet::from_specs(&group.chars))
    });

    let mut groups = Vec::with_capacity(options.include.len());
    let mut pool = CharSet::new();
    let mut required = 0;
    for (index, group) in options.include.iter().enumerate() {
        let set = CharSet::from_specs(&group.chars).difference(&excluded);
        if set.is_empty() && group.min > 0 {
            return Err(GenerationError::EmptyGroup {
                index,
                min: group.min,
            });
        }
        pool = pool.union(&set);
        required += group.min;
        groups.push(PlannedGroup {
            set,
            min: group.min,
        });
    }

    let final_length = length.max(required);
    if pool.is_empty() && final_length > required {
        return Err(GenerationError::EmptyPool {
            remaining: final_length - required,
        });
    }

    debug!(
        final_length,
        groups = groups.len(),
        pool = pool.len(),
        "generation plan built"
    );

    Ok(GenerationPlan {
        final_length,
        groups,
        pool,
    })
}
