use serde::Deserialize;

use crate::ranges::RangeSpec;

/// A character pool the output must draw from, with a minimum number of
/// occurrences. `min` defaults to zero: the group then only widens the pool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncludeGroup {
    #[serde(default)]
    pub chars: Vec<RangeSpec>,
    #[serde(default)]
    pub min: usize,
}

/// A character pool whose members may never appear in output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExcludeGroup {
    #[serde(default)]
    pub chars: Vec<RangeSpec>,
}

/// Inclusion and exclusion policy for one generation call.
///
/// Both lists default to empty, so the planner always operates on
/// fully-populated data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateOptions {
    #[serde(default)]
    pub include: Vec<IncludeGroup>,
    #[serde(default)]
    pub exclude: Vec<ExcludeGroup>,
}
