use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::config::{DEFAULT_SEED, UNBOUNDED_CAP_TOKENS};
use crate::errors::PairGenError;

/// Per-group upper bound on emitted pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairCap {
    /// Emit every valid pair of every group.
    #[default]
    Unbounded,
    /// Emit at most this many pairs per group (zero is legal and yields nothing).
    Limit(usize),
}

impl PairCap {
    /// Returns the finite cap, or `None` when unbounded.
    pub fn limit(self) -> Option<usize> {
        match self {
            PairCap::Unbounded => None,
            PairCap::Limit(limit) => Some(limit),
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, PairCap::Unbounded)
    }
}

impl From<Option<usize>> for PairCap {
    fn from(value: Option<usize>) -> Self {
        value.map_or(PairCap::Unbounded, PairCap::Limit)
    }
}

impl fmt::Display for PairCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairCap::Unbounded => f.write_str(UNBOUNDED_CAP_TOKENS[0]),
            PairCap::Limit(limit) => write!(f, "{limit}"),
        }
    }
}

impl FromStr for PairCap {
    type Err = PairGenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if UNBOUNDED_CAP_TOKENS
            .iter()
            .any(|token| token.eq_ignore_ascii_case(trimmed))
        {
            return Ok(PairCap::Unbounded);
        }
        trimmed.parse::<usize>().map(PairCap::Limit).map_err(|_| {
            PairGenError::Configuration(format!(
                "invalid pair cap '{trimmed}': expected a non-negative integer or one of {}",
                UNBOUNDED_CAP_TOKENS.join("/")
            ))
        })
    }
}

/// Top-level pair generation configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairGenerationConfig {
    /// RNG seed that controls downsampling and rejection sampling.
    pub seed: u64,
    /// Cap applied independently to every group.
    pub max_pairs_per_group: PairCap,
}

impl Default for PairGenerationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_pairs_per_group: PairCap::Unbounded,
        }
    }
}
