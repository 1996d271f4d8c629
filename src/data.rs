use serde::{Deserialize, Serialize};

use crate::constants::pairing::GENERATED_PAIR_WEIGHT;
use crate::types::{ObservationIndex, PairWeight};

/// One pairwise ranking constraint: `winner` should be ranked above `loser`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankingPair {
    /// Observation with the strictly greater label.
    pub winner: ObservationIndex,
    /// Observation with the strictly smaller label.
    pub loser: ObservationIndex,
    pub weight: PairWeight,
}

impl RankingPair {
    /// Pair with the fixed weight used for generated pairs.
    pub fn new(winner: ObservationIndex, loser: ObservationIndex) -> Self {
        Self {
            winner,
            loser,
            weight: GENERATED_PAIR_WEIGHT,
        }
    }

    /// `(winner, loser)` key, as used for deduplication and ordering.
    pub fn key(&self) -> (ObservationIndex, ObservationIndex) {
        (self.winner, self.loser)
    }
}

/// How a single group's pairs were produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStrategy {
    /// Every valid pair was enumerated (and possibly shuffled and truncated).
    BruteForce,
    /// Pairs were drawn by rejection sampling.
    RandomSampling,
}

/// Aggregate counters collected while generating pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub groups: usize,
    pub observations: usize,
    pub pairs: usize,
    pub brute_force_groups: usize,
    pub sampled_groups: usize,
    /// Brute-force groups whose enumeration was shuffled and truncated to the cap.
    pub downsampled_groups: usize,
    /// Groups where every observation carries the same label.
    pub groups_without_pairs: usize,
    pub largest_group: usize,
}
