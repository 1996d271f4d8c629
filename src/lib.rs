#![doc = include_str!("../README.md")]

/// Pair generation configuration types.
pub mod config;
/// Centralized constants used across generation, RNG, and IO.
pub mod constants;
/// Pair and summary types.
pub mod data;
/// Exhaustive per-group pair enumeration.
pub mod enumerate;
/// Reusable command-line runners shared by demos and downstream crates.
pub mod example_apps;
/// Contiguous group partitioning.
pub mod grouping;
/// Pair counting and strategy selection.
pub mod heuristics;
/// Observation reader and pair writer.
pub mod io;
/// Aggregate per-group metrics helpers.
pub mod metrics;
/// Group-by-group orchestration and public generation API.
pub mod pairing;
/// Seeded, restorable random number generator.
pub mod rng;
/// Rejection sampling of distinct per-group pairs.
pub mod sampler;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::{PairCap, PairGenerationConfig};
pub use data::{GenerationStrategy, GenerationSummary, RankingPair};
pub use enumerate::enumerate_group_pairs;
pub use errors::PairGenError;
pub use grouping::{GroupRanges, group_ranges};
pub use heuristics::{LabelHistogram, select_strategy, valid_pair_count};
pub use io::{Observations, PairFormat, read_observations, write_pairs};
pub use pairing::{PairGenerator, generate_pair_logit_pairs, generate_pair_logit_pairs_with_rng};
pub use rng::DeterministicRng;
pub use sampler::sample_group_pairs;
pub use types::{GroupId, Label, ObservationIndex, PairCount, PairWeight};
