//! Per-group pair generation for pairwise ranking losses.
//!
//! Each contiguous group is handled independently and in input order:
//!
//! 1. Build the group's label histogram and exact valid pair count.
//! 2. If the cap is unbounded, or `pair_count / 2 < cap`, enumerate every
//!    valid pair (shuffling and truncating when the cap is exceeded).
//! 3. Otherwise draw exactly `cap` distinct pairs by rejection sampling.
//!
//! One RNG stream is consumed across all groups, so a fixed seed (or a
//! caller-owned generator in a fixed state) reproduces the same output.

use rand::Rng;
use tracing::{debug, info};

use crate::config::{PairCap, PairGenerationConfig};
use crate::data::{GenerationStrategy, GenerationSummary, RankingPair};
use crate::enumerate::enumerate_group_pairs;
use crate::errors::PairGenError;
use crate::grouping::group_ranges;
use crate::heuristics::{LabelHistogram, select_strategy};
use crate::rng::DeterministicRng;
use crate::sampler::sample_group_pairs;
use crate::types::Label;

/// Generates winner/loser pairs for every group using a generator seeded from `seed`.
///
/// `group_ids` and `labels` are parallel columns; groups are the contiguous
/// runs of equal ids. `max_pairs` applies to each group separately.
pub fn generate_pair_logit_pairs<G>(
    group_ids: &[G],
    labels: &[Label],
    max_pairs: PairCap,
    seed: u64,
) -> Result<Vec<RankingPair>, PairGenError>
where
    G: PartialEq,
{
    let mut rng = DeterministicRng::new(seed);
    let mut pairs = Vec::new();
    generate_pair_logit_pairs_with_rng(group_ids, labels, max_pairs, &mut rng, &mut pairs)?;
    Ok(pairs)
}

/// Same as [`generate_pair_logit_pairs`], drawing from a caller-owned generator
/// and appending to `out`.
///
/// On error `out` is left exactly as it was passed in.
pub fn generate_pair_logit_pairs_with_rng<G, R>(
    group_ids: &[G],
    labels: &[Label],
    max_pairs: PairCap,
    rng: &mut R,
    out: &mut Vec<RankingPair>,
) -> Result<(), PairGenError>
where
    G: PartialEq,
    R: Rng + ?Sized,
{
    generate_into(group_ids, labels, max_pairs, rng, out).map(|_| ())
}

/// Configured pair generator; every call starts a fresh stream from `config.seed`.
#[derive(Clone, Debug, Default)]
pub struct PairGenerator {
    config: PairGenerationConfig,
}

impl PairGenerator {
    pub fn new(config: PairGenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PairGenerationConfig {
        &self.config
    }

    pub fn generate<G: PartialEq>(
        &self,
        group_ids: &[G],
        labels: &[Label],
    ) -> Result<Vec<RankingPair>, PairGenError> {
        self.generate_with_summary(group_ids, labels)
            .map(|(pairs, _)| pairs)
    }

    /// Generates pairs and reports how each group was handled.
    pub fn generate_with_summary<G: PartialEq>(
        &self,
        group_ids: &[G],
        labels: &[Label],
    ) -> Result<(Vec<RankingPair>, GenerationSummary), PairGenError> {
        let mut rng = DeterministicRng::new(self.config.seed);
        let mut pairs = Vec::new();
        let summary = generate_into(
            group_ids,
            labels,
            self.config.max_pairs_per_group,
            &mut rng,
            &mut pairs,
        )?;
        Ok((pairs, summary))
    }
}

fn validate_inputs<G>(group_ids: &[G], labels: &[Label]) -> Result<(), PairGenError> {
    if labels.is_empty() {
        return Err(PairGenError::EmptyLabels);
    }
    if group_ids.len() != labels.len() {
        return Err(PairGenError::LengthMismatch {
            group_ids: group_ids.len(),
            labels: labels.len(),
        });
    }
    if let Some(index) = labels.iter().position(|label| label.is_nan()) {
        return Err(PairGenError::InvalidLabel {
            index,
            value: labels[index],
        });
    }
    Ok(())
}

fn generate_into<G, R>(
    group_ids: &[G],
    labels: &[Label],
    max_pairs: PairCap,
    rng: &mut R,
    out: &mut Vec<RankingPair>,
) -> Result<GenerationSummary, PairGenError>
where
    G: PartialEq,
    R: Rng + ?Sized,
{
    validate_inputs(group_ids, labels)?;

    let start_len = out.len();
    let mut summary = GenerationSummary {
        observations: labels.len(),
        ..GenerationSummary::default()
    };

    for group in group_ranges(group_ids) {
        let histogram = LabelHistogram::from_labels(&labels[group.clone()]);
        let pair_count = histogram.pair_count();
        let strategy = select_strategy(pair_count, max_pairs);
        let before = out.len();

        match strategy {
            GenerationStrategy::BruteForce => {
                summary.brute_force_groups += 1;
                if enumerate_group_pairs(group.clone(), labels, pair_count, max_pairs, rng, out) {
                    summary.downsampled_groups += 1;
                }
            }
            GenerationStrategy::RandomSampling => {
                summary.sampled_groups += 1;
                // Only reachable with a finite cap no larger than pair_count / 2.
                let target = max_pairs.limit().unwrap_or_default();
                if let Err(err) =
                    sample_group_pairs(group.clone(), labels, pair_count, target, rng, out)
                {
                    out.truncate(start_len);
                    return Err(err);
                }
            }
        }

        summary.groups += 1;
        summary.largest_group = summary.largest_group.max(group.len());
        if pair_count == 0 {
            summary.groups_without_pairs += 1;
        }
        debug!(
            "[rankpairs] group {}..{}: {} labels, {} valid pairs, {:?}, emitted {}",
            group.start,
            group.end,
            histogram.distinct_labels(),
            pair_count,
            strategy,
            out.len() - before
        );
    }

    summary.pairs = out.len() - start_len;
    info!(
        "[rankpairs] generated {} pairs across {} groups (cap={}, brute_force={}, sampled={})",
        summary.pairs,
        summary.groups,
        max_pairs,
        summary.brute_force_groups,
        summary.sampled_groups
    );
    Ok(summary)
}
