use std::collections::HashMap;

use crate::config::PairCap;
pub use crate::constants::pairing::BRUTE_FORCE_PAIR_COUNT_DIVISOR;
use crate::data::GenerationStrategy;
use crate::types::{Label, PairCount};

/// Per-group label multiplicities with a running count of cross-label pairs.
///
/// Every `push` adds the pairs the new observation forms with the
/// observations already seen under a different label, so `pair_count` is
/// exact at every point of the scan, not only once the group is complete.
#[derive(Debug, Clone, Default)]
pub struct LabelHistogram {
    counts: HashMap<u32, PairCount>,
    observations: PairCount,
    pair_count: PairCount,
}

impl LabelHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_labels(labels: &[Label]) -> Self {
        let mut histogram = Self::new();
        for &label in labels {
            histogram.push(label);
        }
        histogram
    }

    pub fn push(&mut self, label: Label) {
        let seen_with_label = self.counts.entry(label_key(label)).or_insert(0);
        self.pair_count += self.observations - *seen_with_label;
        *seen_with_label += 1;
        self.observations += 1;
    }

    /// Number of unordered index pairs with differing labels seen so far.
    pub fn pair_count(&self) -> PairCount {
        self.pair_count
    }

    pub fn observations(&self) -> PairCount {
        self.observations
    }

    pub fn distinct_labels(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, label: Label) -> PairCount {
        self.counts.get(&label_key(label)).copied().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.observations = 0;
        self.pair_count = 0;
    }

    /// Re-derives the pair count from the finished histogram in closed form.
    pub fn closed_form_pair_count(&self) -> PairCount {
        valid_pair_count(self.counts.values().copied(), self.observations)
    }
}

/// `Σ count · (group_size − count) / 2`: every cross-label pair is counted
/// once from each of its two labels.
pub fn valid_pair_count<I>(label_counts: I, group_size: PairCount) -> PairCount
where
    I: IntoIterator<Item = PairCount>,
{
    let doubled: PairCount = label_counts
        .into_iter()
        .map(|count| count * group_size.saturating_sub(count))
        .sum();
    doubled / 2
}

/// Picks brute-force enumeration when it is cheap relative to the cap.
pub fn select_strategy(pair_count: PairCount, cap: PairCap) -> GenerationStrategy {
    match cap.limit() {
        None => GenerationStrategy::BruteForce,
        Some(limit) if pair_count / BRUTE_FORCE_PAIR_COUNT_DIVISOR < limit as PairCount => {
            GenerationStrategy::BruteForce
        }
        Some(_) => GenerationStrategy::RandomSampling,
    }
}

/// Whether a fully enumerated group must be shuffled and truncated to the cap.
pub fn needs_downsampling(pair_count: PairCount, cap: PairCap) -> bool {
    cap.limit()
        .is_some_and(|limit| (limit as PairCount) < pair_count)
}

// `0.0` and `-0.0` compare equal, so they must share a bucket.
fn label_key(label: Label) -> u32 {
    if label == 0.0 {
        0.0_f32.to_bits()
    } else {
        label.to_bits()
    }
}
