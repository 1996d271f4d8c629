use serde::{Deserialize, Serialize};

use crate::data::RankingPair;
use crate::grouping::group_ranges;

/// Aggregate skew metrics for per-group pair counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairSkew {
    pub total: usize,
    pub groups: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub max_share: f64,
    /// Largest group count divided by smallest (infinite when a group emitted nothing).
    pub ratio: f64,
}

/// Counts emitted pairs per group, indexed by group ordinal in input order.
///
/// Pairs are attributed through their winner; pairs never cross group
/// boundaries so the loser always lands in the same slot.
pub fn pairs_per_group<G: PartialEq>(group_ids: &[G], pairs: &[RankingPair]) -> Vec<usize> {
    let mut ordinal_of = vec![0usize; group_ids.len()];
    let mut groups = 0usize;
    for (ordinal, range) in group_ranges(group_ids).enumerate() {
        ordinal_of[range].fill(ordinal);
        groups = ordinal + 1;
    }
    let mut counts = vec![0usize; groups];
    for pair in pairs {
        if let Some(&ordinal) = ordinal_of.get(pair.winner) {
            counts[ordinal] += 1;
        }
    }
    counts
}

/// Compute skew metrics from per-group pair counts.
pub fn pair_skew(counts: &[usize]) -> Option<PairSkew> {
    let min = *counts.iter().min()?;
    let max = *counts.iter().max()?;
    let total: usize = counts.iter().sum();
    let groups = counts.len();
    let mean = total as f64 / groups as f64;
    let max_share = if total == 0 {
        0.0
    } else {
        max as f64 / total as f64
    };
    let ratio = if min == 0 {
        f64::INFINITY
    } else {
        max as f64 / min as f64
    };
    Some(PairSkew {
        total,
        groups,
        min,
        max,
        mean,
        max_share,
        ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_pairs_to_their_group() {
        let group_ids = ["a", "a", "b", "b", "b", "c"];
        let pairs = [
            RankingPair::new(1, 0),
            RankingPair::new(2, 3),
            RankingPair::new(4, 3),
            RankingPair::new(4, 2),
        ];
        assert_eq!(pairs_per_group(&group_ids, &pairs), vec![1, 3, 0]);
    }

    #[test]
    fn pair_skew_reports_balance() {
        let skew = pair_skew(&[2, 2]).expect("skew");
        assert_eq!(skew.total, 4);
        assert_eq!(skew.groups, 2);
        assert!((skew.max_share - 0.5).abs() < 1e-6);
        assert!((skew.ratio - 1.0).abs() < 1e-6);
    }

    #[test]
    fn pair_skew_reports_imbalance_and_empty_groups() {
        let skew = pair_skew(&[4, 2, 2]).expect("skew");
        assert_eq!(skew.min, 2);
        assert_eq!(skew.max, 4);
        assert!((skew.ratio - 2.0).abs() < 1e-6);

        let with_empty = pair_skew(&[3, 0]).expect("skew");
        assert!(with_empty.ratio.is_infinite());
        assert!(pair_skew(&[]).is_none());
    }
}
