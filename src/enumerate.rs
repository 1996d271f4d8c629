use std::ops::Range;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::PairCap;
use crate::data::RankingPair;
use crate::heuristics::needs_downsampling;
use crate::types::{Label, PairCount};

/// Appends every differing-label pair of `group` to `out`.
///
/// Pairs are emitted in `(first, second)` scan order with the higher label as
/// winner. When `cap` is finite and below `pair_count`, only the segment
/// appended here is shuffled with `rng` and cut back to `cap` entries; pairs
/// already in `out` are left untouched. Returns whether that downsampling
/// happened.
pub fn enumerate_group_pairs<R>(
    group: Range<usize>,
    labels: &[Label],
    pair_count: PairCount,
    cap: PairCap,
    rng: &mut R,
    out: &mut Vec<RankingPair>,
) -> bool
where
    R: Rng + ?Sized,
{
    let shift = out.len();
    for first in group.clone() {
        for second in first + 1..group.end {
            let (first_label, second_label) = (labels[first], labels[second]);
            if first_label == second_label {
                continue;
            }
            if first_label > second_label {
                out.push(RankingPair::new(first, second));
            } else {
                out.push(RankingPair::new(second, first));
            }
        }
    }

    match cap.limit() {
        Some(limit) if needs_downsampling(pair_count, cap) => {
            out[shift..].shuffle(rng);
            out.truncate(shift + limit);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::LabelHistogram;
    use crate::rng::DeterministicRng;

    fn keys(pairs: &[RankingPair]) -> Vec<(usize, usize)> {
        pairs.iter().map(RankingPair::key).collect()
    }

    #[test]
    fn enumerates_in_scan_order_with_higher_label_first() {
        let labels = [3.0, 1.0, 2.0];
        let mut rng = DeterministicRng::new(0);
        let mut out = Vec::new();
        let downsampled =
            enumerate_group_pairs(0..3, &labels, 3, PairCap::Unbounded, &mut rng, &mut out);
        assert!(!downsampled);
        assert_eq!(keys(&out), vec![(0, 1), (0, 2), (2, 1)]);
        assert!(out.iter().all(|pair| pair.weight == 1.0));
    }

    #[test]
    fn equal_labels_never_pair() {
        let labels = [5.0, 5.0, 5.0];
        let mut rng = DeterministicRng::new(0);
        let mut out = Vec::new();
        enumerate_group_pairs(0..3, &labels, 0, PairCap::Limit(2), &mut rng, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn downsampling_touches_only_the_new_segment() {
        let labels = [1.0, 0.0, 1.0, 2.0, 3.0, 4.0];
        let sentinel = RankingPair::new(0, 1);
        let mut out = vec![sentinel];
        let group = 2..6;
        let pair_count = LabelHistogram::from_labels(&labels[group.clone()]).pair_count();
        assert_eq!(pair_count, 6);

        let mut rng = DeterministicRng::new(11);
        let downsampled =
            enumerate_group_pairs(group, &labels, pair_count, PairCap::Limit(4), &mut rng, &mut out);
        assert!(downsampled);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], sentinel);
        let mut tail = keys(&out[1..]);
        tail.sort_unstable();
        tail.dedup();
        assert_eq!(tail.len(), 4);
        for (winner, loser) in tail {
            assert!((2..6).contains(&winner) && (2..6).contains(&loser));
            assert!(labels[winner] > labels[loser]);
        }
    }

    #[test]
    fn downsampling_is_reproducible_for_a_seed() {
        let labels: Vec<Label> = (0..12).map(|idx| (idx % 5) as Label).collect();
        let pair_count = LabelHistogram::from_labels(&labels).pair_count();
        let run = |seed| {
            let mut rng = DeterministicRng::new(seed);
            let mut out = Vec::new();
            enumerate_group_pairs(0..12, &labels, pair_count, PairCap::Limit(10), &mut rng, &mut out);
            out
        };
        assert_eq!(run(5), run(5));
        assert_eq!(run(5).len(), 10);
    }
}
