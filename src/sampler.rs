use std::collections::BTreeSet;
use std::ops::Range;

use rand::Rng;
use tracing::trace;

use crate::data::RankingPair;
use crate::errors::PairGenError;
use crate::types::{Label, ObservationIndex, PairCount};

/// Draws one candidate pair from `group`, normalized so the higher label wins.
///
/// Returns `None` when both draws hit the same observation or two equal labels.
fn try_draw_pair<R>(
    group: &Range<usize>,
    labels: &[Label],
    rng: &mut R,
) -> Option<(ObservationIndex, ObservationIndex)>
where
    R: Rng + ?Sized,
{
    let first = rng.random_range(group.clone());
    let second = rng.random_range(group.clone());
    if first == second || labels[first] == labels[second] {
        return None;
    }
    if labels[first] < labels[second] {
        Some((second, first))
    } else {
        Some((first, second))
    }
}

/// Appends exactly `target` distinct differing-label pairs of `group` to `out`
/// using rejection sampling.
///
/// `available_pairs` is the group's exact valid pair count; a `target` above it
/// could never be met and is rejected before any draw. Accepted pairs are
/// collected in an ordered set and appended in ascending `(winner, loser)`
/// order, so the output for a given accepted set does not depend on the order
/// the draws arrived in. A zero target returns without touching `rng`.
pub fn sample_group_pairs<R>(
    group: Range<usize>,
    labels: &[Label],
    available_pairs: PairCount,
    target: usize,
    rng: &mut R,
    out: &mut Vec<RankingPair>,
) -> Result<(), PairGenError>
where
    R: Rng + ?Sized,
{
    if target == 0 {
        return Ok(());
    }
    if target as PairCount > available_pairs {
        return Err(PairGenError::Configuration(format!(
            "cannot sample {target} distinct pairs from group {}..{} with only {available_pairs} valid pairs",
            group.start, group.end
        )));
    }

    let mut accepted: BTreeSet<(ObservationIndex, ObservationIndex)> = BTreeSet::new();
    let mut rejected: u64 = 0;
    while accepted.len() < target {
        match try_draw_pair(&group, labels, rng) {
            Some(key) => {
                if !accepted.insert(key) {
                    rejected += 1;
                }
            }
            None => rejected += 1,
        }
    }
    trace!(
        "[rankpairs] sampled {} pairs from group {}..{} after {} rejected draws",
        target,
        group.start,
        group.end,
        rejected
    );

    out.extend(
        accepted
            .into_iter()
            .map(|(winner, loser)| RankingPair::new(winner, loser)),
    );
    Ok(())
}
