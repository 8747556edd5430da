//! # Minimum-Cost Segmentation
//!
//! Finds the cheapest way to cut a piece into 2+ vocabulary tokens.
//!
//! The search space is every composition of the piece into at least two
//! parts; a part is an edge between two char positions, weighted by the
//! vocabulary weight of its text. Among all cheapest compositions the
//! winner is the one with the fewest parts, and among those the one whose
//! cut positions are lexicographically smallest.
//!
//! A suffix table `best[p]` (the least `(cost, parts)` cover of `p..n`)
//! is filled right-to-left in `O(n * max_part_len)`; the cuts are then
//! recovered left-to-right by taking the smallest next cut which stays on
//! an optimal path. A cover is optimal only if its suffix is, so this picks
//! the same winner as ranking whole compositions.

use crate::types::Weight;

/// The char-index ranges of a segmentation, left to right.
pub type Segmentation = Vec<(usize, usize)>;

/// Find the minimum-cost segmentation of a piece into 2+ parts.
///
/// ## Arguments
/// * `n` - the piece length, in chars.
/// * `max_part_len` - the longest possible part, in chars.
/// * `weight` - the weight of the part spanning chars `start..end`;
///   `None` if that text is not a vocabulary token.
///
/// ## Returns
/// `None` if `n < 2` or no segmentation into known parts exists.
pub fn min_cost_segmentation<F>(
    n: usize,
    max_part_len: usize,
    mut weight: F,
) -> Option<Segmentation>
where
    F: FnMut(usize, usize) -> Option<Weight>,
{
    if n < 2 {
        return None;
    }
    let max_part_len = max_part_len.min(n - 1);
    if max_part_len == 0 {
        return None;
    }

    // edges[p][len - 1] is the weight of the part p..p+len.
    let edges: Vec<Vec<Option<Weight>>> = (0..n)
        .map(|p| {
            (1..=max_part_len.min(n - p))
                .map(|len| weight(p, p + len))
                .collect()
        })
        .collect();

    // best[p]: the least `(cost, parts)` cover of p..n.
    let mut best: Vec<Option<(Weight, usize)>> = vec![None; n + 1];
    best[n] = Some((0, 0));
    for p in (0..n).rev() {
        best[p] = edges[p]
            .iter()
            .enumerate()
            .filter_map(|(idx, w)| {
                let w = (*w)?;
                let (cost, parts) = best[p + idx + 1]?;
                Some((w.saturating_add(cost), parts + 1))
            })
            .min();
    }

    // Every edge is shorter than `n`, so any full cover has 2+ parts.
    let (_, parts) = best[0]?;

    let mut segmentation = Vec::with_capacity(parts);
    let mut pos = 0;
    while pos < n {
        let target = best[pos]?;
        let len = edges[pos].iter().enumerate().find_map(|(idx, w)| {
            let w = (*w)?;
            let (cost, parts) = best[pos + idx + 1]?;
            ((w.saturating_add(cost), parts + 1) == target).then_some(idx + 1)
        })?;
        segmentation.push((pos, pos + len));
        pos += len;
    }

    Some(segmentation)
}

#[cfg(test)]
pub(crate) mod reference {
    use super::*;

    /// Every composition of `n` into 2+ parts, by increasing cut count,
    /// then lexicographic cut positions.
    fn compositions(n: usize) -> Vec<Vec<usize>> {
        fn combinations(
            start: usize,
            end: usize,
            k: usize,
            prefix: &mut Vec<usize>,
            out: &mut Vec<Vec<usize>>,
        ) {
            if k == 0 {
                out.push(prefix.clone());
                return;
            }
            for c in start..end {
                prefix.push(c);
                combinations(c + 1, end, k - 1, prefix, out);
                prefix.pop();
            }
        }

        let mut out = Vec::new();
        for cuts in 1..n {
            combinations(1, n, cuts, &mut Vec::new(), &mut out);
        }
        out
    }

    /// The exhaustive search: the first cheapest valid composition.
    pub(crate) fn exhaustive_segmentation<F>(
        n: usize,
        mut weight: F,
    ) -> Option<Segmentation>
    where
        F: FnMut(usize, usize) -> Option<Weight>,
    {
        let mut winner: Option<(Weight, Segmentation)> = None;
        for cuts in compositions(n) {
            let bounds: Vec<usize> = core::iter::once(0)
                .chain(cuts)
                .chain(core::iter::once(n))
                .collect();
            let parts: Segmentation = bounds.windows(2).map(|w| (w[0], w[1])).collect();

            let score = parts
                .iter()
                .try_fold(0 as Weight, |acc, &(s, e)| Some(acc + weight(s, e)?));
            if let Some(score) = score
                && winner.as_ref().is_none_or(|(best, _)| score < *best)
            {
                winner = Some((score, parts));
            }
        }
        winner.map(|(_, parts)| parts)
    }
}
