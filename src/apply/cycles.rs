//! Cycle-based application of pure permutations
//!
//! A move set with no additions and no deletions is a permutation, and a
//! permutation factors into disjoint cycles. Rotating each cycle in place
//! costs exactly one primitive relocation per cycle member, so the whole
//! rearrangement costs the sum of the cycle lengths - never more than the
//! container is long, and without any of the general applier's cross-move
//! re-indexing.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::diff::Diff;
use crate::error::{DiffError, Result};

use super::container::OrderedContainer;

/// Apply a pure-permutation diff to `container` by cycle rotation
///
/// Precondition: `diff.is_permutation()` - a diff carrying additions or
/// deletions is rejected as [`DiffError::NotAPermutation`] before anything
/// is touched. The move set must also close under `from -> to` chasing
/// (every target index reappearing as a source index), which holds for
/// every descriptor satisfying the coverage invariants; open chains are
/// rejected as [`DiffError::UnclosedCycle`].
///
/// Returns the number of primitive relocations performed: exactly the sum
/// of the non-trivial cycle lengths, which equals the number of
/// non-identity moves in the diff.
///
/// # Example
///
/// ```rust
/// use reconkit_core::{apply_permutation, Diff, Move, VecContainer};
///
/// let mut container = VecContainer::from(vec!["a", "b", "c"]);
/// let diff = Diff::new(vec![], vec![], vec![
///     Move::new(1, 0),
///     Move::new(0, 1),
/// ]);
///
/// let ops = apply_permutation(&diff, &mut container).unwrap();
/// assert_eq!(container.nodes(), &["b", "a", "c"]);
/// assert_eq!(ops, 2);
/// ```
pub fn apply_permutation<C>(diff: &Diff, container: &mut C) -> Result<usize>
where
    C: OrderedContainer,
{
    if !diff.is_permutation() {
        return Err(DiffError::NotAPermutation {
            additions: diff.additions.len(),
            deletions: diff.deletions.len(),
        });
    }
    diff.validate(container.len())?;

    // Decomposition is pure computation; any malformed chain is caught
    // here, before the first container mutation.
    let cycles = decompose_cycles(diff)?;
    debug!(
        "applying permutation: {} moves in {} non-trivial cycles",
        diff.moves.len(),
        cycles.len()
    );

    let mut ops = 0;
    for cycle in &cycles {
        // Snapshot pass, read-only: the node that will land in each slot,
        // and whether it travels toward a lower index. Disjoint cycles
        // leave each other's positions alone, so reading by original index
        // is safe even after earlier cycles have been rotated.
        let len = cycle.len();
        let mut slots = Vec::with_capacity(len);
        for (i, &target) in cycle.iter().enumerate() {
            let source = cycle[(i + len - 1) % len];
            let node = container
                .node_at(source)
                .expect("validated cycle index within container bounds");
            slots.push((node, target, target < source));
        }

        // Mutation pass, in cycle order: at most one node of the cycle is
        // out of place at any moment, so the reference slot needs at most
        // a +1 correction for nodes travelling toward a higher index. A
        // node already in place resolves to inserting before itself, which
        // the container treats as a no-op.
        for (node, target, backward) in slots {
            let reference_index = if backward { target } else { target + 1 };
            trace!("rotate into slot {target} (reference slot {reference_index})");
            let reference = container.node_at(reference_index);
            container.insert_before(node, reference.as_ref());
            ops += 1;
        }
    }

    Ok(ops)
}

/// Factor the move set into disjoint cycles of source indices
///
/// Starting points are scanned in ascending index order with an explicit
/// visited structure, so the output is deterministic. Length-1 cycles
/// (identity moves) are dropped - they cost nothing to "apply".
fn decompose_cycles(diff: &Diff) -> Result<Vec<Vec<usize>>> {
    let mut remaining: BTreeMap<usize, usize> =
        diff.moves.iter().map(|m| (m.from, m.to)).collect();

    let mut cycles = Vec::new();
    loop {
        // Always start from the smallest unvisited source index.
        let (start, first) = match remaining.iter().next() {
            Some((&from, &to)) => (from, to),
            None => break,
        };
        remaining.remove(&start);

        let mut cycle = vec![start];
        let mut next = first;
        while next != start {
            cycle.push(next);
            match remaining.remove(&next) {
                Some(successor) => next = successor,
                None => return Err(DiffError::UnclosedCycle { index: next }),
            }
        }

        if cycle.len() > 1 {
            cycles.push(cycle);
        }
    }

    Ok(cycles)
}
