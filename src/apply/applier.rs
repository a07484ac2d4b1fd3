//! General diff application
//!
//! [`apply`] transforms a container in place so its order matches the
//! target the diff describes. The difficulty is bookkeeping: every physical
//! removal or relocation shifts the indices of edits not yet applied, so
//! each phase re-indexes the pending move list as it goes.
//!
//! Phase order is deletions, then moves, then additions - each consuming
//! its list in the one direction that keeps re-indexing local to the move
//! list: deletions shrink the container from the top, moves finalize target
//! slots bottom-up, and additions grow it from the bottom without
//! disturbing anything already placed.

use log::{debug, trace};

use crate::diff::{Diff, Move};
use crate::error::Result;

use super::container::OrderedContainer;

/// Apply `diff` to `container`, mutating it in place
///
/// `create` supplies the node for each addition, called with the addition's
/// target index; node content is the caller's concern, the applier only
/// places what it is given.
///
/// The diff is validated against `container.len()` up front and nothing is
/// mutated on a validation failure (there is no rollback once mutation
/// starts, so malformed descriptors must never get that far).
///
/// Returns the number of primitive container mutations performed.
///
/// # Example
///
/// ```rust
/// use reconkit_core::{apply, compute, VecContainer};
///
/// let old = vec!["a", "b", "c", "d"];
/// let new = vec!["d", "a", "c"];
///
/// let diff = compute(&old, &new);
/// let mut container = VecContainer::from(old);
/// apply(&diff, &mut container, |index| new[index]).unwrap();
///
/// assert_eq!(container.nodes(), new.as_slice());
/// ```
pub fn apply<C, F>(diff: &Diff, container: &mut C, mut create: F) -> Result<usize>
where
    C: OrderedContainer,
    F: FnMut(usize) -> C::Node,
{
    diff.validate(container.len())?;

    let mut moves = synthesize_identity_moves(diff, container.len());
    debug!(
        "applying diff: {} deletions, {} moves ({} explicit), {} additions",
        diff.deletions.len(),
        moves.len(),
        diff.moves.len(),
        diff.additions.len()
    );

    let mut ops = 0;

    // Deletions, highest source index first: removals below a pending
    // move's source shift it left by one, removals above leave it alone.
    // Deletion indices never collide with a move source (validated), so no
    // move is ever invalidated outright.
    for &deleted in diff.deletions.iter().rev() {
        trace!("remove at {deleted}");
        container.remove_at(deleted);
        ops += 1;

        for pending in &mut moves {
            if pending.from > deleted {
                pending.from -= 1;
            }
        }
    }

    // Moves, ascending target index. Target slots below the current one are
    // already final, so only source indexes of later moves need adjusting.
    for current in 0..moves.len() {
        let Move { from, to } = moves[current];
        if from == to {
            continue;
        }

        let node = container
            .node_at(from)
            .expect("validated move source within container bounds");

        // The slot's successor after the element detaches: detaching from
        // below `to` shifts the span left by one, detaching from above
        // leaves it in place. Past the end means append.
        let reference_index = if from < to { to + 1 } else { to };
        let reference = container.node_at(reference_index);
        trace!("move {from}->{to} (reference slot {reference_index})");
        container.insert_before(node, reference.as_ref());
        ops += 1;

        // Sources inside the travelled span slid one position toward the
        // vacated side.
        for pending in &mut moves[current + 1..] {
            if from < to {
                if pending.from >= from && pending.from <= to {
                    pending.from -= 1;
                }
            } else if pending.from >= to && pending.from <= from {
                pending.from += 1;
            }
        }
    }

    // Additions, ascending: each insertion only shifts indices above it,
    // which are exactly the ones not yet placed.
    for &added in &diff.additions {
        let reference = container.node_at(added);
        trace!("insert at {added}");
        container.insert_before(create(added), reference.as_ref());
        ops += 1;
    }

    Ok(ops)
}

/// Complete the move list so it covers every non-addition target index
///
/// The descriptor leaves unmoved elements implicit. This pre-pass pairs
/// each unclaimed target index with the next source index claimed by
/// neither a deletion nor an explicit move, producing one uniform
/// `to`-sorted move list for the phases that follow.
fn synthesize_identity_moves(diff: &Diff, source_len: usize) -> Vec<Move> {
    let target_len = diff.target_len(source_len);

    let mut claimed = vec![false; source_len];
    for &deleted in &diff.deletions {
        claimed[deleted] = true;
    }
    for m in &diff.moves {
        claimed[m.from] = true;
    }

    let mut moves = Vec::with_capacity(target_len - diff.additions.len());
    let mut pending = diff.moves.iter().peekable();
    let mut additions = diff.additions.iter().peekable();
    let mut source = 0;

    for target in 0..target_len {
        if additions.peek() == Some(&&target) {
            additions.next();
            continue;
        }
        if let Some(next) = pending.peek() {
            if next.to == target {
                moves.push(**next);
                pending.next();
                continue;
            }
        }

        while source < source_len && claimed[source] {
            source += 1;
        }
        debug_assert!(source < source_len, "unclaimed sources exhausted");
        moves.push(Move::new(source, target));
        source += 1;
    }

    moves
}
