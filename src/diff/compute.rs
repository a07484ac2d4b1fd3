//! Positional diff computation
//!
//! [`compute`] derives a [`Diff`] from two sequences by straight identity
//! comparison: linear search per element, O(n²) overall. It exists to
//! generate well-formed descriptors for tests, demos and small inputs - it
//! is not a production matcher (no LCS, no keying) and makes no attempt to
//! minimize the move list.

use super::descriptor::{Diff, Move};

/// Compute the diff turning `old` into `new`
///
/// Elements are matched by equality, so both sequences must be free of
/// duplicates; with duplicates present the result is unspecified. Every
/// returned descriptor satisfies [`Diff::validate`] for
/// `source_len == old.len()`.
///
/// # Example
///
/// ```rust
/// use reconkit_core::{compute, Move};
///
/// let old = ["a", "b", "c"];
/// let new = ["c", "b", "x"];
///
/// let diff = compute(&old, &new);
/// assert_eq!(diff.deletions, vec![0]);
/// assert_eq!(diff.additions, vec![2]);
/// assert_eq!(diff.moves, vec![Move::new(2, 0)]);
/// ```
pub fn compute<T: PartialEq>(old: &[T], new: &[T]) -> Diff {
    let mut additions = Vec::new();
    let mut moves = Vec::new();

    // Walking new positions in order keeps additions and move targets
    // sorted without a separate pass.
    for (to, element) in new.iter().enumerate() {
        match old.iter().position(|candidate| candidate == element) {
            None => additions.push(to),
            Some(from) if from != to => moves.push(Move::new(from, to)),
            Some(_) => {}
        }
    }

    let deletions = old
        .iter()
        .enumerate()
        .filter(|(_, element)| !new.contains(element))
        .map(|(index, _)| index)
        .collect();

    Diff {
        additions,
        deletions,
        moves,
    }
}
