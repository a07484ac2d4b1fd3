//! Diff and Move: the change-descriptor value types
//!
//! A descriptor names *which* positions change, never what the elements
//! contain. Indices on the source side (deletions, move sources) refer to
//! the sequence before the change; indices on the target side (additions,
//! move targets) refer to the sequence after it. Elements covered by
//! neither side are implicitly unmoved - the applier reconstructs those
//! identity moves itself.

use crate::error::{DiffError, Result};
use crate::{SourceIndex, TargetIndex};
use serde::{Deserialize, Serialize};

/// A single element relocation
///
/// `from` indexes the source (pre-change) sequence, `to` the target
/// (post-change) sequence. A move with `from == to` is an explicit identity
/// move and applies as a no-op.
///
/// # Example
///
/// ```rust
/// use reconkit_core::Move;
///
/// let m = Move::new(3, 0);
/// assert_eq!(m.from, 3);
/// assert_eq!(m.to, 0);
/// assert!(!m.is_identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index of the element in the source sequence
    pub from: SourceIndex,

    /// Final index of the element in the target sequence
    pub to: TargetIndex,
}

impl Move {
    /// Create a new move
    pub fn new(from: SourceIndex, to: TargetIndex) -> Self {
        Self { from, to }
    }

    /// True when the move leaves its element where it already is
    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Declarative description of the changes between two ordered sequences
///
/// # Invariants
///
/// For a source sequence of length `n`:
///
/// - `additions` is strictly increasing; each index is a position in the
///   target sequence where a new element appears.
/// - `deletions` is strictly increasing; each index is a position in the
///   source sequence whose element disappears. The applier consumes them
///   highest-first.
/// - `moves` is sorted by `to`, strictly increasing. `from` values are
///   unique and disjoint from `deletions`; `to` values are disjoint from
///   `additions`.
/// - `n - deletions.len() + additions.len()` equals the target length, and
///   every target index is covered by exactly one of: an addition, a move's
///   `to`, or an implicitly unmoved element.
///
/// [`Diff::validate`] checks all of the above and is run by the appliers
/// before any container mutation.
///
/// # Example
///
/// ```rust
/// use reconkit_core::{Diff, Move};
///
/// // [a, b, c] -> [c, a, b]
/// let diff = Diff::new(vec![], vec![], vec![
///     Move::new(2, 0),
///     Move::new(0, 1),
///     Move::new(1, 2),
/// ]);
/// assert!(diff.is_permutation());
/// assert!(diff.validate(3).is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff {
    /// Target indices gaining a new element, strictly increasing
    pub additions: Vec<TargetIndex>,

    /// Source indices losing their element, strictly increasing
    pub deletions: Vec<SourceIndex>,

    /// Element relocations, sorted by `to`
    pub moves: Vec<Move>,
}

impl Diff {
    /// Create a diff from its three index lists
    pub fn new(
        additions: Vec<TargetIndex>,
        deletions: Vec<SourceIndex>,
        moves: Vec<Move>,
    ) -> Self {
        Self {
            additions,
            deletions,
            moves,
        }
    }

    /// True when applying the diff would change nothing
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty() && self.moves.is_empty()
    }

    /// True when the diff only rearranges elements (no additions, no
    /// deletions) - the precondition of the cycle optimizer
    pub fn is_permutation(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty()
    }

    /// Length of the target sequence for a source of length `source_len`
    ///
    /// Only meaningful for diffs that pass [`Diff::validate`] for the same
    /// `source_len`.
    pub fn target_len(&self, source_len: usize) -> usize {
        source_len + self.additions.len() - self.deletions.len()
    }

    /// Check every descriptor invariant against a source of length
    /// `source_len`, without touching any container
    ///
    /// Returns the first violation found. The appliers call this before
    /// mutating, so a reported error guarantees no partial application.
    pub fn validate(&self, source_len: usize) -> Result<()> {
        // Deletions first: their count feeds the target-length arithmetic.
        for (i, &deleted) in self.deletions.iter().enumerate() {
            if deleted >= source_len {
                return Err(DiffError::DeletionOutOfBounds {
                    index: deleted,
                    source_len,
                });
            }
            if i > 0 && self.deletions[i - 1] >= deleted {
                return Err(DiffError::DeletionsNotSorted);
            }
        }

        let target_len = self.target_len(source_len);

        for (i, &added) in self.additions.iter().enumerate() {
            if added >= target_len {
                return Err(DiffError::AdditionOutOfBounds {
                    index: added,
                    target_len,
                });
            }
            if i > 0 && self.additions[i - 1] >= added {
                return Err(DiffError::AdditionsNotSorted);
            }
        }

        for (i, m) in self.moves.iter().enumerate() {
            if m.from >= source_len {
                return Err(DiffError::MoveSourceOutOfBounds {
                    from: m.from,
                    source_len,
                });
            }
            if m.to >= target_len {
                return Err(DiffError::MoveTargetOutOfBounds {
                    to: m.to,
                    target_len,
                });
            }
            if i > 0 && self.moves[i - 1].to >= m.to {
                return Err(DiffError::MovesNotSorted);
            }
        }

        // Source side: each index deleted or moved at most once.
        let mut source_claimed = vec![false; source_len];
        for &deleted in &self.deletions {
            source_claimed[deleted] = true;
        }
        for m in &self.moves {
            if source_claimed[m.from] {
                return Err(DiffError::SourceIndexConflict { index: m.from });
            }
            source_claimed[m.from] = true;
        }

        // Target side: each index filled by at most one addition or move.
        let mut target_claimed = vec![false; target_len];
        for &added in &self.additions {
            target_claimed[added] = true;
        }
        for m in &self.moves {
            if target_claimed[m.to] {
                return Err(DiffError::TargetIndexConflict { index: m.to });
            }
            target_claimed[m.to] = true;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_diff() {
        let diff = Diff::default();
        assert!(diff.is_empty());
        assert!(diff.is_permutation());
        assert_eq!(diff.target_len(4), 4);
        assert!(diff.validate(4).is_ok());
    }

    #[test]
    fn test_target_len_arithmetic() {
        let diff = Diff::new(vec![1, 3], vec![3, 4, 5], vec![]);
        assert_eq!(diff.target_len(6), 5);
    }

    #[test]
    fn test_valid_mixed_diff() {
        let diff = Diff::new(
            vec![1, 3],
            vec![3, 4, 5],
            vec![Move::new(1, 2), Move::new(2, 4)],
        );
        assert!(diff.validate(6).is_ok());
        assert!(!diff.is_permutation());
    }

    #[test]
    fn test_rejects_addition_out_of_bounds() {
        let diff = Diff::new(vec![3], vec![], vec![]);
        assert_eq!(
            diff.validate(2),
            Err(DiffError::AdditionOutOfBounds {
                index: 3,
                target_len: 3
            })
        );
    }

    #[test]
    fn test_rejects_deletion_out_of_bounds() {
        let diff = Diff::new(vec![], vec![5], vec![]);
        assert_eq!(
            diff.validate(3),
            Err(DiffError::DeletionOutOfBounds {
                index: 5,
                source_len: 3
            })
        );
    }

    #[test]
    fn test_rejects_move_out_of_bounds() {
        let diff = Diff::new(vec![], vec![], vec![Move::new(9, 0)]);
        assert_eq!(
            diff.validate(3),
            Err(DiffError::MoveSourceOutOfBounds {
                from: 9,
                source_len: 3
            })
        );

        let diff = Diff::new(vec![], vec![], vec![Move::new(0, 9)]);
        assert_eq!(
            diff.validate(3),
            Err(DiffError::MoveTargetOutOfBounds {
                to: 9,
                target_len: 3
            })
        );
    }

    #[test]
    fn test_rejects_unsorted_additions() {
        let diff = Diff::new(vec![2, 1], vec![], vec![]);
        assert_eq!(diff.validate(3), Err(DiffError::AdditionsNotSorted));

        // Duplicates count as unsorted: strictly increasing required.
        let diff = Diff::new(vec![1, 1], vec![], vec![]);
        assert_eq!(diff.validate(3), Err(DiffError::AdditionsNotSorted));
    }

    #[test]
    fn test_rejects_unsorted_deletions() {
        let diff = Diff::new(vec![], vec![2, 0], vec![]);
        assert_eq!(diff.validate(3), Err(DiffError::DeletionsNotSorted));
    }

    #[test]
    fn test_rejects_moves_unsorted_by_target() {
        let diff = Diff::new(vec![], vec![], vec![Move::new(0, 2), Move::new(2, 0)]);
        assert_eq!(diff.validate(3), Err(DiffError::MovesNotSorted));
    }

    #[test]
    fn test_rejects_source_conflicts() {
        // Two moves leaving from the same index.
        let diff = Diff::new(vec![], vec![], vec![Move::new(0, 1), Move::new(0, 2)]);
        assert_eq!(
            diff.validate(3),
            Err(DiffError::SourceIndexConflict { index: 0 })
        );

        // A deletion colliding with a move source.
        let diff = Diff::new(vec![], vec![1], vec![Move::new(1, 0)]);
        assert_eq!(
            diff.validate(3),
            Err(DiffError::SourceIndexConflict { index: 1 })
        );
    }

    #[test]
    fn test_rejects_target_conflicts() {
        // An addition colliding with a move target.
        let diff = Diff::new(vec![1], vec![2], vec![Move::new(0, 1)]);
        assert_eq!(
            diff.validate(3),
            Err(DiffError::TargetIndexConflict { index: 1 })
        );
    }

    #[test]
    fn test_explicit_identity_moves_are_valid() {
        let diff = Diff::new(vec![], vec![], vec![Move::new(0, 0), Move::new(1, 1)]);
        assert!(diff.validate(2).is_ok());
        assert!(diff.moves.iter().all(Move::is_identity));
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(3, 0).to_string(), "3->0");
    }

    #[test]
    fn test_serialization_round_trip() {
        let diff = Diff::new(
            vec![1, 3],
            vec![3, 4, 5],
            vec![Move::new(1, 2), Move::new(2, 4)],
        );

        let json = serde_json::to_string(&diff).unwrap();
        let deserialized: Diff = serde_json::from_str(&json).unwrap();

        assert_eq!(diff, deserialized);
    }
}
