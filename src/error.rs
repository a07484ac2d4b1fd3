//! Error types for diff validation and application
//!
//! Every way a diff descriptor can violate its invariants maps to a distinct
//! variant carrying the offending indices. Validation runs before any
//! container mutation, so a returned error always means the container was
//! left untouched.

use thiserror::Error;

/// Result type alias using [`DiffError`]
pub type Result<T> = std::result::Result<T, DiffError>;

/// Errors detected while validating or applying a diff descriptor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// Addition index falls outside the target sequence
    #[error("addition index {index} out of bounds (target length: {target_len})")]
    AdditionOutOfBounds { index: usize, target_len: usize },

    /// Deletion index falls outside the source sequence
    #[error("deletion index {index} out of bounds (source length: {source_len})")]
    DeletionOutOfBounds { index: usize, source_len: usize },

    /// Move source index falls outside the source sequence
    #[error("move source {from} out of bounds (source length: {source_len})")]
    MoveSourceOutOfBounds { from: usize, source_len: usize },

    /// Move target index falls outside the target sequence
    #[error("move target {to} out of bounds (target length: {target_len})")]
    MoveTargetOutOfBounds { to: usize, target_len: usize },

    /// Addition indices must be strictly increasing
    #[error("addition indices must be strictly increasing")]
    AdditionsNotSorted,

    /// Deletion indices must be strictly increasing
    #[error("deletion indices must be strictly increasing")]
    DeletionsNotSorted,

    /// Moves must be sorted by target index, strictly increasing
    #[error("moves must be sorted by strictly increasing target index")]
    MovesNotSorted,

    /// A source index is claimed by more than one deletion or move
    #[error("source index {index} claimed by more than one deletion or move")]
    SourceIndexConflict { index: usize },

    /// A target index is claimed by more than one addition or move
    #[error("target index {index} claimed by more than one addition or move")]
    TargetIndexConflict { index: usize },

    /// The cycle optimizer only accepts pure permutations
    #[error("not a pure permutation: {additions} additions, {deletions} deletions")]
    NotAPermutation { additions: usize, deletions: usize },

    /// A permutation's move targets must all reappear as move sources
    #[error("move target {index} is never a move source; permutation cycles must close")]
    UnclosedCycle { index: usize },
}
