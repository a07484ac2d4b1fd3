//! ReconKit Core - Minimal-mutation list reconciliation engine
//!
//! This is the Rust core of ReconKit, compiled to both native and WASM.
//! It implements:
//! - The [`Diff`] descriptor: additions, deletions and moves between two
//!   ordered sequences, as pure index data
//! - A general applier that replays a descriptor against any
//!   [`OrderedContainer`] with the minimal set of structural mutations
//! - A cycle-decomposition fast path for pure permutations
//! - An O(n²) positional diff computer for generating fixtures
//!
//! The hard part lives in the applier: every physical removal, relocation
//! or insertion shifts the indices of edits not yet applied, and the
//! bookkeeping has to stay exact across all three interleaved edit kinds.
//!
//! # Examples
//!
//! ```rust
//! use reconkit_core::{apply, compute, VecContainer};
//!
//! let old = vec!["alpha", "beta", "gamma", "delta"];
//! let new = vec!["delta", "alpha", "gamma"];
//!
//! let diff = compute(&old, &new);
//! let mut container = VecContainer::from(old);
//! apply(&diff, &mut container, |index| new[index]).unwrap();
//!
//! assert_eq!(container.nodes(), new.as_slice());
//! ```

pub mod apply;
pub mod diff;
pub mod error;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use apply::{apply, apply_permutation, OrderedContainer, VecContainer};
pub use diff::{compute, Diff, Move};
pub use error::{DiffError, Result};

/// Index into the source (pre-change) sequence
pub type SourceIndex = usize;

/// Index into the target (post-change) sequence
pub type TargetIndex = usize;
