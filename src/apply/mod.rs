//! Applying diffs to ordered containers
//!
//! Two independent appliers share the [`OrderedContainer`] seam:
//!
//! - [`apply`]: the general path - deletions, moves and additions in one
//!   pass, with the index re-shuffling bookkeeping that interleaved edits
//!   require.
//! - [`apply_permutation`]: the pure-rearrangement fast path - factors the
//!   move set into cycles and rotates each one with exactly one primitive
//!   relocation per member.
//!
//! Both validate the descriptor before touching the container: there is no
//! rollback, so a half-applied malformed diff must be impossible.

pub mod applier;
pub mod container;
pub mod cycles;

pub use applier::apply;
pub use container::{OrderedContainer, VecContainer};
pub use cycles::apply_permutation;
