//! Diff descriptors: the declarative change format
//!
//! A [`Diff`] describes how one ordered sequence becomes another as three
//! index lists: additions (target indices), deletions (source indices) and
//! moves (source/target index pairs). It carries no element content and no
//! references into any container - it is pure interchange data.
//!
//! # Modules
//!
//! - [`descriptor`]: the `Diff`/`Move` value types and their validation
//! - [`compute`]: O(n²) positional diff computation, a fixture generator
//!   for tests and demos rather than a production matcher

pub mod compute;
pub mod descriptor;

pub use compute::compute;
pub use descriptor::{Diff, Move};
