//! WASM bindings for ReconKit
//!
//! This module provides JavaScript-friendly bindings for computing and
//! applying diffs over plain JS string arrays.

#[cfg(feature = "wasm")]
pub mod bindings;

// Re-export main types
#[cfg(feature = "wasm")]
pub use bindings::{init_panic_hook, WasmDiff};
