//! JavaScript bindings for ReconKit core types

use crate::apply::{apply, apply_permutation, VecContainer};
use crate::diff::{compute, Diff};
use js_sys::Array;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in browser
#[wasm_bindgen(js_name = initPanicHook)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// JavaScript-friendly wrapper for Diff
#[wasm_bindgen]
pub struct WasmDiff {
    inner: Diff,
}

#[wasm_bindgen]
impl WasmDiff {
    /// Compute the diff between two arrays of strings
    #[wasm_bindgen(js_name = compute)]
    pub fn compute(old: Array, new: Array) -> WasmDiff {
        let old = to_string_vec(&old);
        let new = to_string_vec(&new);
        WasmDiff {
            inner: compute(&old, &new),
        }
    }

    /// Parse a diff from its JSON representation
    #[wasm_bindgen(js_name = fromJSON)]
    pub fn from_json(json: String) -> Result<WasmDiff, JsValue> {
        let inner: Diff = serde_json::from_str(&json)
            .map_err(|e| JsValue::from_str(&format!("Invalid JSON: {}", e)))?;
        Ok(WasmDiff { inner })
    }

    /// Export the diff as a JSON string
    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.inner).unwrap_or_default()
    }

    /// True when applying the diff would change nothing
    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// True when the diff only rearranges elements
    #[wasm_bindgen(js_name = isPermutation)]
    pub fn is_permutation(&self) -> bool {
        self.inner.is_permutation()
    }

    /// Apply the diff to an array of strings, returning the reconciled array
    ///
    /// `created` supplies the content for each addition, in ascending
    /// target-index order; its length must match the number of additions.
    #[wasm_bindgen(js_name = applyTo)]
    pub fn apply_to(&self, nodes: Array, created: Array) -> Result<Array, JsValue> {
        if created.length() as usize != self.inner.additions.len() {
            return Err(JsValue::from_str(&format!(
                "expected {} created nodes, got {}",
                self.inner.additions.len(),
                created.length()
            )));
        }

        let created = to_string_vec(&created);
        let mut by_target: std::collections::HashMap<usize, String> = self
            .inner
            .additions
            .iter()
            .copied()
            .zip(created)
            .collect();

        let mut container = VecContainer::from(to_string_vec(&nodes));
        apply(&self.inner, &mut container, |index| {
            by_target.remove(&index).unwrap_or_default()
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(container.into_inner().into_iter().map(JsValue::from).collect())
    }

    /// Apply a pure-permutation diff to an array of strings by cycle
    /// rotation, returning the reconciled array
    #[wasm_bindgen(js_name = applyPermutationTo)]
    pub fn apply_permutation_to(&self, nodes: Array) -> Result<Array, JsValue> {
        let mut container = VecContainer::from(to_string_vec(&nodes));
        apply_permutation(&self.inner, &mut container)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(container.into_inner().into_iter().map(JsValue::from).collect())
    }
}

fn to_string_vec(array: &Array) -> Vec<String> {
    array
        .iter()
        .map(|value| value.as_string().unwrap_or_default())
        .collect()
}
