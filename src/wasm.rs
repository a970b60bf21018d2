//! Expose the crate's functionality to WebAssembly.

use wasm_bindgen::prelude::*;

use crate::{BuiltinTokenizer, DiffOptions, DiffResult, SegmentKind, Statistics};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::try_diff` for comparing two revisions.
///
/// # Errors
///
/// If the comparison would need more than `max_matrix_cells` matrix cells.
#[wasm_bindgen(js_name = diff)]
pub fn diff(
    old: &str,
    new: &str,
    tokenizer: BuiltinTokenizer,
    max_matrix_cells: Option<usize>,
) -> Result<JsDiffResult, JsError> {
    set_panic_hook();

    let result = crate::try_diff(old, new, &options(tokenizer, max_matrix_cells))?;
    Ok(result.into())
}

/// Compare two revisions given as raw bytes. Relies on `crate::diff_bytes`
/// and fails if either revision is binary.
///
/// # Errors
///
/// If either revision is binary or the comparison would need more than
/// `max_matrix_cells` matrix cells.
#[wasm_bindgen(js_name = diffBytes)]
pub fn diff_bytes(
    old: &[u8],
    new: &[u8],
    tokenizer: BuiltinTokenizer,
    max_matrix_cells: Option<usize>,
) -> Result<JsDiffResult, JsError> {
    set_panic_hook();

    let result = crate::diff_bytes(old, new, &options(tokenizer, max_matrix_cells))?;
    Ok(result.into())
}

fn options(tokenizer: BuiltinTokenizer, max_matrix_cells: Option<usize>) -> DiffOptions {
    DiffOptions {
        tokenizer,
        max_matrix_cells,
    }
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM wrapper type for the return value of `diff`.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsDiffResult {
    result: DiffResult,
}

#[wasm_bindgen]
impl JsDiffResult {
    #[must_use]
    pub fn segments(&self) -> Vec<JsDiffSegment> {
        self.result
            .segments()
            .iter()
            .map(|segment| JsDiffSegment {
                kind: segment.kind(),
                text: segment.text().to_owned(),
            })
            .collect()
    }

    #[must_use]
    pub fn statistics(&self) -> Statistics { self.result.statistics() }

    #[wasm_bindgen(js_name = hasChanges)]
    #[must_use]
    pub fn has_changes(&self) -> bool { self.result.has_changes() }

    #[wasm_bindgen(js_name = oldText)]
    #[must_use]
    pub fn old_text(&self) -> String { self.result.old_text() }

    #[wasm_bindgen(js_name = newText)]
    #[must_use]
    pub fn new_text(&self) -> String { self.result.new_text() }
}

impl From<DiffResult> for JsDiffResult {
    fn from(result: DiffResult) -> Self { JsDiffResult { result } }
}

/// WASM wrapper type for `DiffSegment`.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsDiffSegment {
    kind: SegmentKind,
    text: String,
}

#[wasm_bindgen]
impl JsDiffSegment {
    #[must_use]
    pub fn kind(&self) -> SegmentKind { self.kind }

    #[must_use]
    pub fn text(&self) -> String { self.text.clone() }
}
