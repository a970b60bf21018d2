#![cfg(feature = "wasm")]

use anchor_diff::{BuiltinTokenizer, SegmentKind, wasm::*};
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn test_diff() {
    let result = diff("hello world", "hello there world", BuiltinTokenizer::Whitespace, None)
        .unwrap_or_else(|_| panic!("diff without a limit can't fail"));

    let segments = result
        .segments()
        .iter()
        .map(|segment| (segment.kind(), segment.text()))
        .collect::<Vec<_>>();
    assert_eq!(
        segments,
        vec![
            (SegmentKind::Unchanged, "hello".to_owned()),
            (SegmentKind::Added, "there".to_owned()),
            (SegmentKind::Unchanged, "world".to_owned()),
        ]
    );
    assert!(result.has_changes());
    assert_eq!(result.old_text(), "hello world");
    assert_eq!(result.new_text(), "hello there world");
}

#[wasm_bindgen_test(unsupported = test)]
fn test_diff_statistics() {
    let result = diff("a b", "a", BuiltinTokenizer::Word, Some(100))
        .unwrap_or_else(|_| panic!("the texts are below the limit"));
    let statistics = result.statistics();

    assert_eq!(statistics.old_word_count, 2);
    assert_eq!(statistics.new_word_count, 1);
    assert!(!statistics.new_text_longer);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_diff_bytes() {
    let result = diff_bytes(b"", b"new text", BuiltinTokenizer::Whitespace, None)
        .unwrap_or_else(|_| panic!("both revisions are text"));

    assert_eq!(result.segments().len(), 1);
    assert_eq!(result.segments()[0].kind(), SegmentKind::Added);
    assert_eq!(result.segments()[0].text(), "new text");
}
