
use std::path::Path;

use anchor_diff::{
    BuiltinTokenizer, DiffError, DiffOptions, Revision, SegmentKind, Token, Tokenizer, diff,
    diff_bytes, merge_runs, try_diff,
};
use example_document::ExampleDocument;
use pretty_assertions::assert_eq;

fn get_all_documents() -> Vec<ExampleDocument> {
    ExampleDocument::read_all(Path::new("tests/examples"))
}

#[test]
fn test_example_documents() {
    let documents = get_all_documents();
    assert!(!documents.is_empty());

    for doc in &documents {
        let result = try_diff(doc.old(), doc.new(), &doc.options())
            .unwrap_or_else(|error| panic!("'{}' failed: {error}", doc.name()));
        doc.assert_eq(&result);
    }
}

#[test]
fn test_example_documents_round_trip() {
    for doc in &get_all_documents() {
        let options = doc.options();
        let tokenizer: &Tokenizer = &*options.tokenizer;
        let result = try_diff(doc.old(), doc.new(), &options).expect("no limit is configured");

        let old_tokens = tokenizer(doc.old()).iter().map(Token::text).collect::<Vec<_>>();
        let new_tokens = tokenizer(doc.new()).iter().map(Token::text).collect::<Vec<_>>();

        assert_eq!(result.old_text(), old_tokens.join(" "), "in '{}'", doc.name());
        assert_eq!(result.new_text(), new_tokens.join(" "), "in '{}'", doc.name());
    }
}

#[test]
fn test_example_documents_statistics() {
    for doc in &get_all_documents() {
        let result = try_diff(doc.old(), doc.new(), &doc.options()).expect("no limit is configured");
        let statistics = result.statistics();

        assert_eq!(statistics.old_char_count, doc.old().len());
        assert_eq!(statistics.new_char_count, doc.new().len());
        assert_eq!(statistics.old_word_count, result.old_tokens().len());
        assert_eq!(statistics.new_word_count, result.new_tokens().len());
        assert_eq!(
            statistics.new_text_longer,
            statistics.new_char_count > statistics.old_char_count
        );
    }
}

#[test]
fn test_example_documents_are_merged() {
    for doc in &get_all_documents() {
        let result = try_diff(doc.old(), doc.new(), &doc.options()).expect("no limit is configured");

        assert_eq!(merge_runs(result.segments().to_vec()), result.segments());
        for pair in result.segments().windows(2) {
            assert_ne!(pair[0].kind(), pair[1].kind(), "in '{}'", doc.name());
        }
    }
}

#[test]
fn test_diff_is_deterministic() {
    let old = "a b c a b c d e a b";
    let new = "x a b c y d e a b c";

    assert_eq!(diff(old, new), diff(old, new));
}

#[test]
fn test_segment_kinds_serve_as_tags() {
    let result = diff("keep drop", "keep add");
    let kinds = result
        .segments()
        .iter()
        .map(|segment| segment.kind().to_string())
        .collect::<Vec<_>>();

    assert_eq!(kinds, vec!["unchanged", "added", "removed"]);
    assert_eq!(result.segments()[0].kind(), SegmentKind::Unchanged);
}

#[test]
fn test_size_limit() {
    let options = DiffOptions::default()
        .with_tokenizer(BuiltinTokenizer::Word)
        .with_max_matrix_cells(100);
    let long_text = "word ".repeat(11);

    assert_eq!(
        try_diff(&long_text, &long_text, &options),
        Err(DiffError::InputTooLarge {
            cells: 121,
            limit: 100
        })
    );
    assert_eq!(
        DiffError::InputTooLarge {
            cells: 121,
            limit: 100
        }
        .to_string(),
        "Comparing would need a matrix of 121 cells, but at most 100 cells are allowed"
    );
}

#[test]
fn test_binary_revisions_are_refused() {
    let error = diff_bytes(b"text", b"\0binary", &DiffOptions::default()).unwrap_err();

    assert_eq!(
        error,
        DiffError::BinaryInput {
            revision: Revision::New
        }
    );
    assert_eq!(
        error.to_string(),
        "The new revision is binary data or not valid UTF-8"
    );
}
