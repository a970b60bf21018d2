use super::segment::DiffSegment;

/// Collapses consecutive segments of the same kind into one segment whose
/// text is theirs joined by single spaces.
///
/// Merging is idempotent: adjacent segments of the result always differ in
/// kind, so merging it again changes nothing.
#[must_use]
pub fn merge_runs(segments: impl IntoIterator<Item = DiffSegment>) -> Vec<DiffSegment> {
    let mut merged: Vec<DiffSegment> = Vec::new();

    for segment in segments {
        match merged.last_mut() {
            Some(run) if run.kind() == segment.kind() => run.extend(segment.text()),
            _ => merged.push(segment),
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_merge_runs() {
        let merged = merge_runs(vec![
            DiffSegment::added("a"),
            DiffSegment::added("b"),
            DiffSegment::unchanged("c"),
            DiffSegment::removed("d"),
            DiffSegment::removed("e"),
            DiffSegment::removed("f"),
            DiffSegment::unchanged("g"),
        ]);

        assert_eq!(
            merged,
            vec![
                DiffSegment::added("a b"),
                DiffSegment::unchanged("c"),
                DiffSegment::removed("d e f"),
                DiffSegment::unchanged("g"),
            ]
        );
    }

    #[test]
    fn test_merge_keeps_empty_tokens() {
        let merged = merge_runs(vec![
            DiffSegment::unchanged("a"),
            DiffSegment::unchanged(""),
            DiffSegment::unchanged("b"),
        ]);

        assert_eq!(merged, vec![DiffSegment::unchanged("a  b")]);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let once = merge_runs(vec![
            DiffSegment::removed("x"),
            DiffSegment::added("y"),
            DiffSegment::added("z"),
            DiffSegment::unchanged("w"),
        ]);
        let twice = merge_runs(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_nothing() {
        assert!(merge_runs(Vec::new()).is_empty());
    }
}
