use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// How a segment of text relates the old revision to the new one.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Unchanged,
    Added,
    Removed,
}

impl Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentKind::Unchanged => write!(f, "unchanged"),
            SegmentKind::Added => write!(f, "added"),
            SegmentKind::Removed => write!(f, "removed"),
        }
    }
}

/// One unit of a diff: one or more tokens of the same kind joined by single
/// spaces.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    kind: SegmentKind,
    text: String,
}

impl DiffSegment {
    #[must_use]
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        DiffSegment {
            kind,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn unchanged(text: impl Into<String>) -> Self { Self::new(SegmentKind::Unchanged, text) }

    #[must_use]
    pub fn added(text: impl Into<String>) -> Self { Self::new(SegmentKind::Added, text) }

    #[must_use]
    pub fn removed(text: impl Into<String>) -> Self { Self::new(SegmentKind::Removed, text) }

    #[must_use]
    pub fn kind(&self) -> SegmentKind { self.kind }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn into_text(self) -> String { self.text }

    #[must_use]
    pub fn is_unchanged(&self) -> bool { self.kind == SegmentKind::Unchanged }

    #[must_use]
    pub fn is_added(&self) -> bool { self.kind == SegmentKind::Added }

    #[must_use]
    pub fn is_removed(&self) -> bool { self.kind == SegmentKind::Removed }

    /// Appends `text` separated by a single space.
    pub(crate) fn extend(&mut self, text: &str) {
        self.text.push(' ');
        self.text.push_str(text);
    }
}
