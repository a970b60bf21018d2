use std::fmt::Display;

/// One of the two compared revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revision {
    Old,
    New,
}

impl Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Revision::Old => write!(f, "old"),
            Revision::New => write!(f, "new"),
        }
    }
}
