use std::fmt::{Display, Formatter};

/// A token is a slice of one of the compared texts; the atomic unit of
/// comparison.
///
/// Two tokens are equal when their texts are byte-for-byte identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    text: &'a str,
}

impl<'a> From<&'a str> for Token<'a> {
    fn from(text: &'a str) -> Self { Token { text } }
}

impl<'a> Token<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self { Token { text } }

    #[must_use]
    pub fn text(&self) -> &'a str { self.text }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str(self.text) }
}
