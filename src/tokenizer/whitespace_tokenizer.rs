use super::token::Token;

/// Splits text at every space and newline character. Each delimiter counts on
/// its own, so consecutive delimiters produce empty tokens which are kept to
/// preserve the position of every token.
///
/// The empty string has no tokens at all.
///
/// ## Example
///
/// ```not_rust
/// "Hi there!"  -> ["Hi", "there!"]
/// "Hi  there!" -> ["Hi", "", "there!"]
/// "Hi\n"       -> ["Hi", ""]
/// ```
pub fn whitespace_tokenizer(text: &str) -> Vec<Token<'_>> {
    if text.is_empty() {
        return Vec::new();
    }

    text.split([' ', '\n']).map(Token::from).collect()
}
