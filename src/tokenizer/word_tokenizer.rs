use super::token::Token;

/// Splits text on runs of Unicode whitespace and drops the empty tokens
/// leading or trailing whitespace would otherwise produce.
///
/// ## Example
///
/// ```not_rust
/// " Hi \t there! " -> ["Hi", "there!"]
/// ```
pub fn word_tokenizer(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace().map(Token::from).collect()
}
