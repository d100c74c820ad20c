//! Normalization of raw expression text and tokenization of the canonical form.
//!
//! Normalization is a pure text rewrite: whitespace is removed and every operator alias is
//! replaced by its canonical symbol. Characters outside the alphabet are left in place, so
//! [`tokenize`] can report them with their position.

use log::trace;

use crate::error::ParseError;
use crate::types::Token;

/// Alias → canonical symbol, applied in order.
///
/// `<->` must be rewritten before `->`.
pub const ALIASES: [(&str, &str); 8] = [
    ("<->", "↔"),
    ("->", "→"),
    ("¬", "!"),
    ("~", "!"),
    ("∧", "&"),
    ("V", "|"),
    ("∨", "|"),
    ("^", "⊕"),
];

/// Rewrites `raw` into the canonical operator alphabet without whitespace.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// # Examples
///
/// ```
/// use truth_table::normalize::normalize;
///
/// assert_eq!(normalize("¬p V q"), "!p|q");
/// assert_eq!(normalize("p <-> q"), "p↔q");
/// ```
pub fn normalize(raw: &str) -> String {
    // Whitespace goes first: "- >" must not become an alias after stripping.
    let mut s: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    for (alias, canonical) in ALIASES {
        if s.contains(alias) {
            s = s.replace(alias, canonical);
        }
    }
    s
}

/// Maps every character of a normalized expression to a [`Token`].
///
/// Fails on the first character that is neither a variable nor a canonical operator.
pub fn tokenize(normalized: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::with_capacity(normalized.len());
    for (position, ch) in normalized.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        match Token::from_char(ch) {
            Some(token) => tokens.push(token),
            None => return Err(ParseError::UnexpectedChar { ch, position }),
        }
    }
    trace!("tokenize({:?}) -> {} tokens", normalized, tokens.len());
    Ok(tokens)
}

/// Normalizes and tokenizes raw expression text.
pub fn lex(raw: &str) -> Result<Vec<Token>, ParseError> {
    tokenize(&normalize(raw))
}
