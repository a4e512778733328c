//! Tokenizer: splits a text run into an exact, ordered token sequence.
//!
//! The token texts, concatenated in order, always reconstruct the input
//! byte for byte; replacement happens later in the driver, never here.

use memchr::memchr;

use crate::profile::Profile;

/// Token classification, in tokenizer rule priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A `<...>` span with no nested `<` (markup profiles only).
    Tag,
    QuoteDouble,
    QuoteSingle,
    QuoteTick,
    /// Maximal whitespace run.
    Whitespace,
    /// Run of one to three hyphens.
    Dashes(usize),
    /// Exactly three periods.
    Ellipsis,
    /// Maximal run of ordinary word characters.
    Word,
    /// Single character the other rules do not claim.
    Other,
}

/// A slice of the input with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    fn new(text: &'a str, kind: TokenKind) -> Self {
        Token { text, kind }
    }
}

/// Split `input` into tokens. Tag spans are only recognized when the
/// profile produces markup output; for plain-text profiles `<` and `>` fall
/// through to the single-character rule.
pub fn tokenize<'a>(input: &'a str, profile: &Profile) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while let Some(first) = rest.chars().next() {
        let token = next_token(rest, first, profile);
        rest = &rest[token.text.len()..];
        tokens.push(token);
    }

    tokens
}

/// Longest-match at the head of `rest`, applying the first matching rule.
fn next_token<'a>(rest: &'a str, first: char, profile: &Profile) -> Token<'a> {
    if first == '<' && profile.recognizes_tags() {
        if let Some(len) = tag_span(rest.as_bytes()) {
            return Token::new(&rest[..len], TokenKind::Tag);
        }
    }

    match first {
        '"' => return Token::new(&rest[..1], TokenKind::QuoteDouble),
        '\'' => return Token::new(&rest[..1], TokenKind::QuoteSingle),
        '`' => return Token::new(&rest[..1], TokenKind::QuoteTick),
        _ => {}
    }

    if first.is_whitespace() {
        let len = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        return Token::new(&rest[..len], TokenKind::Whitespace);
    }

    if first == '-' {
        let len = rest.bytes().take(3).take_while(|&b| b == b'-').count();
        return Token::new(&rest[..len], TokenKind::Dashes(len));
    }

    if rest.starts_with("...") {
        return Token::new(&rest[..3], TokenKind::Ellipsis);
    }

    if !is_word_break(first) {
        let len = rest.find(is_word_break).unwrap_or(rest.len());
        return Token::new(&rest[..len], TokenKind::Word);
    }

    Token::new(&rest[..first.len_utf8()], TokenKind::Other)
}

/// Characters that end a word run. Sentence-final `!`, `?`, and `:` stay
/// inside words; the significance classifier only ever looks at a token's
/// leading character, so they never need to stand alone.
fn is_word_break(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | ',' | ';' | '\'' | '"' | '`' | '<' | '>')
}

/// Byte length of a leading `<...>` span containing no nested `<`, if any.
fn tag_span(bytes: &[u8]) -> Option<usize> {
    let close = memchr(b'>', bytes)?;
    if close < 2 {
        // `<>` carries no tag name
        return None;
    }
    if memchr(b'<', &bytes[1..close]).is_some() {
        return None;
    }
    Some(close + 1)
}
