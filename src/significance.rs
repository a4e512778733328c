//! Lookback classification for single-quote disambiguation.
//!
//! A straight single quote is ambiguous: after word content it is an
//! apostrophe (`it's`, `boss'`), after whitespace or sentence punctuation
//! it opens a quotation. The classifier decides by looking at the token
//! immediately before the quote, stepping further back over tokens that
//! cannot decide on their own (markup tags).

use crate::profile::Profile;
use crate::tokenize::{Token, TokenKind};

/// How a token bears on the reading of a single quote that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Significance {
    /// Ordinary word content: the quote is an apostrophe.
    Significant,
    /// Whitespace, sentence punctuation, or another quote mark: the quote
    /// opens a new quotation.
    Insignificant,
    /// This token alone cannot decide; keep looking back.
    Indeterminate,
}

/// Classify one token. Markup profiles decide tag tokens through their own
/// policy hook before the base leading-character rule applies.
pub fn classify(token: &Token<'_>, profile: &Profile) -> Significance {
    if token.kind == TokenKind::Tag {
        if let Some(markup) = profile.markup() {
            return (markup.tag_significance)(token.text);
        }
    }

    match token.text.chars().next() {
        None => Significance::Insignificant,
        Some(c) if c.is_whitespace() => Significance::Insignificant,
        Some(',' | '.' | '?' | '!' | '\'' | '"' | '`') => Significance::Insignificant,
        Some(_) => Significance::Significant,
    }
}

/// Whether the token before `index` reads as significant, skipping
/// indeterminate tokens. Reaching the start of input without a determinate
/// answer counts as insignificant, so a leading quote always opens.
pub(crate) fn preceding_is_significant(
    tokens: &[Token<'_>],
    index: usize,
    profile: &Profile,
) -> bool {
    for token in tokens[..index].iter().rev() {
        match classify(token, profile) {
            Significance::Significant => return true,
            Significance::Insignificant => return false,
            Significance::Indeterminate => continue,
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileKind;
    use crate::tokenize::tokenize;

    fn classify_first(input: &str, profile: ProfileKind) -> Significance {
        let profile = profile.profile();
        let tokens = tokenize(input, profile);
        classify(&tokens[0], profile)
    }

    #[test]
    fn test_base_rule() {
        assert_eq!(classify_first("word", ProfileKind::Unicode), Significance::Significant);
        assert_eq!(classify_first("boss", ProfileKind::Unicode), Significance::Significant);
        assert_eq!(classify_first(" ", ProfileKind::Unicode), Significance::Insignificant);
        assert_eq!(classify_first(",", ProfileKind::Unicode), Significance::Insignificant);
        assert_eq!(classify_first(".", ProfileKind::Unicode), Significance::Insignificant);
        assert_eq!(classify_first("\"", ProfileKind::Unicode), Significance::Insignificant);
        assert_eq!(classify_first("`", ProfileKind::Unicode), Significance::Insignificant);
    }

    #[test]
    fn test_xml_tags_are_indeterminate() {
        assert_eq!(classify_first("<emphasis>", ProfileKind::Xml), Significance::Indeterminate);
        assert_eq!(classify_first("</emphasis>", ProfileKind::Xml), Significance::Indeterminate);
    }

    #[test]
    fn test_docbook_paragraph_tags_are_insignificant() {
        assert_eq!(classify_first("<para>", ProfileKind::DocBook), Significance::Insignificant);
        assert_eq!(classify_first("<simpara>", ProfileKind::DocBook), Significance::Insignificant);
        // Closing and unrelated tags stay indeterminate
        assert_eq!(classify_first("</para>", ProfileKind::DocBook), Significance::Indeterminate);
        assert_eq!(classify_first("<emphasis>", ProfileKind::DocBook), Significance::Indeterminate);
    }

    #[test]
    fn test_lookback_skips_tags() {
        let profile = ProfileKind::Xml.profile();
        // word, tag, quote: the tag defers to the word before it
        let tokens = tokenize("word<b>'", profile);
        assert!(preceding_is_significant(&tokens, 2, profile));
        // space, tag, quote: the tag defers to the space
        let tokens = tokenize(" <b>'", profile);
        assert!(!preceding_is_significant(&tokens, 2, profile));
    }

    #[test]
    fn test_start_of_input_is_insignificant() {
        let profile = ProfileKind::Xml.profile();
        let tokens = tokenize("'", profile);
        assert!(!preceding_is_significant(&tokens, 0, profile));
        // Only indeterminate tokens before the quote
        let tokens = tokenize("<b><i>'", profile);
        assert!(!preceding_is_significant(&tokens, 2, profile));
    }
}
