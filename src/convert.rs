//! Quote state machine and conversion driver.
//!
//! Consumes the token sequence in order while tracking a stack of open
//! quotations. Same-kind marks close the top of the stack; different kinds
//! nest deeper. Quotations still open at a terminal tag (a closing
//! paragraph in DocBook) or at the end of input are force-closed: the
//! opening glyph already emitted is rewritten to the profile's open-ended
//! variant and the close-ended variant is appended, so the output never
//! carries a dangling quote mark.

use tracing::{debug, trace};

use crate::profile::{Profile, QuoteKind};
use crate::significance::preceding_is_significant;
use crate::tokenize::{tokenize, Token, TokenKind};

/// How a processed token affects the conversion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Normal,
    /// Opened a quotation of this kind.
    Quote(QuoteKind),
    /// Closes a structural unit; all open quotations end here.
    Terminal,
}

/// An open quotation awaiting its closing mark.
struct QuoteFrame {
    kind: QuoteKind,
    /// Output slot holding the opening glyph. Rewritten at most once, when
    /// the frame is force-closed.
    output_index: usize,
}

/// State for a single conversion. Everything lives for one [`convert`]
/// call, so independent calls sharing one [`Profile`] never interfere.
struct Converter<'a> {
    profile: &'a Profile,
    stack: Vec<QuoteFrame>,
    output: Vec<&'a str>,
}

/// Convert straight ASCII punctuation in `input` to the typographic
/// rendering described by `profile`.
///
/// The transform is total: any string converts, and unbalanced quotations
/// are resolved with open-ended renderings rather than errors.
pub fn convert(input: &str, profile: &Profile) -> String {
    let tokens = tokenize(input, profile);
    trace!(tokens = tokens.len(), "converting text run");

    let mut converter = Converter {
        profile,
        stack: Vec::new(),
        output: Vec::with_capacity(tokens.len()),
    };

    for index in 0..tokens.len() {
        converter.step(&tokens, index);
    }
    converter.close_open_quotes();

    converter.output.concat()
}

impl<'a> Converter<'a> {
    fn step(&mut self, tokens: &[Token<'a>], index: usize) {
        let (replacement, class) = self.process_token(tokens, index);

        if class == TokenClass::Terminal {
            self.close_open_quotes();
        }
        if let TokenClass::Quote(kind) = class {
            self.stack.push(QuoteFrame {
                kind,
                output_index: self.output.len(),
            });
        }

        self.output.push(replacement);
    }

    /// Replacement text for one token plus its effect on the quote stack.
    /// Closing marks pop the stack here; opening marks are pushed by
    /// [`Converter::step`] once the output slot is known.
    fn process_token(&mut self, tokens: &[Token<'a>], index: usize) -> (&'a str, TokenClass) {
        let token = &tokens[index];

        match token.kind {
            TokenKind::QuoteDouble => self.quote_mark(QuoteKind::Double),
            TokenKind::QuoteTick => self.quote_mark(QuoteKind::Tick),

            // A single quote closing its own kind wins over the apostrophe
            // reading; otherwise the preceding token decides.
            TokenKind::QuoteSingle => {
                if self.top_kind() == Some(QuoteKind::Single) {
                    self.stack.pop();
                    (self.profile.close(QuoteKind::Single), TokenClass::Normal)
                } else if preceding_is_significant(tokens, index, self.profile) {
                    (self.profile.apostrophe, TokenClass::Normal)
                } else {
                    (
                        self.profile.open(QuoteKind::Single),
                        TokenClass::Quote(QuoteKind::Single),
                    )
                }
            }

            TokenKind::Dashes(2) => (self.profile.en_dash, TokenClass::Normal),
            TokenKind::Dashes(3) => (self.profile.em_dash, TokenClass::Normal),
            TokenKind::Ellipsis => (self.profile.ellipsis, TokenClass::Normal),

            TokenKind::Tag if self.profile.is_terminal_tag(token.text) => {
                (token.text, TokenClass::Terminal)
            }

            // Single dashes, whitespace, words, ordinary tags, and fallback
            // characters pass through untouched.
            _ => (token.text, TokenClass::Normal),
        }
    }

    /// Same-kind mark at the top of the stack closes it; anything else
    /// opens a deeper quotation, never a mismatched close.
    fn quote_mark(&mut self, kind: QuoteKind) -> (&'a str, TokenClass) {
        if self.top_kind() == Some(kind) {
            self.stack.pop();
            (self.profile.close(kind), TokenClass::Normal)
        } else {
            (self.profile.open(kind), TokenClass::Quote(kind))
        }
    }

    fn top_kind(&self) -> Option<QuoteKind> {
        self.stack.last().map(|frame| frame.kind)
    }

    /// Force-close every open quotation: rewrite each opening slot to the
    /// open-ended glyph and append the close-ended glyph at the current end
    /// of the output.
    fn close_open_quotes(&mut self) {
        if !self.stack.is_empty() {
            debug!(open = self.stack.len(), "force-closing unmatched quotes");
        }

        while let Some(frame) = self.stack.pop() {
            self.output[frame.output_index] = self.profile.open_ended(frame.kind);
            self.output.push(self.profile.close_ended(frame.kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileKind;

    fn unicode(input: &str) -> String {
        convert(input, ProfileKind::Unicode.profile())
    }

    fn docbook(input: &str) -> String {
        convert(input, ProfileKind::DocBook.profile())
    }

    #[test]
    fn test_balanced_double_quotes() {
        assert_eq!(unicode("One \"two\" three."), "One \u{201C}two\u{201D} three.");
    }

    #[test]
    fn test_nested_single_in_double() {
        assert_eq!(
            unicode("One \"'two'\" three."),
            "One \u{201C}\u{2018}two\u{2019}\u{201D} three."
        );
    }

    #[test]
    fn test_contraction_is_apostrophe() {
        assert_eq!(unicode("One it's two."), "One it\u{2019}s two.");
    }

    #[test]
    fn test_trailing_possessive_is_apostrophe() {
        assert_eq!(unicode("One boss' two."), "One boss\u{2019} two.");
    }

    #[test]
    fn test_leading_single_quote_opens() {
        assert_eq!(unicode("'One two' three."), "\u{2018}One two\u{2019} three.");
    }

    #[test]
    fn test_tick_quotes() {
        assert_eq!(unicode("One `two` three."), "One `two` three.");
        assert_eq!(
            docbook("One `two` three."),
            "One <foreignphrase>two</foreignphrase> three."
        );
    }

    #[test]
    fn test_dash_runs() {
        assert_eq!(unicode("One - two."), "One - two.");
        assert_eq!(unicode("One -- two."), "One \u{2013} two.");
        assert_eq!(unicode("One --- two."), "One \u{2014} two.");
    }

    #[test]
    fn test_ellipsis() {
        assert_eq!(unicode("One ... two."), "One \u{2026} two.");
        assert_eq!(unicode("One .... two."), "One \u{2026}. two.");
    }

    #[test]
    fn test_unclosed_double_at_end_of_input() {
        // Open-ended rendering: the opening glyph survives, the close-ended
        // glyph for Unicode is empty.
        assert_eq!(unicode("One \"two three."), "One \u{201C}two three.");
    }

    #[test]
    fn test_mismatched_kinds_nest() {
        // The double quote cannot close the open single quote; both are
        // force-closed at end of input.
        assert_eq!(
            docbook("'one \"two"),
            "<quote role='singleopen'>one <quote role='open'>two</quote></quote>"
        );
    }

    #[test]
    fn test_docbook_balanced_pair() {
        assert_eq!(
            docbook("<para>One \"two\" three.</para>"),
            "<para>One <quote>two</quote> three.</para>"
        );
    }

    #[test]
    fn test_docbook_forced_closure_at_paragraph_end() {
        assert_eq!(
            docbook("<para>\"I said</para><para>\"You like cheese.\"</para>"),
            "<para><quote role='open'>I said</quote></para>\
             <para><quote>You like cheese.</quote></para>"
        );
    }

    #[test]
    fn test_docbook_paragraph_tag_before_quote_opens() {
        // The tag before the quote is a paragraph opener, which counts as
        // insignificant, so the quote opens instead of reading as an
        // apostrophe.
        assert_eq!(
            docbook("<para>'One' two.</para>"),
            "<para><quote role='single'>One</quote> two.</para>"
        );
    }

    #[test]
    fn test_xml_tags_pass_through() {
        let xml = ProfileKind::Xml.profile();
        assert_eq!(
            convert("<b>One <e>\"two\"</e> three.</b>", xml),
            "<b>One <e>\u{201C}two\u{201D}</e> three.</b>"
        );
    }

    #[test]
    fn test_xml_has_no_terminal_tags() {
        // Without a terminal set, the quote stays open until end of input.
        let xml = ProfileKind::Xml.profile();
        assert_eq!(
            convert("<p>\"One</p><p>two\"</p>", xml),
            "<p>\u{201C}One</p><p>two\u{201D}</p>"
        );
    }

    #[test]
    fn test_ascii_profile_is_identity() {
        let ascii = ProfileKind::Ascii.profile();
        for sample in [
            "One \"two\" three.",
            "it's the boss' fault",
            "One -- two --- three ... four.",
            "\"unbalanced",
            "",
        ] {
            assert_eq!(convert(sample, ascii), sample);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(unicode(""), "");
    }
}
