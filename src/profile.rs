//! Vocabulary profiles: glyph tables and markup policy per output format.
//!
//! A profile describes how each typographic element is rendered — curly
//! quote characters for Unicode output, tag strings like `<quote>` for
//! DocBook — together with two small policy hooks for markup output: which
//! closing tags force open quotations shut, and how tags weigh in when
//! disambiguating a single quote. Profiles are plain static data; one
//! profile can be shared freely across threads.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::significance::Significance;

/// The three quotation kinds tracked by the conversion driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteKind {
    Double,
    Single,
    Tick,
}

/// Markup policy for profiles whose output is tag-based.
#[derive(Debug, Clone)]
pub struct Markup {
    /// Element names whose closing tag forces all open quotes shut.
    pub(crate) terminal_tags: &'static [&'static str],
    /// Significance of a tag token, consulted before the base rule.
    pub(crate) tag_significance: fn(&str) -> Significance,
}

/// Per-format glyph table plus optional markup policy.
///
/// Each quote kind carries four renderings: the normal open and close
/// glyphs, plus "open-ended" and "close-ended" variants used when a
/// quotation is force-closed at a structural boundary without finding its
/// matching mark. For plain-text profiles the open-ended variant is the
/// opening glyph itself and the close-ended variant is empty; for DocBook
/// they are distinct tags (`<quote role='open'>`) so downstream tooling can
/// see that the quotation continues past the boundary.
///
/// All fields are public so callers can build a custom rendering from a
/// built-in one with struct update syntax.
#[derive(Debug, Clone)]
pub struct Profile {
    pub open_double: &'static str,
    pub close_double: &'static str,
    pub open_ended_double: &'static str,
    pub close_ended_double: &'static str,

    pub open_single: &'static str,
    pub close_single: &'static str,
    pub open_ended_single: &'static str,
    pub close_ended_single: &'static str,

    pub open_tick: &'static str,
    pub close_tick: &'static str,
    pub open_ended_tick: &'static str,
    pub close_ended_tick: &'static str,

    pub apostrophe: &'static str,
    pub en_dash: &'static str,
    pub em_dash: &'static str,
    pub ellipsis: &'static str,

    pub markup: Option<Markup>,
}

impl Profile {
    /// Opening glyph for a quote kind.
    pub fn open(&self, kind: QuoteKind) -> &'static str {
        match kind {
            QuoteKind::Double => self.open_double,
            QuoteKind::Single => self.open_single,
            QuoteKind::Tick => self.open_tick,
        }
    }

    /// Closing glyph for a quote kind.
    pub fn close(&self, kind: QuoteKind) -> &'static str {
        match kind {
            QuoteKind::Double => self.close_double,
            QuoteKind::Single => self.close_single,
            QuoteKind::Tick => self.close_tick,
        }
    }

    /// Glyph substituted for the opening mark when a quote is force-closed.
    pub fn open_ended(&self, kind: QuoteKind) -> &'static str {
        match kind {
            QuoteKind::Double => self.open_ended_double,
            QuoteKind::Single => self.open_ended_single,
            QuoteKind::Tick => self.open_ended_tick,
        }
    }

    /// Glyph appended at the boundary when a quote is force-closed.
    pub fn close_ended(&self, kind: QuoteKind) -> &'static str {
        match kind {
            QuoteKind::Double => self.close_ended_double,
            QuoteKind::Single => self.close_ended_single,
            QuoteKind::Tick => self.close_ended_tick,
        }
    }

    /// Whether the tokenizer should recognize `<...>` spans as tags.
    pub fn recognizes_tags(&self) -> bool {
        self.markup.is_some()
    }

    pub(crate) fn markup(&self) -> Option<&Markup> {
        self.markup.as_ref()
    }

    /// Whether a tag token closes a structural unit, forcing all open
    /// quotations shut before it is emitted.
    pub fn is_terminal_tag(&self, tag: &str) -> bool {
        let Some(markup) = &self.markup else {
            return false;
        };
        match closing_tag_name(tag) {
            Some(name) => markup.terminal_tags.contains(&name),
            None => false,
        }
    }
}

/// Element name of a closing tag token (`</para>` is `para`), if it is one.
pub(crate) fn closing_tag_name(tag: &str) -> Option<&str> {
    let inner = tag.strip_prefix("</")?.strip_suffix('>')?;
    Some(inner.trim())
}

/// Element name of an opening tag token (`<para id="x">` is `para`).
pub(crate) fn opening_tag_name(tag: &str) -> Option<&str> {
    let inner = tag.strip_prefix('<')?.strip_suffix('>')?;
    if inner.starts_with('/') {
        return None;
    }
    let end = inner
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(inner.len());
    Some(&inner[..end])
}

fn xml_tag_significance(_tag: &str) -> Significance {
    Significance::Indeterminate
}

fn docbook_tag_significance(tag: &str) -> Significance {
    match opening_tag_name(tag) {
        Some("para" | "simpara") => Significance::Insignificant,
        _ => Significance::Indeterminate,
    }
}

/// Straight ASCII characters. Converting with this profile is the
/// identity transform; it exists so callers can disable typographic
/// rendering without a separate code path.
const ASCII: Profile = Profile {
    open_double: "\"",
    close_double: "\"",
    open_ended_double: "\"",
    close_ended_double: "",
    open_single: "'",
    close_single: "'",
    open_ended_single: "'",
    close_ended_single: "",
    open_tick: "`",
    close_tick: "`",
    open_ended_tick: "`",
    close_ended_tick: "",
    apostrophe: "'",
    en_dash: "--",
    em_dash: "---",
    ellipsis: "...",
    markup: None,
};

/// Curly quotes, dashes, and ellipsis as Unicode characters.
const UNICODE: Profile = Profile {
    open_double: "\u{201C}",
    close_double: "\u{201D}",
    open_ended_double: "\u{201C}",
    close_ended_double: "",
    open_single: "\u{2018}",
    close_single: "\u{2019}",
    open_ended_single: "\u{2018}",
    close_ended_single: "",
    open_tick: "`",
    close_tick: "`",
    open_ended_tick: "`",
    close_ended_tick: "",
    apostrophe: "\u{2019}",
    en_dash: "\u{2013}",
    em_dash: "\u{2014}",
    ellipsis: "\u{2026}",
    markup: None,
};

/// Unicode glyphs with generic XML awareness: `<...>` spans pass through
/// as single tokens and never decide single-quote significance on their own.
const XML: Profile = Profile {
    markup: Some(Markup {
        terminal_tags: &[],
        tag_significance: xml_tag_significance,
    }),
    ..UNICODE
};

/// DocBook tags: quotations become `<quote>` elements, tick quotes become
/// `<foreignphrase>`, and closing paragraph tags force open quotations shut
/// with `role='open'` renderings.
const DOCBOOK: Profile = Profile {
    open_double: "<quote>",
    close_double: "</quote>",
    open_ended_double: "<quote role='open'>",
    close_ended_double: "</quote>",
    open_single: "<quote role='single'>",
    close_single: "</quote>",
    open_ended_single: "<quote role='singleopen'>",
    close_ended_single: "</quote>",
    open_tick: "<foreignphrase>",
    close_tick: "</foreignphrase>",
    open_ended_tick: "<foreignphrase role='open'>",
    close_ended_tick: "</foreignphrase>",
    apostrophe: "'",
    en_dash: "\u{2013}",
    em_dash: "\u{2014}",
    ellipsis: "\u{2026}",
    markup: Some(Markup {
        terminal_tags: &["para", "simpara"],
        tag_significance: docbook_tag_significance,
    }),
};

/// Identifier for a built-in profile.
///
/// Parses from the names the command-line front-ends use (`"ascii"` or its
/// alias `"simple"`, `"unicode"`, `"xml"`, `"docbook"`); with the `serde`
/// feature it also deserializes from those names in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProfileKind {
    Ascii,
    Unicode,
    Xml,
    DocBook,
}

impl ProfileKind {
    /// The built-in profile this identifier names.
    pub fn profile(self) -> &'static Profile {
        match self {
            ProfileKind::Ascii => &ASCII,
            ProfileKind::Unicode => &UNICODE,
            ProfileKind::Xml => &XML,
            ProfileKind::DocBook => &DOCBOOK,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProfileKind::Ascii => "ascii",
            ProfileKind::Unicode => "unicode",
            ProfileKind::Xml => "xml",
            ProfileKind::DocBook => "docbook",
        }
    }

    /// All built-in profiles, for enumeration in help text and tests.
    pub fn all() -> [ProfileKind; 4] {
        [
            ProfileKind::Ascii,
            ProfileKind::Unicode,
            ProfileKind::Xml,
            ProfileKind::DocBook,
        ]
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" | "simple" => Ok(ProfileKind::Ascii),
            "unicode" => Ok(ProfileKind::Unicode),
            "xml" => Ok(ProfileKind::Xml),
            "docbook" => Ok(ProfileKind::DocBook),
            _ => Err(Error::UnknownProfile(s.to_string())),
        }
    }
}
