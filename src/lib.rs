//! # typograph
//!
//! Typographic quote and punctuation normalization for plain text and
//! DocBook output.
//!
//! Rewrites straight ASCII punctuation — double, single, and tick quotes,
//! hyphen runs, triple periods — into correctly nested typographic output:
//! curly quotes, en/em dashes, and ellipses, or markup tags such as
//! `<quote>` and `<foreignphrase>` for DocBook. Quotation nesting is
//! tracked on a stack, single quotes are disambiguated between apostrophe
//! and opening mark by looking back at the preceding token, and quotations
//! left open at a paragraph boundary are rendered open-ended instead of
//! leaving a dangling mark.
//!
//! ## Quick Start
//!
//! ```
//! use typograph::{convert, ProfileKind};
//!
//! let unicode = ProfileKind::Unicode.profile();
//! assert_eq!(
//!     convert("\"It's here,\" she said -- twice.", unicode),
//!     "\u{201C}It\u{2019}s here,\u{201D} she said \u{2013} twice."
//! );
//!
//! let docbook = ProfileKind::DocBook.profile();
//! assert_eq!(
//!     convert("<para>\"Hi,\" she said.</para>", docbook),
//!     "<para><quote>Hi,</quote> she said.</para>"
//! );
//! ```
//!
//! ## Selecting a profile
//!
//! Profiles parse from the names the command-line front-ends use, with
//! unknown names rejected up front:
//!
//! ```
//! use typograph::ProfileKind;
//!
//! let kind: ProfileKind = "simple".parse().unwrap();
//! assert_eq!(kind, ProfileKind::Ascii);
//! assert!("latex".parse::<ProfileKind>().is_err());
//! ```
//!
//! The conversion itself never fails: every input string tokenizes, and
//! unbalanced quotations are resolved deterministically. Conversion state
//! is local to each [`convert`] call, so one shared [`Profile`] is safe to
//! use from multiple threads at once.

pub mod convert;
pub mod error;
pub mod profile;
pub mod significance;
pub mod tokenize;

pub use convert::convert;
pub use error::{Error, Result};
pub use profile::{Profile, ProfileKind, QuoteKind};
pub use significance::Significance;
pub use tokenize::{tokenize, Token, TokenKind};
