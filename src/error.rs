//! Error types for typograph operations.

use thiserror::Error;

/// Errors that can occur while configuring a conversion.
///
/// The conversion itself is total: every input string tokenizes via the
/// fallback rule and converts without failure. Only caller misuse, such as
/// naming a profile that does not exist, is rejected at the boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown quote profile: {0}")]
    UnknownProfile(String),
}

pub type Result<T> = std::result::Result<T, Error>;
