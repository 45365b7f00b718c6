use thiserror::Error;

/// Rejected [`ParserOptions`](crate::ParserOptions).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsError {
    /// A zero-sized buffer can never hold a byte of input.
    #[error("buffer capacity must be at least one byte")]
    ZeroCapacity,
}

/// Why a token was reported as [`ParseResult::Unrecognized`](crate::ParseResult::Unrecognized).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Malformed {
    /// The token holds an odd number of unescaped `"`.
    #[error("unbalanced quotes")]
    UnbalancedQuotes,
    /// The token has no unescaped `=`.
    #[error("missing '='")]
    MissingEquals,
    /// Nothing precedes the first `=`.
    #[error("empty property name")]
    EmptyName,
    /// A quoted value ends with an unpaired backslash.
    #[error("dangling escape at end of quoted value")]
    DanglingEscape,
}
