use bstr::{BStr, BString, ByteSlice};
use core::fmt;

use crate::{error::Malformed, wildcard};

/// The outcome of interpreting one token.
///
/// A token is either a well-formed `name=value` declaration or it is reported
/// back verbatim so the consumer can log or reject it. Malformed input is never
/// dropped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseResult {
    /// A `name=value` declaration. `name` is never empty.
    Property {
        /// The text before the first `=`, folded if the parser is case
        /// insensitive.
        name: BString,
        /// The text after the first `=`, unquoted and unescaped if it was a
        /// quoted string.
        value: BString,
    },
    /// A token that is not a valid declaration.
    Unrecognized {
        /// The token content with whitespace and comments stripped, folded if
        /// the parser is case insensitive.
        raw: BString,
        /// Which rule the token broke.
        reason: Malformed,
    },
}

impl ParseResult {
    /// Returns `true` for [`ParseResult::Property`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Property { .. })
    }

    /// The property name, or an empty string for unrecognized tokens.
    #[must_use]
    pub fn name(&self) -> &BStr {
        match self {
            Self::Property { name, .. } => name.as_bstr(),
            Self::Unrecognized { .. } => b"".as_bstr(),
        }
    }

    /// The property value, or an empty string for unrecognized tokens.
    #[must_use]
    pub fn value(&self) -> &BStr {
        match self {
            Self::Property { value, .. } => value.as_bstr(),
            Self::Unrecognized { .. } => b"".as_bstr(),
        }
    }

    /// The raw token text, or an empty string for valid properties.
    #[must_use]
    pub fn raw(&self) -> &BStr {
        match self {
            Self::Property { .. } => b"".as_bstr(),
            Self::Unrecognized { raw, .. } => raw.as_bstr(),
        }
    }

    /// Why the token was rejected, if it was.
    #[must_use]
    pub fn reason(&self) -> Option<Malformed> {
        match self {
            Self::Property { .. } => None,
            Self::Unrecognized { reason, .. } => Some(*reason),
        }
    }

    /// Whether this is a property whose name matches the wildcard `pattern`.
    ///
    /// ```rust
    /// use propstream::{ParserOptions, PropertyParser};
    ///
    /// let mut parser = PropertyParser::new(ParserOptions::default()).unwrap();
    /// let hits = parser
    ///     .feed(b"net.port=80\nnet.host=a\nlog.level=3\n")
    ///     .filter(|r| r.name_matches("net.*", true))
    ///     .count();
    /// assert_eq!(hits, 2);
    /// ```
    #[must_use]
    pub fn name_matches(&self, pattern: impl AsRef<[u8]>, case_sensitive: bool) -> bool {
        match self {
            Self::Property { name, .. } => wildcard::matches(name, pattern, case_sensitive),
            Self::Unrecognized { .. } => false,
        }
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property { name, value } => write!(f, "{name}={value}"),
            Self::Unrecognized { raw, .. } => fmt::Display::fmt(raw, f),
        }
    }
}
