use crate::error::OptionsError;

/// Buffer capacity used by [`ParserOptions::default`].
pub const DEFAULT_BUFFER_CAPACITY: usize = 4096;

/// Configuration for a [`PropertyParser`](crate::PropertyParser).
///
/// Options are fixed for the life of a parser; [`reset`] keeps them.
///
/// # Examples
///
/// ```rust
/// use propstream::{ParserOptions, PropertyParser};
///
/// let parser = PropertyParser::new(ParserOptions {
///     buffer_capacity: 256,
///     case_insensitive: true,
/// })
/// .unwrap();
/// assert_eq!(parser.options().buffer_capacity, 256);
/// ```
///
/// [`reset`]: crate::PropertyParser::reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserOptions {
    /// Maximum number of unconsumed bytes the parser holds.
    ///
    /// A token whose delimiter has not arrived by the time the buffer is full
    /// is flushed as-is, so a logical line longer than this is reported as
    /// several fragments. Size it to the longest expected entry.
    ///
    /// # Default
    ///
    /// [`DEFAULT_BUFFER_CAPACITY`]
    pub buffer_capacity: usize,

    /// Whether property names are ASCII lower-cased.
    ///
    /// Applies to [`ParseResult::Property`] names and to
    /// [`ParseResult::Unrecognized`] raw text. Values are never folded.
    ///
    /// # Default
    ///
    /// `false`
    ///
    /// [`ParseResult::Property`]: crate::ParseResult::Property
    /// [`ParseResult::Unrecognized`]: crate::ParseResult::Unrecognized
    pub case_insensitive: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            case_insensitive: false,
        }
    }
}

impl ParserOptions {
    pub(crate) fn validate(self) -> Result<Self, OptionsError> {
        if self.buffer_capacity == 0 {
            return Err(OptionsError::ZeroCapacity);
        }
        Ok(self)
    }
}
