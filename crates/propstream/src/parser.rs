//! The streaming driver.
//!
//! [`PropertyParser`] owns a bounded [`Window`] of unconsumed bytes. Feeding
//! appends input to the window in increments no larger than its free room and,
//! after an increment that could have completed a token, repeatedly scans and
//! interprets until the scanner asks for more input.
//!
//! A drain is attempted when all input has been absorbed, when the window is
//! full, or when the increment contains `\n` or `;`. Every delimiter contains
//! one of those two bytes, so other increments cannot complete a token.

use alloc::vec::Vec;

use bstr::{BStr, ByteSlice};

use crate::{
    buffer::Window,
    error::OptionsError,
    interpret::interpret,
    options::ParserOptions,
    result::ParseResult,
    scanner::{Scan, scan},
};

/// An incremental parser for `name=value` streams.
///
/// # Examples
///
/// Results are available from an iterator:
///
/// ```rust
/// use propstream::{ParseResult, PropertyParser};
///
/// let mut parser = PropertyParser::with_capacity(64).unwrap();
/// let results: Vec<ParseResult> = parser.feed(b"a=1;b=2;c=3;").collect();
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[2].name(), "c");
/// ```
///
/// or one step at a time:
///
/// ```rust
/// use propstream::PropertyParser;
///
/// let mut parser = PropertyParser::with_capacity(64).unwrap();
/// parser.absorb(b"user = \"J. Doe\"\n");
/// assert!(parser.parse_next());
/// assert!(parser.is_valid());
/// assert_eq!(parser.property_value(), "J. Doe");
/// assert!(!parser.parse_next());
/// ```
#[derive(Debug)]
pub struct PropertyParser {
    options: ParserOptions,
    window: Window,
    token: Vec<u8>,
    current: Option<ParseResult>,
}

impl PropertyParser {
    /// Create a parser.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::ZeroCapacity`] if `options.buffer_capacity` is
    /// zero.
    pub fn new(options: ParserOptions) -> Result<Self, OptionsError> {
        let options = options.validate()?;
        Ok(Self {
            options,
            window: Window::new(options.buffer_capacity),
            token: Vec::new(),
            current: None,
        })
    }

    /// Create a case-sensitive parser holding at most `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::ZeroCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, OptionsError> {
        Self::new(ParserOptions {
            buffer_capacity: capacity,
            ..ParserOptions::default()
        })
    }

    /// The options this parser was built with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Number of bytes received but not yet consumed as tokens.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.window.len()
    }

    /// Feed a chunk and iterate over the results it completes.
    ///
    /// The chunk may be any size; it is absorbed in pieces that fit the
    /// buffer. Bytes of an entry that is still incomplete when the chunk runs
    /// out stay buffered for the next call.
    ///
    /// Dropping the iterator early still absorbs the rest of `chunk`. Entries
    /// that must be parsed to make room for it are discarded; entries that fit
    /// stay buffered and are reported by the next feed.
    ///
    /// Collecting nothing (`parser.feed(chunk).count()`) runs a validation pass
    /// that discards every result.
    pub fn feed<'p, 'src>(&'p mut self, chunk: &'src [u8]) -> Feed<'p, 'src> {
        self.current = None;
        Feed {
            parser: self,
            input: chunk,
            draining: false,
        }
    }

    /// Feed a chunk and call `on_result` for each result, in order.
    ///
    /// ```rust
    /// use propstream::PropertyParser;
    ///
    /// let mut parser = PropertyParser::with_capacity(32).unwrap();
    /// let mut names = Vec::new();
    /// parser.feed_with(b"a=1\r\nb=2\r\n", |r| names.push(r.name().to_owned()));
    /// assert_eq!(names, ["a", "b"]);
    /// ```
    pub fn feed_with<F>(&mut self, chunk: &[u8], mut on_result: F)
    where
        F: FnMut(&ParseResult),
    {
        for result in self.feed(chunk) {
            on_result(&result);
        }
    }

    /// Append as much of `data` as fits without parsing anything.
    ///
    /// Returns the number of bytes taken. Use with [`parse_next`] to drive the
    /// parser by hand.
    ///
    /// [`parse_next`]: Self::parse_next
    pub fn absorb(&mut self, data: &[u8]) -> usize {
        self.window.extend(data)
    }

    /// Consume the next token from the buffer, if a complete one is there.
    ///
    /// Returns `true` if a token was consumed. Its result is then available
    /// from [`result`](Self::result) and the accessors until the next call. A
    /// consumed token whose content was empty (a blank or comment-only line)
    /// leaves no result. Returns `false` when more input is needed.
    pub fn parse_next(&mut self) -> bool {
        self.current = None;
        self.token.clear();

        let full = self.window.is_full();
        match scan(self.window.as_slice(), full, &mut self.token) {
            Scan::NeedMore => false,
            Scan::Separators(n) => {
                self.window.consume(n);
                false
            }
            Scan::Token {
                consumed, forced, ..
            } => {
                if forced {
                    log::debug!(
                        "buffer full at {} bytes without a delimiter; flushing as one token",
                        self.options.buffer_capacity
                    );
                }
                self.window.consume(consumed);
                self.current = interpret(&self.token, self.options.case_insensitive);
                log::trace!("consumed {consumed} bytes: {:?}", self.current);
                true
            }
        }
    }

    /// The result of the last [`parse_next`](Self::parse_next), if any.
    #[must_use]
    pub fn result(&self) -> Option<&ParseResult> {
        self.current.as_ref()
    }

    /// Whether the last token was a valid property.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.current.as_ref().is_some_and(ParseResult::is_valid)
    }

    /// Name of the last property; empty unless [`is_valid`](Self::is_valid).
    #[must_use]
    pub fn property_name(&self) -> &BStr {
        self.current.as_ref().map_or(b"".as_bstr(), ParseResult::name)
    }

    /// Value of the last property; empty unless [`is_valid`](Self::is_valid).
    #[must_use]
    pub fn property_value(&self) -> &BStr {
        self.current.as_ref().map_or(b"".as_bstr(), ParseResult::value)
    }

    /// Raw text of the last token if it was not a valid property.
    #[must_use]
    pub fn unrecognized_raw(&self) -> &BStr {
        self.current.as_ref().map_or(b"".as_bstr(), ParseResult::raw)
    }

    /// Drop buffered input and the last result. Options are kept.
    pub fn reset(&mut self) {
        log::debug!("reset with {} bytes buffered", self.window.len());
        self.window.clear();
        self.token.clear();
        self.current = None;
    }
}

/// Iterator returned by [`PropertyParser::feed`].
#[must_use = "results are discarded unless the iterator is consumed"]
#[derive(Debug)]
pub struct Feed<'p, 'src> {
    parser: &'p mut PropertyParser,
    input: &'src [u8],
    draining: bool,
}

impl Iterator for Feed<'_, '_> {
    type Item = ParseResult;

    fn next(&mut self) -> Option<ParseResult> {
        loop {
            if self.draining {
                if self.parser.parse_next() {
                    match self.parser.current.take() {
                        Some(result) => return Some(result),
                        None => continue,
                    }
                }
                self.draining = false;
            }

            if self.input.is_empty() {
                return None;
            }

            let taken = self.parser.window.extend(self.input);
            let (piece, rest) = self.input.split_at(taken);
            self.input = rest;
            self.draining = rest.is_empty()
                || self.parser.window.is_full()
                || piece.iter().any(|&b| b == b'\n' || b == b';');
        }
    }
}

impl Drop for Feed<'_, '_> {
    fn drop(&mut self) {
        let mut discarded = 0usize;
        while !self.input.is_empty() {
            let taken = self.parser.window.extend(self.input);
            self.input = &self.input[taken..];
            while self.parser.window.is_full() {
                if self.parser.parse_next() && self.parser.current.is_some() {
                    discarded += 1;
                }
            }
        }
        if discarded > 0 {
            log::debug!("feed dropped early; discarded {discarded} results to absorb the rest");
        }
        self.parser.current = None;
    }
}
