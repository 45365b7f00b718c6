//! Scanner: finds the next token in a byte window.
//!
//! The scanner is stateless between calls. Each call walks the window from
//! the front, so a token that is still incomplete is simply rescanned once
//! more bytes arrive. This keeps partial-input resumption trivial: nothing
//! about a half-seen comment, quote or continuation has to survive between
//! feeds.
//!
//! Grammar, outside quotes unless noted:
//! - leading `\n`, `\r` and `;` are separators and never start a token;
//! - `;`, `\n` and `\r\n` end a token and are consumed with it;
//! - `#` starts a comment running to the end of the line;
//! - `/* ... */` is dropped wherever it appears, including mid-token;
//! - a backslash directly before `\n` or `\r\n` joins the next line;
//! - spaces and tabs are dropped;
//! - `"` opens a quoted run in which whitespace, `#`, `;` and `/*` are plain
//!   content, `\` escapes the next byte, and a newline still ends the token.
//!
//! Quotes and escape backslashes are copied into the token; resolving them is
//! the interpreter's job.


/// Receives the content bytes of a token as the scanner accepts them.
pub(crate) trait TokenSink {
    fn push(&mut self, byte: u8);
}

impl TokenSink for alloc::vec::Vec<u8> {
    fn push(&mut self, byte: u8) {
        alloc::vec::Vec::push(self, byte);
    }
}

/// Discards content; used when only token boundaries matter.
impl TokenSink for () {
    fn push(&mut self, _byte: u8) {}
}

/// Outcome of one [`scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scan {
    /// No delimiter yet and the window has room; feed more bytes.
    NeedMore,
    /// The window holds nothing but `n` separator bytes.
    Separators(usize),
    /// A token was found.
    Token {
        /// Index of the first byte after the leading separators.
        start: usize,
        /// Index of the delimiter, or the window length for a forced flush.
        end: usize,
        /// Bytes to drop from the front of the window, delimiter included.
        consumed: usize,
        /// The window was full and no delimiter was found.
        forced: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Unquoted,
    Quoted,
    Escaped,
    LineComment,
    BlockComment,
}

pub(crate) fn is_separator(b: u8) -> bool {
    matches!(b, b'\n' | b'\r' | b';')
}

/// Scan `window` for the next token, pushing its content into `sink`.
///
/// `full` tells the scanner that no more bytes can be added to the window, so
/// a missing delimiter flushes everything instead of asking for more input.
/// On [`Scan::NeedMore`] the sink may hold a partial token; callers clear it
/// before the next attempt.
pub(crate) fn scan<S: TokenSink + ?Sized>(window: &[u8], full: bool, sink: &mut S) -> Scan {
    let Some(start) = window.iter().position(|&b| !is_separator(b)) else {
        return if window.is_empty() {
            Scan::NeedMore
        } else {
            Scan::Separators(window.len())
        };
    };

    let at = |i: usize| window.get(i).copied();
    let mut mode = Mode::Unquoted;
    let mut i = start;
    let mut delimiter = None;

    while i < window.len() {
        let c = window[i];
        let newline = c == b'\n' || (c == b'\r' && at(i + 1) == Some(b'\n'));

        match mode {
            Mode::LineComment => {
                if newline {
                    delimiter = Some(i);
                    break;
                }
            }
            Mode::BlockComment => {
                if c == b'*' && at(i + 1) == Some(b'/') {
                    mode = Mode::Unquoted;
                    i += 1;
                }
            }
            Mode::Quoted | Mode::Escaped if newline => {
                delimiter = Some(i);
                break;
            }
            Mode::Escaped => {
                sink.push(c);
                mode = Mode::Quoted;
            }
            Mode::Quoted => {
                sink.push(c);
                match c {
                    b'\\' => mode = Mode::Escaped,
                    b'"' => mode = Mode::Unquoted,
                    _ => {}
                }
            }
            Mode::Unquoted => match c {
                b'#' => mode = Mode::LineComment,
                b'/' if at(i + 1) == Some(b'*') => {
                    mode = Mode::BlockComment;
                    i += 1;
                }
                b'\\' if at(i + 1) == Some(b'\n') => i += 1,
                b'\\' if at(i + 1) == Some(b'\r') && at(i + 2) == Some(b'\n') => i += 2,
                b' ' | b'\t' => {}
                b';' => {
                    delimiter = Some(i);
                    break;
                }
                _ if newline => {
                    delimiter = Some(i);
                    break;
                }
                b'"' => {
                    sink.push(c);
                    mode = Mode::Quoted;
                }
                _ => sink.push(c),
            },
        }
        i += 1;
    }

    match delimiter {
        Some(end) => {
            let width = if window[end] == b'\r' { 2 } else { 1 };
            Scan::Token {
                start,
                end,
                consumed: end + width,
                forced: false,
            }
        }
        None if full => Scan::Token {
            start,
            end: window.len(),
            consumed: window.len(),
            forced: true,
        },
        None => Scan::NeedMore,
    }
}
