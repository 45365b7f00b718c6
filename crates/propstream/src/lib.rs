//! An incremental parser for streams of `name=value` declarations.
//!
//! Input is a superset of Java-style `.properties` text: entries separated by
//! newlines or `;`, `#` line comments, `/* */` block comments, backslash line
//! continuations and optionally double-quoted values with `\"` / `\\`
//! escapes. Bytes may arrive in chunks of any size; each entry is reported as
//! soon as its delimiter has been seen.
//!
//! ```rust
//! use propstream::{ParserOptions, PropertyParser};
//!
//! let mut parser = PropertyParser::new(ParserOptions::default()).unwrap();
//! let mut seen = Vec::new();
//! parser.feed_with(b"host = example.org\nport=80", |r| seen.push(r.to_string()));
//! parser.feed_with(b"80;bogus\n", |r| seen.push(r.to_string()));
//! assert_eq!(seen, ["host=example.org", "port=8080", "bogus"]);
//! ```
//!
//! The internal buffer is bounded by [`ParserOptions::buffer_capacity`]. A
//! line longer than the capacity is flushed in capacity-sized fragments
//! rather than growing the buffer.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod chunk_utils;
mod error;
mod interpret;
mod lookup;
mod options;
mod parser;
mod result;
mod scanner;
pub mod wildcard;

#[cfg(test)]
mod tests;

#[doc(hidden)]
pub use chunk_utils::{produce_chunks, split_at_offsets};
pub use error::{Malformed, OptionsError};
pub use lookup::find_property_value;
pub use options::{DEFAULT_BUFFER_CAPACITY, ParserOptions};
pub use parser::{Feed, PropertyParser};
pub use result::ParseResult;
pub use wildcard::matches;
