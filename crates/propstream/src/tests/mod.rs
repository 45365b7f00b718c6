use alloc::vec::Vec;

use crate::{ParseResult, ParserOptions, PropertyParser};

mod parse_good;

pub(crate) fn parser(capacity: usize) -> PropertyParser {
    PropertyParser::with_capacity(capacity).unwrap()
}

pub(crate) fn folding_parser(capacity: usize) -> PropertyParser {
    PropertyParser::new(ParserOptions {
        buffer_capacity: capacity,
        case_insensitive: true,
    })
    .unwrap()
}

/// Feed `input` through the callback interface and record every result.
pub(crate) fn feed_all(parser: &mut PropertyParser, input: &[u8]) -> Vec<ParseResult> {
    let mut seen = Vec::new();
    parser.feed_with(input, |r| seen.push(r.clone()));
    seen
}

pub(crate) fn property(name: &str, value: &str) -> ParseResult {
    ParseResult::Property {
        name: name.into(),
        value: value.into(),
    }
}

pub(crate) fn unrecognized(raw: &str, reason: crate::Malformed) -> ParseResult {
    ParseResult::Unrecognized {
        raw: raw.into(),
        reason,
    }
}
