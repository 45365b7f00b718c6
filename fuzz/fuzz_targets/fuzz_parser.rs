#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use propstream::{ParseResult, ParserOptions, PropertyParser, find_property_value, split_at_offsets};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    data: &'a [u8],
    splits: Vec<usize>,
    capacity: u16,
    case_insensitive: bool,
}

fn run(options: ParserOptions, chunks: &[&[u8]]) -> Vec<ParseResult> {
    let mut parser = PropertyParser::new(options).expect("capacity is non-zero");
    let mut out = Vec::new();
    for chunk in chunks {
        out.extend(parser.feed(chunk));
    }
    assert!(parser.buffered() <= options.buffer_capacity);
    out
}

fuzz_target!(|input: Input<'_>| {
    let options = ParserOptions {
        buffer_capacity: usize::from(input.capacity % 512) + 1,
        case_insensitive: input.case_insensitive,
    };
    let chunks = split_at_offsets(input.data, &input.splits);
    let results = run(options, &chunks);

    for r in &results {
        match r {
            ParseResult::Property { name, .. } => {
                assert!(!name.is_empty());
                if options.case_insensitive {
                    assert!(!name.iter().any(u8::is_ascii_uppercase));
                }
            }
            ParseResult::Unrecognized { raw, .. } => {
                assert!(!raw.is_empty());
                assert!(raw.len() <= options.buffer_capacity);
            }
        }
    }

    // With room for the whole input, no fragment is forced and chunking
    // cannot change the outcome.
    if input.data.len() < options.buffer_capacity {
        assert_eq!(results, run(options, &[input.data]));
    }

    for r in &results {
        if let ParseResult::Property { name, .. } = r {
            if let Some(value) = find_property_value(input.data, name, !options.case_insensitive) {
                // The value is a view into the caller's buffer, running to its end.
                assert!(value.len() < input.data.len());
                assert!(core::ptr::eq(
                    value.as_ptr_range().end,
                    input.data.as_ptr_range().end
                ));
            }
        }
    }
});
