//! Turns scanned token content into a [`ParseResult`].

use bstr::BString;

use crate::{error::Malformed, result::ParseResult};

fn folded(bytes: &[u8], fold: bool) -> BString {
    let mut out = BString::from(bytes);
    if fold {
        out.make_ascii_lowercase();
    }
    out
}

/// Index of the first `=` not preceded by an unescaped backslash, and whether
/// the token's unescaped quotes balance.
fn survey(token: &[u8]) -> (Option<usize>, bool) {
    let mut escaped = false;
    let mut quotes = 0usize;
    let mut equals = None;
    for (i, &c) in token.iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            b'\\' => escaped = true,
            b'"' => quotes += 1,
            b'=' if equals.is_none() => equals = Some(i),
            _ => {}
        }
    }
    (equals, quotes % 2 == 0)
}

/// Resolve backslash escapes in the interior of a quoted value.
///
/// Returns `None` if the interior ends in an unpaired backslash.
fn unescape(interior: &[u8]) -> Option<BString> {
    let mut out = BString::from(alloc::vec::Vec::with_capacity(interior.len()));
    let mut escaped = false;
    for &c in interior {
        if escaped {
            out.push(c);
            escaped = false;
        } else if c == b'\\' {
            escaped = true;
        } else {
            out.push(c);
        }
    }
    (!escaped).then_some(out)
}

/// Classify one token. Returns `None` for empty content, which carries no
/// information (a blank or comment-only line).
pub(crate) fn interpret(token: &[u8], fold: bool) -> Option<ParseResult> {
    if token.is_empty() {
        return None;
    }

    let reject = |reason| ParseResult::Unrecognized {
        raw: folded(token, fold),
        reason,
    };

    let (equals, balanced) = survey(token);
    if !balanced {
        return Some(reject(Malformed::UnbalancedQuotes));
    }
    let Some(eq) = equals else {
        return Some(reject(Malformed::MissingEquals));
    };
    if eq == 0 {
        return Some(reject(Malformed::EmptyName));
    }

    let (name, value) = (&token[..eq], &token[eq + 1..]);
    let value = match value {
        [b'"', interior @ .., b'"'] => match unescape(interior) {
            Some(value) => value,
            None => return Some(reject(Malformed::DanglingEscape)),
        },
        _ => BString::from(value),
    };

    Some(ParseResult::Property {
        name: folded(name, fold),
        value,
    })
}
