//! One-shot lookup of a single property in a complete buffer.

use crate::scanner::{Scan, scan};

/// Find the value of property `name` in `buf` without parsing into results.
///
/// `buf` is split into tokens with the same grammar as
/// [`PropertyParser`](crate::PropertyParser), the end of `buf` ending the last
/// token. For each token the key before the first `=` outside quotes and
/// comments is compared with `name`; spaces and tabs in the key are ignored and
/// the key ends at a `/*` or `#`. Line continuations inside a key are not
/// understood.
///
/// On the first match, returns the suffix of `buf` that starts at the first
/// non-blank byte after the `=`. Nothing is copied, trimmed at the end or
/// unescaped: the caller reads as much of the value as it needs.
///
/// ```rust
/// use propstream::find_property_value;
///
/// let buf = b"a=1\nName = Value\n";
/// let value = find_property_value(buf, b"name", false).unwrap();
/// assert!(value.starts_with(b"Value\n"));
/// assert_eq!(buf.len() - value.len(), 11);
/// assert!(find_property_value(buf, b"name", true).is_none());
/// ```
#[must_use]
pub fn find_property_value<'a>(
    buf: &'a [u8],
    name: impl AsRef<[u8]>,
    case_sensitive: bool,
) -> Option<&'a [u8]> {
    let name = name.as_ref();
    let mut pos = 0;
    while pos < buf.len() {
        let rest = &buf[pos..];
        let (start, end, consumed) = match scan(rest, true, &mut ()) {
            Scan::Token {
                start, end, consumed, ..
            } => (start, end, consumed),
            Scan::NeedMore | Scan::Separators(_) => return None,
        };
        let token = &rest[start..end];

        if let Some(eq) = key_end(token).filter(|&eq| eq > 0) {
            let key = key_bytes(&token[..eq]);
            let hit = if case_sensitive {
                key.eq(name.iter().copied())
            } else {
                key.map(|b| b.to_ascii_lowercase())
                    .eq(name.iter().map(u8::to_ascii_lowercase))
            };
            if hit {
                let blank = token[eq + 1..]
                    .iter()
                    .take_while(|&&b| b == b' ' || b == b'\t')
                    .count();
                return Some(&rest[start + eq + 1 + blank..]);
            }
        }

        pos += consumed;
    }
    None
}

/// Index of the first `=` outside quotes and comments.
fn key_end(token: &[u8]) -> Option<usize> {
    let mut quoted = false;
    let mut escaped = false;
    let mut i = 0;
    while i < token.len() {
        let c = token[i];
        if quoted {
            if escaped {
                escaped = false;
            } else if c == b'\\' {
                escaped = true;
            } else if c == b'"' {
                quoted = false;
            }
        } else {
            match c {
                b'#' => return None,
                b'/' if token.get(i + 1) == Some(&b'*') => {
                    i += 2;
                    while i < token.len() && !(token[i] == b'*' && token.get(i + 1) == Some(&b'/')) {
                        i += 1;
                    }
                    i += 1;
                }
                b'"' => quoted = true,
                b'=' => return Some(i),
                _ => {}
            }
        }
        i += 1;
    }
    None
}

/// Key bytes with blanks dropped, up to any comment start.
fn key_bytes(raw: &[u8]) -> impl Iterator<Item = u8> + '_ {
    let stop = raw
        .iter()
        .enumerate()
        .position(|(i, &b)| b == b'#' || (b == b'/' && raw.get(i + 1) == Some(&b'*')))
        .unwrap_or(raw.len());
    raw[..stop]
        .iter()
        .copied()
        .filter(|&b| b != b' ' && b != b'\t')
}
