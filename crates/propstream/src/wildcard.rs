//! Shell-style wildcard matching for property names.
//!
//! Only two metacharacters exist: `?` matches exactly one byte and `*` matches
//! any run of bytes, including none. There is no escaping and no character
//! classes.

/// Returns `true` if `text` matches `pattern` in full.
///
/// With `case_sensitive == false` both sides are compared with ASCII case
/// folding.
///
/// A `*` in the pattern is always a wildcard, even against a literal `*` in
/// the text. Matchers that try the literal comparison first reject
/// `matches("*a", "*", true)`; this one accepts it.
///
/// ```rust
/// use propstream::matches;
///
/// assert!(matches("com.example.MyTest", "com.example.*", true));
/// assert!(matches("MyTest", "my?est", false));
/// assert!(!matches("", "?", true));
/// assert!(matches("*a", "*", true));
/// ```
#[must_use]
pub fn matches(text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>, case_sensitive: bool) -> bool {
    let text = text.as_ref();
    let pattern = pattern.as_ref();
    let same = |a: u8, b: u8| {
        if case_sensitive {
            a == b
        } else {
            a.eq_ignore_ascii_case(&b)
        }
    };

    let mut t = 0;
    let mut p = 0;
    // Position of the last `*` seen and the text index it is currently
    // assumed to have swallowed up to.
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some(&b'?') => {
                t += 1;
                p += 1;
            }
            Some(&b'*') => {
                star = Some((p, t));
                p += 1;
            }
            Some(&c) if same(c, text[t]) => {
                t += 1;
                p += 1;
            }
            _ => match star {
                Some((star_p, star_t)) => {
                    star = Some((star_p, star_t + 1));
                    p = star_p + 1;
                    t = star_t + 1;
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == b'*')
}
